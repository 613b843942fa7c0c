use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trade/list", get(handlers::list))
        .route("/trade/add", get(handlers::add_form))
        .route("/trade/validate", post(handlers::create))
        .route("/trade/update/:id", get(handlers::update_form))
        .route("/trade/update/:id", post(handlers::update))
        .route("/trade/delete/:id", get(handlers::delete))
}
