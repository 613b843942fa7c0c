use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bidList/list", get(handlers::list))
        .route("/bidList/add", get(handlers::add_form))
        .route("/bidList/validate", post(handlers::create))
        .route("/bidList/update/:id", get(handlers::update_form))
        .route("/bidList/update/:id", post(handlers::update))
        .route("/bidList/delete/:id", get(handlers::delete))
}
