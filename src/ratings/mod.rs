use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rating/list", get(handlers::list))
        .route("/rating/add", get(handlers::add_form))
        .route("/rating/validate", post(handlers::create))
        .route("/rating/update/:id", get(handlers::update_form))
        .route("/rating/update/:id", post(handlers::update))
        .route("/rating/delete/:id", get(handlers::delete))
}
