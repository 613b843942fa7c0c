use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/list", get(handlers::list))
        .route("/user/add", get(handlers::add_form))
        .route("/user/validate", post(handlers::create))
        .route("/user/update/:id", get(handlers::update_form))
        .route("/user/update/:id", post(handlers::update))
        .route("/user/delete/:id", get(handlers::delete))
}
