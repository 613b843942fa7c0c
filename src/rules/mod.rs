use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ruleName/list", get(handlers::list))
        .route("/ruleName/add", get(handlers::add_form))
        .route("/ruleName/validate", post(handlers::create))
        .route("/ruleName/update/:id", get(handlers::update_form))
        .route("/ruleName/update/:id", post(handlers::update))
        .route("/ruleName/delete/:id", get(handlers::delete))
}
