use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/curvePoint/list", get(handlers::list))
        .route("/curvePoint/add", get(handlers::add_form))
        .route("/curvePoint/validate", post(handlers::create))
        .route("/curvePoint/update/:id", get(handlers::update_form))
        .route("/curvePoint/update/:id", post(handlers::update))
        .route("/curvePoint/delete/:id", get(handlers::delete))
}
