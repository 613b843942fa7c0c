use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod policy;
pub mod session;
pub mod store;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::login_form))
        .route("/login-process", post(handlers::login_process))
        .route("/app-logout", post(handlers::logout))
        .route("/403", get(handlers::forbidden))
        .route("/404", get(handlers::not_found))
}
