use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::views;

/// Application-level failures that escape a handler.
///
/// Authentication and authorization outcomes are handled at the boundary
/// (redirects and the 403 page) and never surface here; this type only
/// covers missing records and unexpected infrastructure failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("credential store failure")]
    Store(#[source] anyhow::Error),
    #[error("password hashing failed")]
    Hash(#[source] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                views::error_page("404", &format!("The requested {what} was not found.")),
            )
                .into_response(),
            other => {
                error!(error = %other, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    views::error_page("500", "Something went wrong. Please try again later."),
                )
                    .into_response()
            }
        }
    }
}
