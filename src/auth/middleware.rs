use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use crate::auth::handlers::forbidden;
use crate::auth::policy::{self, Decision};
use crate::auth::session::SESSION_COOKIE;
use crate::state::AppState;
use crate::views;

/// Per-request authorization gate.
///
/// Resolves the session cookie to an identity, evaluates the path policy,
/// and either forwards the request (with the identity attached as an
/// extension), redirects to the login form, or renders the 403 page. A
/// denied request leaves the session intact.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    let identity = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()));

    let path = req.uri().path().to_owned();
    match policy::evaluate(&path, identity.as_ref()) {
        Decision::Allow => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Decision::RequireLogin => {
            debug!(%path, "unauthenticated request to protected path");
            views::redirect_to("/login")
        }
        Decision::Deny => {
            let username = identity.map(|id| id.username).unwrap_or_default();
            warn!(%path, %username, "insufficient role");
            forbidden().await.into_response()
        }
    }
}
