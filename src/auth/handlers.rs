use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::auth::password::verify_password;
use crate::auth::policy::Role;
use crate::auth::session::{Identity, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginFlags {
    error: Option<String>,
    logout: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_form(Query(flags): Query<LoginFlags>) -> Html<String> {
    let notice = if flags.error.is_some() {
        "<p class=\"error\">Invalid username or password.</p>\n"
    } else if flags.logout.is_some() {
        "<p class=\"notice\">You have been logged out.</p>\n"
    } else {
        ""
    };
    views::page(
        "Login",
        &format!(
            "<h1>Sign in</h1>\n{notice}\
             <form method=\"post\" action=\"/login-process\">\n\
             <label>Username <input type=\"text\" name=\"username\"></label>\n\
             <label>Password <input type=\"password\" name=\"password\"></label>\n\
             <button type=\"submit\">Sign in</button>\n\
             </form>"
        ),
    )
}

/// Consume the login form. Success establishes a session and redirects to
/// the landing page; any failure redirects back with one generic error flag
/// so the response never reveals whether the username existed.
#[instrument(skip(state, jar, form))]
pub async fn login_process(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim();
    let user = state
        .credentials
        .find_by_username(username)
        .await
        .map_err(AppError::Store)?;

    let user = match user {
        Some(user) => user,
        None => {
            warn!(%username, "login failed: unknown username");
            return Ok(views::redirect_to("/login?error"));
        }
    };

    if !verify_password(&form.password, &user.password_hash) {
        warn!(%username, "login failed: bad password");
        return Ok(views::redirect_to("/login?error"));
    }

    let role = match Role::parse(&user.role) {
        Some(role) => role,
        None => {
            // Should be unreachable: validation never persists an open role.
            error!(%username, role = %user.role, "account has unrecognized role");
            return Ok(views::redirect_to("/login?error"));
        }
    };

    let token = state.sessions.create(Identity {
        username: user.username.clone(),
        role,
    });
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    info!(%username, role = role.as_str(), "login succeeded");
    Ok((jar.add(cookie), views::redirect_to("/")).into_response())
}

/// Tear down the server-side session and clear the cookie.
#[instrument(skip(state, jar))]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if state.sessions.remove(cookie.value()) {
            info!("session invalidated");
        }
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    (jar, views::redirect_to("/login?logout")).into_response()
}

pub async fn forbidden() -> impl IntoResponse {
    (
        StatusCode::FORBIDDEN,
        views::error_page("403", "You are not authorized for the requested data."),
    )
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::error_page("404", "The requested page was not found."),
    )
}
