use std::net::SocketAddr;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::session::Identity;
use crate::config::AppConfig;
use crate::state::AppState;
use crate::{auth, bids, curves, ratings, rules, trades, users, views};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(auth::router())
        .merge(users::router())
        .merge(bids::router())
        .merge(curves::router())
        .merge(ratings::router())
        .merge(rules::router())
        .merge(trades::router())
        .nest_service("/css", ServeDir::new("static/css"))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::authorize,
        ))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn home(Extension(identity): Extension<Option<Identity>>) -> Html<String> {
    let greeting = identity
        .map(|id| format!("Signed in as {}.", views::escape(&id.username)))
        .unwrap_or_default();
    views::page(
        "Home",
        &format!(
            "<h1>Poseidon Trading</h1>\n<p>{greeting}</p>\n<ul>\n\
             <li><a href=\"/bidList/list\">Bid lists</a></li>\n\
             <li><a href=\"/curvePoint/list\">Curve points</a></li>\n\
             <li><a href=\"/rating/list\">Ratings</a></li>\n\
             <li><a href=\"/ruleName/list\">Rules</a></li>\n\
             <li><a href=\"/trade/list\">Trades</a></li>\n\
             <li><a href=\"/user/list\">Users</a></li>\n\
             </ul>\n\
             <form method=\"post\" action=\"/app-logout\">\
             <button type=\"submit\">Log out</button></form>"
        ),
    )
}

async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::error_page("404", "The requested page was not found."),
    )
}
