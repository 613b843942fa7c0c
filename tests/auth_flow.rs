use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use poseidon_trading::app::build_app;
use poseidon_trading::auth::password::hash_password;
use poseidon_trading::state::AppState;
use poseidon_trading::users::repo::User;

fn account(id: i32, username: &str, password: &str, role: &str) -> User {
    User {
        id,
        username: username.into(),
        password_hash: hash_password(password).expect("hashing should succeed"),
        fullname: "Test Account".into(),
        role: role.into(),
    }
}

fn app_with(users: Vec<User>) -> Router {
    build_app(AppState::fake_with_users(users))
}

async fn send(app: &Router, req: Request<Body>) -> axum::http::Response<Body> {
    app.clone().oneshot(req).await.expect("request should run")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request builds")
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn location(res: &axum::http::Response<Body>) -> &str {
    res.headers()[header::LOCATION]
        .to_str()
        .expect("location is ascii")
}

/// Returns the `name=value` pair of the session cookie set by a response.
fn session_cookie(res: &axum::http::Response<Body>) -> String {
    let raw = res.headers()[header::SET_COOKIE]
        .to_str()
        .expect("cookie is ascii");
    raw.split(';').next().expect("cookie has a value").to_string()
}

async fn login(app: &Router, username: &str, password: &str) -> axum::http::Response<Body> {
    send(
        app,
        post_form(
            "/login-process",
            &format!("username={username}&password={password}"),
        ),
    )
    .await
}

#[tokio::test]
async fn public_paths_are_reachable_without_a_session() {
    let app = app_with(vec![]);

    let res = send(&app, get("/login")).await;
    assert_eq!(res.status(), StatusCode::OK);

    // Error pages answer with their own status, never a login redirect.
    let res = send(&app, get("/403")).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let res = send(&app, get("/404")).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_paths_redirect_anonymous_requests_to_login() {
    let app = app_with(vec![]);
    for uri in ["/", "/bidList/list", "/user/add", "/trade/update/7"] {
        let res = send(&app, get(uri)).await;
        assert_eq!(res.status(), StatusCode::FOUND, "uri {uri}");
        assert_eq!(location(&res), "/login", "uri {uri}");
    }
}

#[tokio::test]
async fn successful_login_redirects_home_with_a_session_cookie() {
    let app = app_with(vec![account(1, "admin", "Abcdef1!", "ADMIN")]);

    let res = login(&app, "admin", "Abcdef1!").await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/");

    let cookie = session_cookie(&res);
    let res = send(&app, get_with_cookie("/", &cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = app_with(vec![account(1, "admin", "Abcdef1!", "ADMIN")]);

    let bad_password = login(&app, "admin", "WrongPass1!").await;
    let unknown_user = login(&app, "nobody", "Abcdef1!").await;

    assert_eq!(bad_password.status(), unknown_user.status());
    assert_eq!(bad_password.status(), StatusCode::FOUND);
    assert_eq!(location(&bad_password), "/login?error");
    assert_eq!(location(&unknown_user), "/login?error");
    assert!(bad_password.headers().get(header::SET_COOKIE).is_none());
    assert!(unknown_user.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn login_error_flag_renders_a_generic_message() {
    let app = app_with(vec![]);
    let res = send(&app, get("/login?error")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.into_body().collect().await.expect("body reads").to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Invalid username or password."));
    assert!(!html.contains("username does not exist"));
}

#[tokio::test]
async fn non_admin_gets_403_and_keeps_their_session() {
    let app = app_with(vec![account(2, "jules", "Abcdef1!", "USER")]);

    let res = login(&app, "jules", "Abcdef1!").await;
    assert_eq!(res.status(), StatusCode::FOUND);
    let cookie = session_cookie(&res);

    let res = send(&app, get_with_cookie("/bidList/list", &cookie)).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The denial did not tear down the session: an allowed request works.
    let res = send(&app, get_with_cookie("/login", &cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);

    // And a second protected request is still a 403, not a login redirect.
    let res = send(&app, get_with_cookie("/", &cookie)).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn logout_invalidates_the_session_server_side() {
    let app = app_with(vec![account(1, "admin", "Abcdef1!", "ADMIN")]);

    let res = login(&app, "admin", "Abcdef1!").await;
    let cookie = session_cookie(&res);

    let res = send(&app, {
        Request::builder()
            .method("POST")
            .uri("/app-logout")
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::empty())
            .expect("request builds")
    })
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/login?logout");

    // Replaying the old cookie no longer authenticates.
    let res = send(&app, get_with_cookie("/", &cookie)).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn created_account_stores_a_hash_and_can_sign_in() {
    let state = AppState::fake_with_users(vec![account(1, "admin", "Abcdef1!", "ADMIN")]);
    let app = build_app(state.clone());

    let res = login(&app, "admin", "Abcdef1!").await;
    let cookie = session_cookie(&res);

    let res = send(&app, {
        Request::builder()
            .method("POST")
            .uri("/user/validate")
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "username=newbie&fullname=New+Person&password=Str0ngPw!&role=USER",
            ))
            .expect("request builds")
    })
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/user/list");

    // The stored credential is a salted digest, never the plaintext.
    let stored = state
        .credentials
        .find_by_username("newbie")
        .await
        .expect("lookup works")
        .expect("account was stored");
    assert_ne!(stored.password_hash, "Str0ngPw!");
    assert!(stored.password_hash.starts_with("$argon2"));

    // The new credentials authenticate end to end.
    let res = login(&app, "newbie", "Str0ngPw!").await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/");
}

#[tokio::test]
async fn duplicate_username_redisplays_the_form() {
    let app = app_with(vec![account(1, "admin", "Abcdef1!", "ADMIN")]);
    let res = login(&app, "admin", "Abcdef1!").await;
    let cookie = session_cookie(&res);

    let res = send(&app, {
        Request::builder()
            .method("POST")
            .uri("/user/validate")
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "username=admin&fullname=Second+Admin&password=Str0ngPw!&role=ADMIN",
            ))
            .expect("request builds")
    })
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.into_body().collect().await.expect("body reads").to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Username is already taken"));
}

#[tokio::test]
async fn weak_password_is_rejected_before_any_account_is_created() {
    let app = app_with(vec![account(1, "admin", "Abcdef1!", "ADMIN")]);
    let res = login(&app, "admin", "Abcdef1!").await;
    let cookie = session_cookie(&res);

    // No digit, symbol or uppercase: rejected at validation, which means
    // the handler stops before the hasher or the database are touched.
    let res = send(&app, {
        Request::builder()
            .method("POST")
            .uri("/user/validate")
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "username=newbie&fullname=New+Person&password=abcdefgh&role=USER",
            ))
            .expect("request builds")
    })
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.into_body().collect().await.expect("body reads").to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Password must contain at least one uppercase letter"));
    // The submitted plaintext is never echoed back into the form.
    assert!(!html.contains("abcdefgh"));
}
