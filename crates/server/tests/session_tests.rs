//! Session middleware behaviour, exercised through a bare axum router.
//! Run with: `cargo test -p server --features server --test session_tests`

#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use server::session::{session_middleware, CookieSlot, PendingCookieAction, SessionToken};
use tower::ServiceExt;

fn app() -> Router {
    Router::new()
        .route(
            "/whoami",
            get(|token: Option<Extension<SessionToken>>| async move {
                token.map(|Extension(SessionToken(t))| t).unwrap_or_default()
            }),
        )
        .route(
            "/signin",
            get(|Extension(slot): Extension<CookieSlot>| async move {
                slot.put(PendingCookieAction::Set("fresh-token".to_string()));
                StatusCode::OK
            }),
        )
        .route(
            "/signout",
            get(|Extension(slot): Extension<CookieSlot>| async move {
                slot.put(PendingCookieAction::Clear);
                StatusCode::OK
            }),
        )
        .layer(middleware::from_fn(session_middleware))
}

async fn call(app: Router, uri: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut req = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn session_token_is_exposed_to_handlers() {
    let response = call(app(), "/whoami", Some("casefold_session=abc123")).await;
    assert_eq!(body_text(response).await, "abc123");
}

#[tokio::test]
async fn anonymous_requests_pass_through() {
    let response = call(app(), "/whoami", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "");
}

#[tokio::test]
async fn scheduled_session_is_written_as_cookie() {
    let response = call(app(), "/signin", None).await;
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("casefold_session=fresh-token"));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn scheduled_clear_expires_cookie() {
    let response = call(app(), "/signout", Some("casefold_session=abc123")).await;
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("casefold_session="));
    assert!(set_cookie.contains("Max-Age=0"));
}
