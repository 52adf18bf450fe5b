//! Session cookie handling.
//!
//! The backend issues an access token on sign-in; Casefold keeps it in an
//! HTTP-only cookie so the browser never sees it from script. Server
//! functions cannot touch the response directly, so they schedule a
//! [`PendingCookieAction`] in a [`CookieSlot`] and [`session_middleware`]
//! applies it once the handler has run.

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use cookie::Cookie;
use std::sync::{Arc, Mutex};

pub const SESSION_COOKIE: &str = "casefold_session";

/// Session lifetime handed to the browser; the backend may expire the token
/// sooner, in which case `/api/auth/me` answers 401 and the UI signs out.
const SESSION_MAX_AGE_HOURS: i64 = 12;

/// The raw backend token found on the incoming request.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionToken(pub String);

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

fn session_cookie(value: &str, max_age: cookie::time::Duration) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, value.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }
    cookie.build()
}

/// Build a Set-Cookie header value carrying the session token.
pub fn build_session_cookie(token: &str) -> Option<HeaderValue> {
    let cookie = session_cookie(
        token,
        cookie::time::Duration::hours(SESSION_MAX_AGE_HOURS),
    );
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Build a Set-Cookie header value that expires the session cookie.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    let cookie = session_cookie("", cookie::time::Duration::ZERO);
    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Extract the session token from cookies (preferred) or a Bearer header.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Cookie change requested by a server function.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set(String),
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        match parts.extensions.get::<CookieSlot>() {
            Some(slot) => slot.put(action),
            None => tracing::warn!("no cookie slot on request, session middleware not installed"),
        }
    }
}

/// Schedule the session cookie to be set by the middleware.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set(token.to_string()));
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}

/// Session token of the request currently being served, if any.
///
/// Reads the middleware-injected [`SessionToken`] first and falls back to
/// parsing the headers (covers routes the middleware does not wrap).
pub fn current_session_token() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    if let Some(SessionToken(token)) = parts.extensions.get::<SessionToken>() {
        return Some(token.clone());
    }
    extract_session_token(&parts.headers)
}

/// Permissive session middleware.
///
/// On each request it exposes the session token (if any) and a
/// [`CookieSlot`] through request extensions, then applies whatever cookie
/// action a server function scheduled. It never rejects a request; the auth
/// guard in the UI decides where unauthenticated visitors go.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    if let Some(token) = extract_session_token(req.headers()) {
        req.extensions_mut().insert(SessionToken(token));
    }

    let slot = CookieSlot::default();
    req.extensions_mut().insert(slot.clone());

    let mut response = next.run(req).await;

    let header_value = match slot.take() {
        Some(PendingCookieAction::Set(token)) => build_session_cookie(&token),
        Some(PendingCookieAction::Clear) => build_clear_cookie(),
        None => None,
    };
    if let Some(value) = header_value {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    response
}
