use dioxus::prelude::*;
use shared_types::SessionUser;

/// Sign in against the backend and start a session.
///
/// Credentials are validated locally first so obviously bad input never
/// reaches the backend. On success the backend token is stored in the
/// session cookie; it is not returned to the browser.
#[server]
pub async fn sign_in(username: String, password: String) -> Result<SessionUser, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::{AppErrorExt, ValidateRequest};
    use shared_types::SignInRequest;

    let req = SignInRequest {
        username: username.trim().to_string(),
        password,
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let resp = backend()
        .sign_in(&req)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    crate::session::schedule_session_cookie(&resp.access_token);
    tracing::info!(username = %resp.user.username, "signed in");

    Ok(resp.user)
}

/// The signed-in user, or `None` when there is no valid session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    let Some(token) = crate::session::current_session_token() else {
        return Ok(None);
    };

    let user = backend()
        .current_user(&token)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    if user.is_none() {
        // Stale cookie: drop it so later requests skip the round trip.
        crate::session::schedule_clear_cookie();
    }
    Ok(user)
}

/// End the session. The backend logout is best effort; the cookie is
/// cleared regardless.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::backend::backend;

    if let Some(token) = crate::session::current_session_token() {
        if let Err(e) = backend().sign_out(&token).await {
            tracing::warn!(error = %e.message, "backend logout failed");
        }
    }

    crate::session::schedule_clear_cookie();
    Ok(())
}
