use dioxus::prelude::*;
use shared_types::SessionUser;

/// Global authentication state. The session itself lives in an HTTP-only
/// cookie; this only mirrors who the server says is signed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Name to greet the signed-in user with, or `"there"` when nobody is.
    pub fn greeting_name(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.greeting_name().to_string())
            .unwrap_or_else(|| "there".to_string())
    }

    pub fn initials(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map(SessionUser::initials)
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// End the session: best-effort server logout, then forget the user locally.
pub async fn sign_out(mut auth: AuthState) {
    if let Err(e) = server::api::logout().await {
        tracing::warn!(error = %e, "logout request failed");
    }
    auth.clear_auth();
}
