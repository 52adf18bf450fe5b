use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
};
use std::collections::HashMap;
use std::str::FromStr;

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check the form before it is submitted. Keys match the server's
/// validation field names so both render in the same place.
pub fn validate_credentials(username: &str, password: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if username.trim().is_empty() {
        errors.insert("username".to_string(), "Username is required".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "password".to_string(),
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
    errors
}

/// Where to go after signing in. Only same-site paths that name a real page
/// are honoured, and never the sign-in page itself.
pub fn signin_destination(redirect: Option<&str>) -> Route {
    let Some(path) = redirect.map(str::trim).filter(|p| !p.is_empty()) else {
        return Route::Dashboard {};
    };
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return Route::Dashboard {};
    }
    match Route::from_str(path) {
        Ok(Route::SignIn { .. }) | Ok(Route::Home {}) | Ok(Route::NotFound { .. }) | Err(_) => {
            Route::Dashboard {}
        }
        Ok(route) => route,
    }
}

/// Sign-in page. `redirect` is the path the auth guard bounced the visitor
/// from.
#[component]
pub fn SignIn(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let destination = use_signal(move || signin_destination(redirect.as_deref()));

    // A visitor with a live session does not need this page.
    let session =
        use_server_future(move || async move { server::api::get_current_user().await })?;
    if let Some(Ok(Some(user))) = session.read().as_ref().cloned() {
        if !auth.is_authenticated() {
            auth.set_user(user);
        }
    }
    if auth.is_authenticated() {
        navigator().replace(destination());
    }

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);

        let errors = validate_credentials(&username(), &password());
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());
        loading.set(true);

        match server::api::sign_in(username(), password()).await {
            Ok(user) => {
                auth.set_user(user);
                password.set(String::new());
                navigator().replace(destination());
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./signin.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign in to Casefold" }
                    CardDescription { "Use your firm credentials to continue" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", novalidate: true, onsubmit: handle_submit,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                autocomplete: "username".to_string(),
                                placeholder: "jdoe",
                                value: username(),
                                error: field_errors.read().get("username").cloned(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                input_type: "password",
                                autocomplete: "current-password".to_string(),
                                placeholder: "At least 8 characters",
                                value: password(),
                                error: field_errors.read().get("password").cloned(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
