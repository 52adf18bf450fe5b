use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert a transport or decoding failure from `reqwest` into an AppError.
///
/// Status errors carry the backend's code and map through
/// [`AppError::from_status`]; everything else means the backend could not
/// be reached or answered with something unreadable.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if let Some(status) = err.status() {
        return AppError::from_status(status.as_u16(), err.to_string());
    }
    if err.is_timeout() {
        AppError::upstream("The case backend timed out")
    } else if err.is_connect() {
        AppError::upstream("The case backend is unreachable")
    } else if err.is_decode() {
        AppError::upstream(format!("Unexpected response from the case backend: {err}"))
    } else {
        AppError::upstream(err.to_string())
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
