use dioxus::prelude::*;
use shared_types::{Activity, Matter};

// ── Matter Server Functions ────────────────────────────────────

/// All matters visible to the caller, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_matters() -> Result<Vec<Matter>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    let mut matters = backend()
        .matters()
        .await
        .map_err(|e| e.into_server_fn_error())?;
    shared_types::sort_matters_newest_first(&mut matters);
    Ok(matters)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_matter(matter_id: String) -> Result<Matter, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    backend()
        .matter(&matter_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Recent activity for a matter's activity tab.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_matter_activity(matter_id: String) -> Result<Vec<Activity>, ServerFnError> {
    use crate::backend::backend;
    use crate::error_convert::AppErrorExt;

    if !crate::config::feature_flags().activity_feed {
        return Err(shared_types::AppError::not_found("Activity feed is disabled")
            .into_server_fn_error());
    }

    backend()
        .matter_activity(&matter_id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
