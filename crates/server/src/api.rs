use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod matters;
pub use matters::*;

mod documents;
pub use documents::*;

mod facts;
pub use facts::*;

mod account;
pub use account::*;

/// Feature flags from `config.toml`, for the UI to gate optional views.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
