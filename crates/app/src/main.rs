use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod components;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

/// The matter (case) the user is working on, shared by the dashboard picker,
/// the sidebar's case links and the feature cards.
///
/// `None` until the user picks one on the dashboard or opens a case page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatterContext {
    pub matter_id: Signal<Option<String>>,
}

impl MatterContext {
    pub fn new() -> Self {
        Self {
            matter_id: Signal::new(None),
        }
    }

    pub fn selected(&self) -> Option<String> {
        self.matter_id.read().clone()
    }

    /// Select a matter; an empty id clears the selection.
    pub fn select(&mut self, id: &str) {
        let id = id.trim();
        let next = (!id.is_empty()).then(|| id.to_string());
        if *self.matter_id.peek() != next {
            self.matter_id.set(next);
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let mut router = dioxus::server::router(App)
            .route("/health", axum::routing::get(server::health::health_check));

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::session::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "feature flags unavailable, using defaults");
            FeatureFlags::default()
        });

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);
    use_context_provider(MatterContext::new);

    rsx! {
        document::Title { "Casefold" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
