use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub backend_url: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// `GET /health`. Casefold itself is up if it answers; the backend probe is
/// reported separately so a backend outage does not fail the check.
pub async fn health_check() -> Json<HealthResponse> {
    let client = crate::backend::backend();
    let backend = if client.ping().await {
        "reachable"
    } else {
        "unreachable"
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        backend: backend.to_string(),
        backend_url: client.base_url().to_string(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
