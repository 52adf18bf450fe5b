use shared_types::{AppConfig, BackendConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, apply environment overrides, and store the result in
/// the global `OnceLock`. Safe to call multiple times; only the first call
/// has effect.
///
/// If the file is missing or unparseable, flags default to off and the
/// backend points at `DEFAULT_BACKEND_URL`.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        apply_env_overrides(&mut config.backend, |key| std::env::var(key).ok());
        tracing::info!(
            features = ?config.features,
            backend = %config.backend.base_url,
            "configuration loaded"
        );
        config
    })
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// `BACKEND_API_URL` and `BACKEND_TIMEOUT_SECS` win over the file.
fn apply_env_overrides(backend: &mut BackendConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("BACKEND_API_URL").filter(|u| !u.trim().is_empty()) {
        backend.base_url = url.trim().to_string();
    }
    if let Some(secs) = lookup("BACKEND_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        backend.timeout_secs = secs;
    }
}

/// Get the loaded feature flags, loading the config on first use.
pub fn feature_flags() -> &'static FeatureFlags {
    &load_config().features
}

/// Get the backend connection settings, loading the config on first use.
pub fn backend_config() -> &'static BackendConfig {
    &load_config().backend
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_base_url_and_timeout() {
        let mut backend = BackendConfig::default();
        apply_env_overrides(
            &mut backend,
            env(&[("BACKEND_API_URL", " http://analysis:9000 "), ("BACKEND_TIMEOUT_SECS", "3")]),
        );
        assert_eq!(backend.base_url, "http://analysis:9000");
        assert_eq!(backend.timeout_secs, 3);
    }

    #[test]
    fn blank_or_invalid_env_values_are_ignored() {
        let mut backend = BackendConfig::default();
        apply_env_overrides(
            &mut backend,
            env(&[("BACKEND_API_URL", "  "), ("BACKEND_TIMEOUT_SECS", "soon")]),
        );
        assert_eq!(backend, BackendConfig::default());
    }

    #[test]
    fn unparseable_file_falls_back_to_defaults() {
        let config = parse_config("[features\nnot toml");
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn file_values_are_read() {
        let config = parse_config("[features]\ntelemetry = true\n[backend]\ntimeout_secs = 30\n");
        assert!(config.features.telemetry);
        assert_eq!(config.backend.timeout_secs, 30);
    }
}
