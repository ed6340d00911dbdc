// src/config/mod.rs
//! Runtime configuration: language table/lexicons and environment switches.

pub mod languages;

pub use languages::{LanguageConfig, DEFAULT_LANGUAGE_CONFIG_PATH, ENV_LANGUAGE_CONFIG_PATH};

/// Development environment: `SHUTTLE_ENV` in {local, development, dev}.
/// Error details are only exposed to API clients here.
pub fn is_dev_env() -> bool {
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// `METRICS_ROUTE=1` mounts the Prometheus `/metrics` route.
pub fn metrics_route_enabled() -> bool {
    std::env::var("METRICS_ROUTE").ok().as_deref() == Some("1")
}
