//! Multilingual Sentiment Service — Binary Entrypoint
//! Boots the Axum HTTP server: language config, engine, routes, middleware.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs in development, JSON elsewhere.
/// Dev = debug build OR SHUTTLE_ENV in {local, development, dev}.
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let is_dev_env = cfg!(debug_assertions) || polyglot_sentiment::config::is_dev_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("polyglot_sentiment=info,warn"));

    // The runtime may already have installed a subscriber; keep theirs then.
    let _ = if is_dev_env {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    };
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // Enables LANGUAGE_CONFIG_PATH / METRICS_ROUTE / SHUTTLE_ENV from .env.
    let _ = dotenvy::dotenv();

    init_tracing();

    let router = polyglot_sentiment::app()?;
    Ok(router.into())
}
