//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// RUST_LOG wins when set; otherwise the level from configuration is used
/// for this crate plus tower_http request traces.
pub fn init_tracing(default_level: &str) {
    let fallback = format!("r3ach_api={default_level},tower_http={default_level}");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
