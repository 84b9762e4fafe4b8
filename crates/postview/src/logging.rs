//! Tracing/logging bootstrap for the desktop app.

use std::env;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "postview=debug,postview_core=debug";

/// Initialize global tracing subscriber.
///
/// Filter precedence: `RUST_LOG`, then `POSTVIEW_LOG`, then the built-in default.
pub fn init() {
    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn filter_from_env() -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if let Some(value) = env::var("POSTVIEW_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        && let Ok(filter) = EnvFilter::try_new(value)
    {
        return filter;
    }

    EnvFilter::new(DEFAULT_FILTER)
}
