pub use tracing::{debug, error, info, warn, trace, instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber, filtered by `RUST_LOG`.
///
/// Span close events (with their timings) are only reported when debug output is on.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let span_events = if is_debug(&env_filter) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // stdout carries the polygon output, so logs go to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn is_debug(env_filter: &EnvFilter) -> bool {
    env_filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG)
}
