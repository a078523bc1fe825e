//! Logging and tracing initialization for the area filter.
//!
//! The filter's diagnostics are sparse: binding events log at debug,
//! an area hanging off the digitizer logs one warning per resolution,
//! and a failed relative-mode lookup logs one error. Per-report drops
//! never log. A bare level in the config is therefore scoped to the
//! relarea crates, with everything else held at warn.

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` wins over the configured level when set. Safe to call
/// more than once; later calls keep the first subscriber.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(expand_level(&config.level)));

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Expand a bare level like "debug" into directives that apply it to
/// the relarea crates only. Anything already containing directives
/// passes through untouched.
fn expand_level(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }
    format!(
        "warn,relarea_common={level},relarea_report_model={level},\
         relarea_device_core={level},relarea_filter_core={level}"
    )
}
