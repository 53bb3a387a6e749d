//! Diagnostic log filter selection

use tracing_subscriber::EnvFilter;

/// Level used when neither `--verbose` nor `RUST_LOG` says otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the log filter.
///
/// `--verbose` forces `debug`. Otherwise a parseable `RUST_LOG` value wins,
/// and anything else falls back to `warn`.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
