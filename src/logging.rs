//! Diagnostic logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used with `--debug`.
pub const DEBUG_FILTER: &str = "apkctl=debug";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "apkctl=info";

/// Pick the log filter.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with the console report on stdout.
pub fn init_tracing(debug: bool) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(env_filter(debug))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_forces_debug_level() {
        assert_eq!(env_filter(true).to_string(), DEBUG_FILTER);
    }
}
