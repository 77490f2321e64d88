//! Logging setup for the Shelf CLI.
//!
//! Diagnostics from `shelf-analysis` (files analyzed, alias loading, cache
//! reuse, cycle truncation) go through `tracing`. This module installs the
//! subscriber that renders them.
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("Starting analysis");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter for `--verbose`.
pub const VERBOSE_FILTER: &str = "shelf=debug,shelf_analysis=debug,shelf_cli=debug";

/// Filter for `--quiet`.
pub const QUIET_FILTER: &str = "error";

/// Filter used when neither flag nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "shelf=info,shelf_analysis=info,shelf_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Must be called once at the start of the program, before any logging.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for shelf crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for shelf crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // only check filter construction.

    #[test]
    fn test_env_filter_verbose() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().to_lowercase().contains("shelf_analysis=debug"));
    }

    #[test]
    fn test_env_filter_quiet() {
        let filter = filter_for(false, true);
        assert!(filter.to_string().to_lowercase().contains("error"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
