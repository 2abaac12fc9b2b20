//! Structured logging setup for rwcov
//!
//! Initializes the `tracing` subscriber. All log output goes to stderr so
//! the status line on stdout stays machine-consumable.
//!
//! Configuration sources, in order: explicit [`LoggingConfig`], the
//! `RWCOV_LOG_LEVEL` environment variable, `RUST_LOG` for fine-grained
//! filtering.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Include the module target (e.g. rwcov::extract) in logs
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    /// Creates a logging configuration with the specified level
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string, defaulting to INFO on invalid input
///
/// # Example
///
/// ```
/// use rwcov::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Initializes the logging system with the provided configuration
///
/// Can only be called once; subsequent calls are ignored. `RUST_LOG`
/// directives take precedence over the configured level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(
                format!("rwcov={}", config.level)
                    .parse()
                    .expect("valid filter directive"),
            );
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(config.include_target)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}

/// Initializes logging with default configuration (INFO, stderr)
pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from `RWCOV_LOG_LEVEL`, falling back to INFO
pub fn init_from_env() {
    let level_str = env::var("RWCOV_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(LoggingConfig::with_level(parse_level(&level_str)));
}
