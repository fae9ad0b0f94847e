//! Logging setup
//!
//! The library crates only emit `tracing` events. Hosts that want them on
//! stderr call [`init_logging`] once at startup.

use thiserror::Error;

/// Logging levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace level (per-stroke painting)
    Trace,
    /// Debug level (fill outcomes)
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl LogLevel {
    /// Directive name used in filter strings.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Filter directive enabling this level for every segpaint crate.
    pub fn directive(self) -> String {
        ["segpaint", "segpaint_core", "segpaint_region", "segpaint_tools"]
            .iter()
            .map(|target| format!("{}={}", target, self.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Logging could not be initialized
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive was rejected
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("failed to initialize logging: {0}")]
    Init(String),
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise every segpaint crate logs at
/// `level`.
///
/// # Errors
///
/// Returns [`LoggingError::Init`] if a global subscriber is already set.
pub fn init_logging(level: LogLevel) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.directive()))
        .map_err(|e| LoggingError::Filter(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::debug!(level = level.as_str(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        assert_eq!(
            LogLevel::Debug.directive(),
            "segpaint=debug,segpaint_core=debug,segpaint_region=debug,segpaint_tools=debug"
        );
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(LogLevel::Warn);
        assert!(matches!(init_logging(LogLevel::Warn), Err(LoggingError::Init(_))));
    }
}
