use crate::log_buffer::LogWriter;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Pick the filter directive: RUST_LOG wins, then `--verbose`, then the config.
pub fn filter_directive(rust_log: Option<&str>, verbose: bool, log_level: &str) -> String {
    match rust_log {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if verbose => "debug".to_string(),
        _ => log_level.to_string(),
    }
}

/// Install the global subscriber. Output goes through the log buffer so the
/// TUI can hold it back while the terminal is in raw mode.
pub fn init(log_level: &str, verbose: bool) -> Result<(), TelemetryError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), verbose, log_level);
    let env_filter = EnvFilter::try_new(&directive).map_err(|source| TelemetryError::EnvFilter {
        value: directive.clone(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(|| LogWriter)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins() {
        assert_eq!(filter_directive(Some("ai_q=trace"), true, "warn"), "ai_q=trace");
    }

    #[test]
    fn test_verbose_over_config() {
        assert_eq!(filter_directive(None, true, "warn"), "debug");
        assert_eq!(filter_directive(Some("  "), true, "warn"), "debug");
    }

    #[test]
    fn test_config_level_fallback() {
        assert_eq!(filter_directive(None, false, "warn"), "warn");
    }
}
