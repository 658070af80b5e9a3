//! Logging initialization with environment variable support

use crate::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Environment variables (in priority order):
/// - `RUST_LOG`: Standard Rust log filter; when set, it is the whole filter
/// - `LOG_LEVEL`: Set log level (trace, debug, info, warn, error), used
///   only when `RUST_LOG` is unset
/// - `LOG_FORMAT`: Override format (json, pretty)
///
/// Output always goes to stderr so stdout stays clean for `--json` output.
pub fn initialize(config: &LoggingConfig) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| config.level.clone());
    let env_filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), &level);

    match resolve_format(std::env::var("LOG_FORMAT").ok().as_deref(), &config.format) {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None => {
            let log_level = level.parse().unwrap_or(tracing::Level::WARN);
            EnvFilter::default().add_directive(log_level.into())
        }
    }
}

fn resolve_format(env_override: Option<&str>, configured: &LogFormat) -> LogFormat {
    env_override
        .and_then(|f| match f.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" | "human" => Some(LogFormat::Pretty),
            _ => None,
        })
        .unwrap_or_else(|| configured.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_rust_log_is_the_whole_filter() {
        let filter = build_filter(Some("debug"), "error");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Some("trace"), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_configured_level_without_rust_log() {
        assert_eq!(
            build_filter(None, "info").max_level_hint(),
            Some(LevelFilter::INFO)
        );
        assert_eq!(
            build_filter(None, "nonsense").max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_format_override() {
        assert_eq!(resolve_format(Some("JSON"), &LogFormat::Pretty), LogFormat::Json);
        assert_eq!(resolve_format(Some("human"), &LogFormat::Json), LogFormat::Pretty);
        assert_eq!(resolve_format(Some("xml"), &LogFormat::Json), LogFormat::Json);
        assert_eq!(resolve_format(None, &LogFormat::Pretty), LogFormat::Pretty);
    }
}
