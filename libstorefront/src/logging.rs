//! Logging setup for the Storefront binaries
//!
//! Output format and level come from `STOREFRONT_LOG_FORMAT` (text or json)
//! and `STOREFRONT_LOG_LEVEL`; an explicit `RUST_LOG` filter overrides the
//! level. Everything is written to stderr so tool output on stdout stays
//! pipeable.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Install the global subscriber
///
/// `default_level` applies unless the environment carries a `RUST_LOG`
/// filter of its own.
///
/// # Panics
///
/// Panics if a subscriber has already been installed
pub fn init(format: LogFormat, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Text => builder.with_target(false).init(),
    }
}

/// Install the global subscriber from the environment
///
/// Falls back to text format at info level when the `STOREFRONT_LOG_*`
/// variables are unset.
pub fn init_default() {
    let format = resolve_format(std::env::var("STOREFRONT_LOG_FORMAT").ok().as_deref());
    let level = std::env::var("STOREFRONT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init(format, &level);
}

fn resolve_format(value: Option<&str>) -> LogFormat {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "pretty".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid log format"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None), LogFormat::Text);
        assert_eq!(resolve_format(Some("json")), LogFormat::Json);
        // Unparseable values fall back rather than erroring at startup
        assert_eq!(resolve_format(Some("bogus")), LogFormat::Text);
    }
}
