use crate::config::{LogFormat, LoggingConfig};
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directive chosen from `-v` count, falling back to the configured level
fn level_directive(config: &LoggingConfig, verbose: u8) -> &str {
    match verbose {
        0 => &config.level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the report. `RUST_LOG` takes precedence over everything else.
///
/// # Errors
///
/// Fails if the level directive is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directive(config, verbose)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_config_level() {
        let config = LoggingConfig {
            level: "error".to_owned(),
            format: LogFormat::Text,
        };
        assert_eq!(level_directive(&config, 0), "error");
        assert_eq!(level_directive(&config, 1), "info");
        assert_eq!(level_directive(&config, 2), "debug");
        assert_eq!(level_directive(&config, 3), "trace");
        assert_eq!(level_directive(&config, 9), "trace");
    }
}
