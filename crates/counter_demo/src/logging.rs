//! Tracing subscriber setup.
//!
//! The terminal belongs to the program while it runs, so interactive sessions
//! should log to a file (`--log-file`). Without one, events go to stderr.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::{LogFormat, LogLevel};
use crate::config::Config;
use crate::error::{Error, Result};

/// Environment variable holding a filter that overrides `-v`.
pub const LOG_ENV: &str = "COUNTER_LOG";

/// Picks the filter directive: a non-empty `COUNTER_LOG` wins over the
/// verbosity level.
fn directive(env: Option<&str>, level: LogLevel) -> String {
    match env.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => level.as_directive().to_string(),
    }
}

fn env_filter(level: LogLevel) -> EnvFilter {
    let env = std::env::var(LOG_ENV).ok();
    let directive = directive(env.as_deref(), level);
    EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("ignoring invalid {LOG_ENV} filter {directive:?}: {err}");
        EnvFilter::new(level.as_directive())
    })
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(config: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_level))
        .with_target(false);

    let installed = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
        match config.log_format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        }
    } else {
        let builder = builder.with_writer(io::stderr);
        match config.log_format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        }
    };

    installed.map_err(|err| Error::Logging(err.to_string()))?;
    tracing::debug!(format = ?config.log_format, level = ?config.log_level, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_uses_level_without_env() {
        assert_eq!(directive(None, LogLevel::Warn), "warn");
        assert_eq!(directive(None, LogLevel::Trace), "trace");
    }

    #[test]
    fn directive_prefers_env() {
        assert_eq!(
            directive(Some("counter_widget=debug"), LogLevel::Warn),
            "counter_widget=debug"
        );
    }

    #[test]
    fn directive_ignores_blank_env() {
        assert_eq!(directive(Some("  "), LogLevel::Info), "info");
        assert_eq!(directive(Some(""), LogLevel::Debug), "debug");
    }
}
