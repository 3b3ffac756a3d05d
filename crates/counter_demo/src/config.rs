//! Runtime configuration for `counter_demo`.
//!
//! [`Config`] is the resolved form of everything the CLI and environment
//! supplied. Tests construct it directly without going through clap.
//!
//! # Examples
//!
//! ```rust
//! use counter_demo::config::{ColorMode, Config};
//!
//! let config = Config {
//!     initial_count: Some(5),
//!     color_mode: ColorMode::Never,
//!     ..Default::default()
//! };
//! assert_eq!(config.counter_props().starting_count(), 5);
//! ```

use std::path::PathBuf;

use counter_widget::CounterProps;
use crate::cli::{Cli, LogFormat, LogLevel};

/// Runtime configuration for the counter demo.
#[derive(Debug, Clone)]
pub struct Config {
    // ========================================================================
    // Widget Settings
    // ========================================================================
    /// Starting value handed to the widget.
    pub initial_count: Option<i64>,

    // ========================================================================
    // Display Settings
    // ========================================================================
    /// Color output mode.
    pub color_mode: ColorMode,

    /// Whether mouse input is enabled.
    pub mouse: bool,

    /// Whether to use alternate screen mode.
    pub alt_screen: bool,

    // ========================================================================
    // Mode Settings
    // ========================================================================
    /// Whether running in headless self-check mode.
    pub self_check: bool,

    /// Activations to simulate in self-check mode.
    pub activations: u32,

    // ========================================================================
    // Logging
    // ========================================================================
    /// Log destination. `None` logs to stderr.
    pub log_file: Option<PathBuf>,

    /// Log output format.
    pub log_format: LogFormat,

    /// Log verbosity.
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_count: None,
            color_mode: ColorMode::Auto,
            mouse: true,
            alt_screen: true,
            self_check: false,
            activations: 0,
            log_file: None,
            log_format: LogFormat::Text,
            log_level: LogLevel::Warn,
        }
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from CLI arguments.
    ///
    /// `--initial-count` takes precedence over `initialCount` in `--props`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProps`] if `--props` is not a JSON object.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = Self::from_cli_flags(cli);
        config.apply_props(cli.props.as_deref())?;
        Ok(config)
    }

    /// Create config from CLI flags only, leaving `--props` unparsed.
    ///
    /// Parsing props can log, so the binary installs logging from this
    /// config first and calls [`Config::apply_props`] afterwards.
    #[must_use]
    pub fn from_cli_flags(cli: &Cli) -> Self {
        let color_mode = if cli.no_color {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };

        Self {
            initial_count: cli.initial_count,
            color_mode,
            mouse: !cli.no_mouse,
            alt_screen: !cli.no_alt_screen,
            self_check: cli.self_check,
            activations: cli.activations,
            log_file: cli.log_file.clone(),
            log_format: cli.log_format,
            log_level: cli.log_level(),
        }
    }

    /// Fills `initial_count` from a props JSON object unless it is already set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProps`] if `props` is not a JSON object.
    pub fn apply_props(&mut self, props: Option<&str>) -> Result<(), ConfigError> {
        let Some(json) = props else {
            return Ok(());
        };
        let props = CounterProps::from_json(json).map_err(ConfigError::InvalidProps)?;
        self.initial_count = self.initial_count.or(props.initial_count);
        Ok(())
    }

    /// Props handed to the widget when it is mounted.
    #[must_use]
    pub const fn counter_props(&self) -> CounterProps {
        CounterProps {
            initial_count: self.initial_count,
        }
    }

    /// Check if colors should be used.
    #[must_use]
    pub fn use_color(&self) -> bool {
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
            }
        }
    }

    /// Check if running in headless mode.
    #[must_use]
    pub const fn is_headless(&self) -> bool {
        self.self_check
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file's directory does not exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.log_file {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            if let Some(dir) = dir {
                if !dir.is_dir() {
                    return Err(ConfigError::LogDirectoryNotFound(dir.to_path_buf()));
                }
            }
        }
        Ok(())
    }

    /// Export configuration as a diagnostic string.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Initial count: {:?}", self.initial_count));
        lines.push(format!("Color mode: {:?}", self.color_mode));
        lines.push(format!("Mouse: {}", if self.mouse { "on" } else { "off" }));
        lines.push(format!(
            "Alt screen: {}",
            if self.alt_screen { "on" } else { "off" }
        ));
        lines.push(format!("Self-check: {}", self.self_check));
        if let Some(ref path) = self.log_file {
            lines.push(format!("Log file: {}", path.display()));
        }
        lines.push(format!("Log format: {:?}", self.log_format));
        lines.push(format!("Log level: {:?}", self.log_level));

        lines.join("\n")
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Automatically detect based on environment.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors (ASCII mode).
    Never,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `--props` was not valid JSON.
    #[error("Invalid widget props: {0}")]
    InvalidProps(#[source] serde_json::Error),

    /// The directory for `--log-file` does not exist.
    #[error("Log directory not found: {0}")]
    LogDirectoryNotFound(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default() {
        let config = Config::default();

        assert!(config.initial_count.is_none());
        assert_eq!(config.color_mode, ColorMode::Auto);
        assert!(config.mouse);
        assert!(config.alt_screen);
        assert!(!config.self_check);
        assert_eq!(config.counter_props(), CounterProps::default());
    }

    #[test]
    fn config_from_cli_defaults() {
        let cli = Cli::try_parse_from(["counter_demo"]).unwrap();
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.counter_props().starting_count(), 0);
        assert!(config.mouse);
        assert!(!config.is_headless());
    }

    #[test]
    fn config_from_cli_initial_count() {
        let cli = Cli::try_parse_from(["counter_demo", "--initial-count", "5"]).unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.counter_props().starting_count(), 5);
    }

    #[test]
    fn config_from_cli_props() {
        let cli = Cli::try_parse_from([
            "counter_demo",
            "--props",
            r#"{"initialCount": 8, "unknown": true}"#,
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.initial_count, Some(8));
    }

    #[test]
    fn config_from_cli_non_integer_props_start_at_zero() {
        let cli =
            Cli::try_parse_from(["counter_demo", "--props", r#"{"initialCount": "x"}"#]).unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.initial_count, None);
        assert_eq!(config.counter_props().starting_count(), 0);
    }

    #[test]
    fn config_flag_overrides_props() {
        let cli = Cli::try_parse_from([
            "counter_demo",
            "--props",
            r#"{"initialCount": 8}"#,
            "--initial-count",
            "2",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.initial_count, Some(2));
    }

    #[test]
    fn config_from_cli_malformed_props() {
        let cli = Cli::try_parse_from(["counter_demo", "--props", "{oops"]).unwrap();
        let err = Config::from_cli(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProps(_)));
        assert!(err.to_string().starts_with("Invalid widget props"));
    }

    #[test]
    fn config_from_cli_flags() {
        let cli = Cli::try_parse_from([
            "counter_demo",
            "--no-mouse",
            "--no-alt-screen",
            "--no-color",
            "--self-check",
            "--activations",
            "4",
            "-vv",
        ])
        .unwrap();
        let config = Config::from_cli(&cli).unwrap();

        assert!(!config.mouse);
        assert!(!config.alt_screen);
        assert_eq!(config.color_mode, ColorMode::Never);
        assert!(!config.use_color());
        assert!(config.is_headless());
        assert_eq!(config.activations, 4);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn config_validate_log_directory() {
        let config = Config {
            log_file: Some(PathBuf::from("/definitely/not/here/counter.log")),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LogDirectoryNotFound(_))
        ));

        let config = Config {
            log_file: Some(PathBuf::from("counter.log")),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn config_flags_leave_props_for_later() {
        let cli = Cli::try_parse_from(["counter_demo", "--props", r#"{"initialCount": 8}"#])
            .unwrap();
        let mut config = Config::from_cli_flags(&cli);
        assert_eq!(config.initial_count, None);

        config.apply_props(cli.props.as_deref()).unwrap();
        assert_eq!(config.initial_count, Some(8));
    }

    #[test]
    fn config_apply_props_keeps_flag_value() {
        let mut config = Config {
            initial_count: Some(2),
            ..Config::default()
        };
        config.apply_props(Some(r#"{"initialCount": 8}"#)).unwrap();
        assert_eq!(config.initial_count, Some(2));

        config.apply_props(None).unwrap();
        assert_eq!(config.initial_count, Some(2));
        assert!(config.apply_props(Some("[oops")).is_err());
    }

    #[test]
    fn config_from_cli_whole_float_props() {
        let cli =
            Cli::try_parse_from(["counter_demo", "--props", r#"{"initialCount": 3.0}"#]).unwrap();
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.initial_count, Some(3));
    }

    #[test]
    fn config_diagnostic_string() {
        let config = Config {
            initial_count: Some(1),
            log_file: Some(PathBuf::from("out.log")),
            ..Config::default()
        };
        let diag = config.to_diagnostic_string();
        assert!(diag.contains("Initial count: Some(1)"));
        assert!(diag.contains("Mouse: on"));
        assert!(diag.contains("Log file: out.log"));
    }
}
