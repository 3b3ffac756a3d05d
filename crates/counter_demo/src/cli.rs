//! Command-line interface for `counter_demo`.
//!
//! # Examples
//!
//! ```bash
//! # Start at zero
//! counter_demo
//!
//! # Start at five, with mouse support off
//! counter_demo --initial-count 5 --no-mouse
//!
//! # Pass props as JSON, the way an embedding host would
//! counter_demo --props '{"initialCount": 5}'
//!
//! # Headless: print the frames for three activations and exit
//! counter_demo --self-check --activations 3
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Counter demo - an embeddable click-to-increment widget in the terminal.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(
    name = "counter_demo",
    author,
    version,
    about = "Counter widget demo",
    long_about = "Mounts a single counter widget in the terminal. Press enter or space, \
                  or click the button, to increment it."
)]
pub struct Cli {
    /// Value the counter starts from
    ///
    /// Overrides `initialCount` from --props
    #[arg(
        long,
        short = 'i',
        env = "COUNTER_INITIAL_COUNT",
        allow_negative_numbers = true
    )]
    pub initial_count: Option<i64>,

    /// Widget props as a JSON object, e.g. '{"initialCount": 5}'
    ///
    /// Unknown keys are ignored; a non-integer initialCount starts at 0
    #[arg(long, env = "COUNTER_PROPS")]
    pub props: Option<String>,

    /// Disable mouse support
    #[arg(long, env = "COUNTER_NO_MOUSE", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_mouse: bool,

    /// Disable alternate screen mode
    #[arg(long, env = "COUNTER_NO_ALT_SCREEN", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_alt_screen: bool,

    /// Force color output off (ASCII mode)
    ///
    /// Respects `NO_COLOR` environment variable (any non-falsey value)
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Run headless, print every rendered frame and exit
    #[arg(long)]
    pub self_check: bool,

    /// Number of increment activations to simulate in --self-check mode
    #[arg(long, default_value_t = 0, requires = "self_check")]
    pub activations: u32,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "COUNTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only show warnings and errors
    #[default]
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Returns the `tracing` filter directive for this level.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
