//! Error types for the counter demo host.

use std::io;

use crate::config::ConfigError;

/// Errors that can stop the demo.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolved configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Reading or writing a file or stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal program failed.
    #[error("Program error: {0}")]
    Program(#[from] bubbletea::Error),
}

/// A specialized [`Result`](std::result::Result) for the demo host.
pub type Result<T> = std::result::Result<T, Error>;
