#![forbid(unsafe_code)]

//! # Counter Demo
//!
//! Terminal host for the [`counter_widget`] crate.
//!
//! The library half is shared by the binary and the integration tests.
//!
//! ## Public Modules
//!
//! - [`app`] - Host model that mounts one counter
//! - [`cli`] - Command-line arguments
//! - [`config`] - Resolved runtime configuration
//! - [`error`] - Host error type
//! - [`logging`] - Tracing subscriber setup
//! - [`self_check`] - Headless frame dump

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod self_check;

use bubbletea::Program;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

/// Runs the interactive demo until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal program fails.
pub fn run(config: &Config) -> Result<()> {
    let mut program = Program::new(App::new(config));
    if config.alt_screen {
        program = program.with_alt_screen();
    }
    if config.mouse {
        program = program.with_mouse_cell_motion();
    }

    tracing::info!(
        initial_count = ?config.initial_count,
        mouse = config.mouse,
        alt_screen = config.alt_screen,
        "starting counter demo"
    );
    let app = program.run()?;
    tracing::info!(final_view = %app.counter().view(), "counter demo exited");
    Ok(())
}
