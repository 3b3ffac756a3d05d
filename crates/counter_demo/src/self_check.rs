//! Headless self-check.
//!
//! Drives [`App`] through the program simulator instead of a terminal and
//! writes every frame it renders. Styles are always plain so the output is
//! stable enough to diff in CI.

use std::io::{self, Write};

use bubbletea::simulator::ProgramSimulator;
use bubbletea::{KeyMsg, KeyType, Message};

use crate::app::App;
use crate::config::{ColorMode, Config};
use crate::error::Result;

/// Renders the initial frame plus one frame per activation.
#[must_use]
pub fn frames(config: &Config) -> Vec<String> {
    let plain = Config {
        color_mode: ColorMode::Never,
        ..config.clone()
    };

    let mut sim = ProgramSimulator::new(App::new(&plain));
    sim.init();
    for _ in 0..config.activations {
        sim.send(Message::new(KeyMsg::from_type(KeyType::Enter)));
    }
    let processed = sim.run_until_empty();

    tracing::info!(
        activations = config.activations,
        processed,
        frames = sim.views().len(),
        "self-check complete"
    );

    sim.views()
        .iter()
        .map(|view| view.trim_end().to_string())
        .collect()
}

/// Writes the self-check frames to `out`, separated by blank lines.
///
/// A reader that closes the pipe early (`counter_demo --self-check | head`)
/// ends the output without an error.
///
/// # Errors
///
/// Returns an error if writing to `out` fails for any other reason.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let frames = frames(config);
    match writeln!(out, "{}", frames.join("\n\n")).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before the self-check finished");
            Ok(())
        }
        result => result.map_err(Into::into),
    }
}
