#![forbid(unsafe_code)]

//! # Counter Demo
//!
//! ```bash
//! cargo run -p counter_demo -- --initial-count 5
//! ```

use std::io;

use counter_demo::cli::Cli;
use counter_demo::config::Config;
use counter_demo::{logging, self_check};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let mut config = Config::from_cli_flags(&cli);
    config.validate()?;
    logging::init(&config)?;
    config.apply_props(cli.props.as_deref())?;
    tracing::debug!(config = %config.to_diagnostic_string(), "resolved configuration");

    if config.is_headless() {
        self_check::run(&config, &mut io::stdout().lock())?;
    } else {
        counter_demo::run(&config)?;
    }

    Ok(())
}
