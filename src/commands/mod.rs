//! Command implementations for the rogvibe CLI
//!
//! - wheel: spin the lottery wheel (default)
//! - slot: pull the slot machine lever (`--slot`)

pub mod slot;
pub mod wheel;

use miette::Result;
use tracing::debug;

use crate::cli::Cli;
use crate::common::LaunchRequest;
use crate::error::RogvibeError;
use crate::toml_parser::Settings;

/// Execute a command based on CLI input
pub fn execute_command(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().map_err(RogvibeError::from)?;
    let settings = Settings::load(cli.session.config.as_deref(), &cwd)?;
    debug!(?settings, "settings loaded");

    let request = LaunchRequest {
        participants: cli.participants,
        slot: cli.slot,
        session: cli.session,
        settings,
    };

    if request.slot.slot {
        slot::execute_slot_command(&request)
    } else {
        wheel::execute_wheel_command(&request)
    }
}
