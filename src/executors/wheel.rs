//! Wheel executor

use console::style;
use miette::{Result, WrapErr};
use rand::Rng;
use tracing::info;

use super::{is_interactive, launch_winner, print_report};
use crate::common::session_rng;
use crate::config::WheelConfig;
use crate::core::{DrawOutcome, Mode};
use crate::error::RogvibeError;
use crate::executors::CommandExecutor;
use crate::progress::DrawReporter;
use crate::selector::Selector;
use crate::ui::{self, Flow, WheelSession};

pub struct WheelExecutor;

impl CommandExecutor for WheelExecutor {
    type Config = WheelConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut rng = session_rng(config.seed);

        if !is_interactive(config.headless) {
            DrawReporter::new().drumroll(Mode::Wheel, config.participants.len());
            let outcome = draw_once(&config, &mut rng)?;
            return print_report(config.format, &outcome);
        }

        let session = WheelSession::new(config.participants, config.timing, rng);
        match ui::run(session).wrap_err("Wheel display failed")? {
            Flow::Launch(winner) => {
                eprintln!("{} Launching {}...", style("🚀").cyan(), style(&winner).bold());
                launch_winner(&winner)
            }
            Flow::Quit | Flow::Continue => Ok(()),
        }
    }
}

/// One draw over the whole participant list
pub fn draw_once<R: Rng + ?Sized>(
    config: &WheelConfig,
    rng: &mut R,
) -> Result<DrawOutcome, RogvibeError> {
    let selector = Selector::new(config.participants.clone());
    let winner = selector.draw(rng)?.to_string();
    info!(winner = %winner, "headless draw");

    Ok(DrawOutcome::Wheel {
        winner,
        participants: config.participants.clone(),
    })
}
