//! Slot machine executor

use console::style;
use miette::{Result, WrapErr};
use rand::Rng;
use tracing::info;

use super::{is_interactive, launch_winner, print_report};
use crate::common::session_rng;
use crate::config::SlotConfig;
use crate::core::{DrawOutcome, Mode};
use crate::error::RogvibeError;
use crate::executors::CommandExecutor;
use crate::participants::PathProbe;
use crate::progress::DrawReporter;
use crate::selector::SlotSelector;
use crate::ui::{self, Flow, SlotSession};

pub struct SlotExecutor;

impl CommandExecutor for SlotExecutor {
    type Config = SlotConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut rng = session_rng(config.seed);

        if !is_interactive(config.headless) {
            DrawReporter::new().drumroll(Mode::Slot, config.reels);
            let outcome = draw_once(&config, &mut rng)?;
            return print_report(config.format, &outcome);
        }

        let selector = SlotSelector::new(config.symbols, config.reels);
        let session = SlotSession::new(
            selector,
            Box::new(PathProbe::from_env()),
            config.timing,
            rng,
        );
        match ui::run(session).wrap_err("Slot machine display failed")? {
            Flow::Launch(winner) => {
                eprintln!("{} Launching {}...", style("🚀").cyan(), style(&winner).bold());
                launch_winner(&winner)
            }
            Flow::Quit | Flow::Continue => Ok(()),
        }
    }
}

/// One pull of every reel
pub fn draw_once<R: Rng + ?Sized>(
    config: &SlotConfig,
    rng: &mut R,
) -> Result<DrawOutcome, RogvibeError> {
    let selector = SlotSelector::new(config.symbols.clone(), config.reels);
    let outcome = selector.draw(rng)?;
    info!(%outcome, "headless pull");

    Ok(DrawOutcome::Slot {
        outcome,
        symbols: config.symbols.clone(),
    })
}
