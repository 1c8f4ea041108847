//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::core::{DrawOutcome, SlotVerdict, is_special_participant};
use crate::error::RogvibeError;
use crate::utils::string::{join_names, pluralize};

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, outcome: &DrawOutcome) -> Result<String, RogvibeError> {
        let mut output = String::new();

        match outcome {
            DrawOutcome::Wheel {
                winner,
                participants,
            } => {
                writeln!(
                    output,
                    "{} Spun the wheel over {} {}: {}",
                    style("🎡").cyan(),
                    style(participants.len()).yellow().bold(),
                    pluralize("name", participants.len()),
                    style(join_names(participants.names())).dim()
                )?;
                writeln!(output, "{} viber: {}", style("🎉").green(), style(winner).bold())?;
                if is_special_participant(winner) {
                    writeln!(output, "{} Lucky winner!", style("🍀").green())?;
                }
            }
            DrawOutcome::Slot {
                outcome: slot,
                symbols,
            } => {
                writeln!(
                    output,
                    "{} Pulled {} {} over {} {}",
                    style("🎰").cyan(),
                    style(slot.reels.len()).yellow().bold(),
                    pluralize("reel", slot.reels.len()),
                    style(symbols.len()).yellow().bold(),
                    pluralize("symbol", symbols.len())
                )?;
                writeln!(output, "{}", style(slot).bold())?;
                match slot.verdict() {
                    SlotVerdict::GrandJackpot => writeln!(
                        output,
                        "{} {} Grand jackpot!",
                        style("🎉").green(),
                        style(slot.reels.concat()).yellow().bold()
                    )?,
                    SlotVerdict::Jackpot(symbol) => writeln!(
                        output,
                        "{} Jackpot: {}",
                        style("🎉").green(),
                        style(symbol).bold()
                    )?,
                    SlotVerdict::NoMatch => {
                        writeln!(output, "{} No match this time.", style("✗").red())?
                    }
                }
            }
        }

        Ok(output)
    }
}
