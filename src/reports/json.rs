//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::core::{DrawOutcome, SlotVerdict, is_special_participant};
use crate::error::RogvibeError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, outcome: &DrawOutcome) -> Result<String, RogvibeError> {
        let report = match outcome {
            DrawOutcome::Wheel {
                winner,
                participants,
            } => json!({
                "mode": outcome.mode(),
                "winner": winner,
                "runnable": !is_special_participant(winner),
                "participants": participants.names(),
            }),
            DrawOutcome::Slot { outcome: slot, symbols } => {
                let verdict = slot.verdict();
                json!({
                    "mode": outcome.mode(),
                    "reels": slot.reels,
                    "symbols": symbols.symbols(),
                    "jackpot": verdict != SlotVerdict::NoMatch,
                    "grand_jackpot": verdict == SlotVerdict::GrandJackpot,
                })
            }
        };

        serde_json::to_string_pretty(&report).map_err(RogvibeError::Json)
    }
}
