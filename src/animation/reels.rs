use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::SpinTiming;
use crate::constants::animation::{REEL_BASE_TICKS, REEL_STAGGER_TICKS};
use crate::core::{SlotOutcome, SymbolSet};

/// Something a reel did on one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReelEvent {
    Spinning { reel: usize, symbol: String },
    Stopped { reel: usize, symbol: String },
    AllStopped { outcome: SlotOutcome },
}

/// Reels rolling towards a pre-drawn outcome, stopping left to right
#[derive(Debug, Clone)]
pub struct SlotSpin {
    outcome: SlotOutcome,
    display: Vec<String>,
    stop_at: Vec<usize>,
    timing: SpinTiming,
    ticks: usize,
}

impl SlotSpin {
    /// `display` is what the reels show when the pull starts; reels slow
    /// down along `timing` until the last one stops
    pub fn start(outcome: SlotOutcome, display: Vec<String>, timing: SpinTiming) -> Self {
        let stop_at = (0..outcome.reels.len())
            .map(|reel| REEL_BASE_TICKS + reel * REEL_STAGGER_TICKS)
            .collect();
        let mut display = display;
        display.resize(outcome.reels.len(), String::new());

        Self {
            outcome,
            display,
            stop_at,
            timing,
            ticks: 0,
        }
    }

    pub fn display(&self) -> &[String] {
        &self.display
    }

    pub fn outcome(&self) -> &SlotOutcome {
        &self.outcome
    }

    pub fn is_reel_stopped(&self, reel: usize) -> bool {
        self.stop_at.get(reel).is_none_or(|&stop| self.ticks >= stop)
    }

    pub fn is_finished(&self) -> bool {
        self.stop_at.last().is_none_or(|&stop| self.ticks >= stop)
    }

    pub fn total_ticks(&self) -> usize {
        self.stop_at.last().copied().unwrap_or(0)
    }

    pub fn next_delay(&self) -> Duration {
        let total = self.total_ticks().max(1);
        self.timing.delay_at(self.ticks as f64 / total as f64)
    }

    /// Roll every moving reel by one symbol
    pub fn advance<R: Rng + ?Sized>(&mut self, symbols: &SymbolSet, rng: &mut R) -> Vec<ReelEvent> {
        if self.is_finished() {
            return Vec::new();
        }

        self.ticks += 1;
        let mut events = Vec::new();

        for reel in 0..self.display.len() {
            let stop = self.stop_at[reel];
            if self.ticks < stop {
                let symbol = symbols
                    .symbols()
                    .choose(rng)
                    .cloned()
                    .unwrap_or_default();
                self.display[reel] = symbol.clone();
                events.push(ReelEvent::Spinning { reel, symbol });
            } else if self.ticks == stop {
                let symbol = self.outcome.reels[reel].clone();
                self.display[reel] = symbol.clone();
                events.push(ReelEvent::Stopped { reel, symbol });
            }
        }

        if self.is_finished() {
            events.push(ReelEvent::AllStopped {
                outcome: self.outcome.clone(),
            });
        }

        events
    }
}
