use rand::Rng;
use thiserror::Error;
use tracing::trace;

use crate::core::{ParticipantList, SlotOutcome, SymbolSet};

/// Failure of a single draw
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    #[error("cannot draw from an empty list")]
    EmptyInput,
}

/// Uniform winner selection over a fixed participant list
#[derive(Debug, Clone)]
pub struct Selector {
    participants: ParticipantList,
}

impl Selector {
    pub fn new(participants: ParticipantList) -> Self {
        Self { participants }
    }

    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    /// Draw the index of the next winner
    pub fn draw_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, SelectError> {
        if self.participants.is_empty() {
            return Err(SelectError::EmptyInput);
        }
        let index = rng.random_range(0..self.participants.len());
        trace!(index, len = self.participants.len(), "drew participant");
        Ok(index)
    }

    /// Draw the next winner
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, SelectError> {
        let index = self.draw_index(rng)?;
        self.participants
            .get(index)
            .ok_or(SelectError::EmptyInput)
    }
}

/// Independent per-reel draws over a symbol alphabet
#[derive(Debug, Clone)]
pub struct SlotSelector {
    symbols: SymbolSet,
    reels: usize,
}

impl SlotSelector {
    /// `reels` is clamped to at least one
    pub fn new(symbols: SymbolSet, reels: usize) -> Self {
        Self {
            symbols,
            reels: reels.max(1),
        }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn reels(&self) -> usize {
        self.reels
    }

    /// Number of distinct joint outcomes, M^K, or `None` on overflow
    pub fn outcome_space(&self) -> Option<u64> {
        let reels = u32::try_from(self.reels).ok()?;
        (self.symbols.len() as u64).checked_pow(reels)
    }

    /// Draw one symbol index for a single reel
    pub fn draw_symbol_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, SelectError> {
        if self.symbols.is_empty() {
            return Err(SelectError::EmptyInput);
        }
        Ok(rng.random_range(0..self.symbols.len()))
    }

    /// Draw every reel
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SlotOutcome, SelectError> {
        let reels = (0..self.reels)
            .map(|_| {
                let index = self.draw_symbol_index(rng)?;
                self.symbols
                    .get(index)
                    .map(str::to_string)
                    .ok_or(SelectError::EmptyInput)
            })
            .collect::<Result<Vec<_>, _>>()?;
        trace!(?reels, "drew slot outcome");
        Ok(SlotOutcome::new(reels))
    }
}
