//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;

use serde::Serialize;

use crate::constants::participants::SPECIAL_PARTICIPANTS;
use crate::constants::slot::LUCKY_SEVEN;

/// Ordered list of names eligible to win a spin
///
/// Duplicates are kept: a name listed twice occupies two slots on the wheel
/// and is twice as likely to be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParticipantList {
    names: Vec<String>,
}

impl ParticipantList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Build a list from raw user input, trimming each entry and dropping
    /// entries that are blank after trimming
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = raw
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Split the list at `capacity`, returning the visible head and the
    /// number of entries that did not fit
    pub fn truncated(&self, capacity: usize) -> (ParticipantList, usize) {
        let visible = self.names.iter().take(capacity).cloned().collect();
        let extra = self.names.len().saturating_sub(capacity);
        (ParticipantList::new(visible), extra)
    }
}

impl From<Vec<String>> for ParticipantList {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

/// Alphabet a slot reel draws from
///
/// Symbols are unique; the reel probability of each symbol is exactly 1/M.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolSet {
    symbols: Vec<String>,
}

impl SymbolSet {
    /// Build an alphabet, trimming entries and dropping blanks and repeats
    /// while keeping first-seen order
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<String> = Vec::new();
        for symbol in raw {
            let symbol = symbol.as_ref().trim();
            if !symbol.is_empty() && !symbols.iter().any(|s| s == symbol) {
                symbols.push(symbol.to_string());
            }
        }
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.symbols.get(index).map(String::as_str)
    }
}

/// Returns true for winners that are celebrated but never launched
pub fn is_special_participant(name: &str) -> bool {
    SPECIAL_PARTICIPANTS.contains(&name)
}

/// Result of one slot pull, one symbol per reel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotOutcome {
    pub reels: Vec<String>,
}

/// Presentation-level reading of a slot outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotVerdict {
    NoMatch,
    /// Every reel shows the same symbol
    Jackpot(String),
    /// Every reel shows the lucky seven
    GrandJackpot,
}

impl SlotOutcome {
    pub fn new(reels: Vec<String>) -> Self {
        Self { reels }
    }

    pub fn verdict(&self) -> SlotVerdict {
        let Some(first) = self.reels.first() else {
            return SlotVerdict::NoMatch;
        };
        // A lone reel always "matches" itself, which is not a win
        if self.reels.len() < 2 || self.reels.iter().any(|symbol| symbol != first) {
            return SlotVerdict::NoMatch;
        }
        if first == LUCKY_SEVEN {
            SlotVerdict::GrandJackpot
        } else {
            SlotVerdict::Jackpot(first.clone())
        }
    }
}

impl fmt::Display for SlotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.reels.join(" | "))
    }
}

/// Which display the session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Wheel,
    Slot,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Wheel => write!(f, "wheel"),
            Mode::Slot => write!(f, "slot"),
        }
    }
}

/// A completed draw, as reported by headless runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Wheel {
        winner: String,
        participants: ParticipantList,
    },
    Slot {
        outcome: SlotOutcome,
        symbols: SymbolSet,
    },
}

impl DrawOutcome {
    pub fn mode(&self) -> Mode {
        match self {
            DrawOutcome::Wheel { .. } => Mode::Wheel,
            DrawOutcome::Slot { .. } => Mode::Slot,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_raw_trims_and_drops_blanks() {
        let list = ParticipantList::from_raw(["  user1  ", "", "  user2  ", "   "]);
        assert_eq!(list.names(), &["user1".to_string(), "user2".to_string()]);
    }

    #[test]
    fn test_from_raw_keeps_duplicates() {
        let list = ParticipantList::from_raw(["handy", "handy", "lucky"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_truncated() {
        let list = ParticipantList::from_raw(["a", "b", "c", "d", "e"]);

        let (visible, extra) = list.truncated(4);
        assert_eq!(visible.len(), 4);
        assert_eq!(extra, 1);

        let (visible, extra) = list.truncated(8);
        assert_eq!(visible, list);
        assert_eq!(extra, 0);
    }

    #[test]
    fn test_symbol_set_dedupes() {
        let symbols = SymbolSet::new(["7", " 7 ", "🍒", "", "🍒", "🔔"]);
        assert_eq!(symbols.symbols(), &["7", "🍒", "🔔"]);
    }

    #[test]
    fn test_slot_verdicts() {
        let grand = SlotOutcome::new(vec!["7".into(), "7".into(), "7".into()]);
        assert_eq!(grand.verdict(), SlotVerdict::GrandJackpot);

        let jackpot = SlotOutcome::new(vec!["🍒".into(), "🍒".into(), "🍒".into()]);
        assert_eq!(jackpot.verdict(), SlotVerdict::Jackpot("🍒".into()));

        let miss = SlotOutcome::new(vec!["7".into(), "7".into(), "🍒".into()]);
        assert_eq!(miss.verdict(), SlotVerdict::NoMatch);

        let lone = SlotOutcome::new(vec!["7".into()]);
        assert_eq!(lone.verdict(), SlotVerdict::NoMatch);
    }

    #[test]
    fn test_slot_outcome_display() {
        let outcome = SlotOutcome::new(vec!["7".into(), "🍋".into(), "7".into()]);
        assert_eq!(outcome.to_string(), "[ 7 | 🍋 | 7 ]");
    }

    #[test]
    fn test_special_participants() {
        assert!(is_special_participant("lucky"));
        assert!(is_special_participant("handy"));
        assert!(!is_special_participant("claude"));
    }
}
