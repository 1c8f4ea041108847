//! Configuration constants for rogvibe
//!
//! This module contains all tunable constants used throughout the
//! application. Timing values can be overridden through the settings file.

use std::time::Duration;

/// Participant defaults and detection
pub mod participants {
    /// Commands probed on `PATH` when no participants are given
    pub const MAYBE_VIBER: &[&str] = &[
        "kimi", "claude", "gemini", "codex", "code", "cursor", "amp", "opencode", "qwen", "copilot",
    ];

    /// Used when detection finds nothing at all
    pub const FALLBACK_DEFAULTS: &[&str] = &["handy", "handy", "handy", "handy"];

    /// Padding entries, used alternately
    pub const FILLERS: [&str; 2] = ["lucky", "handy"];

    /// Winners that only celebrate and are never launched
    pub const SPECIAL_PARTICIPANTS: &[&str] = &["lucky", "handy"];

    /// Commands that open the current directory when launched
    pub const DIRECTORY_EDITORS: &[&str] = &["code", "cursor"];

    pub const SMALL_WHEEL_CAPACITY: usize = 4;
    pub const LARGE_WHEEL_CAPACITY: usize = 8;
}

/// Wheel and reel animation
pub mod animation {
    use super::*;

    /// Delay before the first tick of a spin
    pub const BASE_DELAY: Duration = Duration::from_millis(50);

    /// Extra delay reached at the very end of a spin (eased quadratically)
    pub const MAX_EXTRA_DELAY: Duration = Duration::from_millis(250);

    /// Full laps are drawn from `[MIN_LAPS * n, MAX_LAPS * n]` steps
    pub const MIN_LAPS: usize = 4;
    pub const MAX_LAPS: usize = 7;

    /// Ticks before the first reel stops, and between reel stops
    pub const REEL_BASE_TICKS: usize = 12;
    pub const REEL_STAGGER_TICKS: usize = 6;

    pub const DICE_FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];
    pub const DICE_EMOJI: &str = "🎲";
    pub const TARGET_EMOJI: &str = "🎯";

    pub const CELEBRATION_EMOJIS: &[&str] = &["✨", "🌟", "⭐", "💫", "🎉", "🎊", "🎈"];

    /// Headless drumroll on stderr
    pub const TICK_INTERVAL: Duration = Duration::from_millis(80);
    pub const REVEAL_TICKS: usize = 12;
}

/// Slot machine defaults
pub mod slot {
    pub const DEFAULT_REELS: usize = 3;
    pub const MAX_REELS: usize = 8;

    pub const DEFAULT_SYMBOLS: &[&str] = &["7", "🍒", "🍋", "🔔", "⭐", "💎"];

    /// Symbol that turns a jackpot into a grand jackpot
    pub const LUCKY_SEVEN: &str = "7";
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Settings file looked up in the working directory
    pub const DEFAULT_SETTINGS_FILE: &str = "rogvibe.toml";
}
