//! # Configuration Module
//!
//! This module provides configuration structures for both rogvibe modes.
//! Each mode has its own config module with a builder for easy construction.
//!
//! - **WheelConfig**: participants and timing for the lottery wheel
//! - **SlotConfig**: symbols, reel count and timing for the slot machine
//!
//! ## Example
//!
//! ```
//! use rogvibe::ConfigBuilder;
//! use rogvibe::cli::OutputFormat;
//! use rogvibe::config::{SlotConfig, WheelConfig};
//! use rogvibe::core::{ParticipantList, SymbolSet};
//!
//! let wheel = WheelConfig::builder()
//!     .with_participants(ParticipantList::from_raw(["Alice", "Bob", "Carol"]))
//!     .with_seed(Some(7))
//!     .build()
//!     .unwrap();
//! assert_eq!(wheel.participants.len(), 3);
//!
//! let slot = SlotConfig::builder()
//!     .with_symbols(SymbolSet::new(["7", "🍒", "🔔"]))
//!     .with_reels(3)
//!     .with_format(OutputFormat::Json)
//!     .build()
//!     .unwrap();
//! assert_eq!(slot.reels, 3);
//! ```

pub mod slot;
pub mod wheel;

pub use slot::SlotConfig;
pub use wheel::WheelConfig;
