//! # Rogvibe - A Terminal Lottery Wheel
//!
//! Rogvibe puts a list of names on a wheel in the terminal, spins it and
//! picks one at random. Every spin is an independent draw in which each name
//! has the same chance. Without names it fills the wheel with the coding
//! assistants it finds on `PATH`, and the winner can be launched straight
//! from the wheel. A slot machine mode draws one symbol per reel instead.
//!
//! ## Main Components
//!
//! - **Selector**: fair random draws over participants and reel symbols
//! - **Animation**: reveal sequences that land on an already drawn result
//! - **UI**: the interactive wheel and slot machine sessions
//! - **Reports**: human-readable and JSON output for headless draws
//!
//! ## Usage
//!
//! ### Drawing a Winner
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rogvibe::core::ParticipantList;
//! use rogvibe::selector::Selector;
//!
//! let selector = Selector::new(ParticipantList::from_raw(["Alice", "Bob", "Carol"]));
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let winner = selector.draw(&mut rng).unwrap();
//! println!("🎉 viber: {winner}");
//! ```
//!
//! ### Pulling the Slot Machine
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use rogvibe::core::{SlotVerdict, SymbolSet};
//! use rogvibe::selector::SlotSelector;
//!
//! let selector = SlotSelector::new(SymbolSet::new(["7", "🍒", "🔔"]), 3);
//! let outcome = selector.draw(&mut StdRng::seed_from_u64(7)).unwrap();
//!
//! match outcome.verdict() {
//!     SlotVerdict::GrandJackpot => println!("777!"),
//!     SlotVerdict::Jackpot(symbol) => println!("Jackpot: {symbol}"),
//!     SlotVerdict::NoMatch => println!("{outcome}"),
//! }
//! ```
//!
//! ### Reporting a Headless Draw
//!
//! ```
//! use rogvibe::core::{DrawOutcome, ParticipantList};
//! use rogvibe::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let outcome = DrawOutcome::Wheel {
//!     winner: "Bob".to_string(),
//!     participants: ParticipantList::from_raw(["Alice", "Bob"]),
//! };
//!
//! let json = JsonReportGenerator::new().generate_report(&outcome)?;
//! assert!(json.contains("\"winner\": \"Bob\""));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod animation;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod launcher;
pub mod participants;
pub mod reports;
pub mod selector;
pub mod toml_parser;
pub mod ui;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init_logger(cli.session.verbose);

    execute_command(cli)
}
