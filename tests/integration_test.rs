//! Integration tests for rogvibe using the library interface

use std::collections::HashMap;
use std::fs;

use clap::Parser;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rogvibe::cli::{Cli, OutputFormat};
use rogvibe::common::{FromRequest, LaunchRequest};
use rogvibe::config::{SlotConfig, WheelConfig};
use rogvibe::core::{DrawOutcome, ParticipantList, SymbolSet};
use rogvibe::executors::{slot, wheel};
use rogvibe::reports::{JsonReportGenerator, ReportGenerator};
use rogvibe::selector::{SelectError, Selector, SlotSelector};
use rogvibe::toml_parser::Settings;
use tempfile::TempDir;

fn request(args: &[&str], settings: Settings) -> LaunchRequest {
    let cli = Cli::try_parse_from(std::iter::once("rogvibe").chain(args.iter().copied())).unwrap();
    LaunchRequest {
        participants: cli.participants,
        slot: cli.slot,
        session: cli.session,
        settings,
    }
}

fn write_settings(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("rogvibe.toml"), content).unwrap();
}

#[test]
fn test_settings_file_drives_a_headless_wheel() {
    let dir = TempDir::new().unwrap();
    write_settings(
        &dir,
        r#"
participants = ["Alice", "Bob", "Carol"]
seed = 42

[animation]
base_delay_ms = 10
"#,
    );

    let settings = Settings::load(None, dir.path()).unwrap();
    let config = WheelConfig::from_request(&request(&["--headless"], settings)).unwrap();

    assert_eq!(config.participants.names(), &["Alice", "Bob", "Carol"]);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.timing.base_delay.as_millis(), 10);

    let first = wheel::draw_once(&config, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = wheel::draw_once(&config, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_settings_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::load(None, dir.path()).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_explicit_settings_file_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Settings::load(Some(&missing), dir.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}

#[test]
fn test_invalid_settings_are_reported() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, "participants = [\"Alice\"\nseed = ");

    let err = Settings::load(None, dir.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid TOML syntax"));
}

#[test]
fn test_unknown_settings_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, "participant = [\"typo\"]\n");

    assert!(Settings::load(None, dir.path()).is_err());
}

#[test]
fn test_slot_settings_and_cli_precedence() {
    let dir = TempDir::new().unwrap();
    write_settings(
        &dir,
        r#"
[slot]
reels = 4
symbols = ["7", "🍒"]
"#,
    );
    let settings = Settings::load(None, dir.path()).unwrap();

    let from_file = SlotConfig::from_request(&request(&["--slot"], settings.clone())).unwrap();
    assert_eq!(from_file.reels, 4);
    assert_eq!(from_file.symbols.symbols(), &["7", "🍒"]);

    let from_cli = SlotConfig::from_request(&request(
        &["--slot", "--reels", "2", "--symbols", "a,b,c"],
        settings,
    ))
    .unwrap();
    assert_eq!(from_cli.reels, 2);
    assert_eq!(from_cli.symbols.symbols(), &["a", "b", "c"]);
}

#[test]
fn test_three_participants_are_drawn_fairly() {
    let selector = Selector::new(ParticipantList::from_raw(["Alice", "Bob", "Carol"]));
    let mut rng = StdRng::seed_from_u64(2024);
    let draws = 3000;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        *counts
            .entry(selector.draw(&mut rng).unwrap().to_string())
            .or_default() += 1;
    }

    assert_eq!(counts.len(), 3);
    let expected = draws as f64 / 3.0;
    let chi_square: f64 = counts
        .values()
        .map(|&observed| (observed as f64 - expected).powi(2) / expected)
        .sum();
    // 2 degrees of freedom, p = 0.001
    assert!(chi_square < 13.82, "chi-square {chi_square} too large: {counts:?}");
}

#[test]
fn test_draws_are_independent_of_previous_winners() {
    let selector = Selector::new(ParticipantList::from_raw(["Alice", "Bob"]));
    let mut rng = StdRng::seed_from_u64(5);

    let mut repeats = 0;
    let mut previous = selector.draw(&mut rng).unwrap().to_string();
    for _ in 0..2000 {
        let winner = selector.draw(&mut rng).unwrap().to_string();
        if winner == previous {
            repeats += 1;
        }
        previous = winner;
    }

    // Sampling with replacement repeats about half the time
    assert!((800..1200).contains(&repeats), "repeats: {repeats}");
}

#[test]
fn test_empty_list_is_an_error() {
    let selector = Selector::new(ParticipantList::from_raw(["  ", ""]));
    assert_eq!(
        selector.draw(&mut StdRng::seed_from_u64(1)),
        Err(SelectError::EmptyInput)
    );
}

#[test]
fn test_slot_reaches_every_joint_outcome() {
    let selector = SlotSelector::new(SymbolSet::new(["7", "🍒"]), 3);
    let mut rng = StdRng::seed_from_u64(99);

    let seen: std::collections::HashSet<Vec<String>> = (0..500)
        .map(|_| selector.draw(&mut rng).unwrap().reels)
        .collect();

    assert_eq!(selector.outcome_space(), Some(8));
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_headless_slot_json_report() {
    let config = SlotConfig::from_request(&request(
        &["--slot", "--reels", "3", "--symbols", "7", "--format", "json"],
        Settings::default(),
    ))
    .unwrap();
    assert_eq!(config.format, OutputFormat::Json);

    let outcome = slot::draw_once(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    assert!(matches!(outcome, DrawOutcome::Slot { .. }));

    let report = JsonReportGenerator::new().generate_report(&outcome).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(json["mode"], "slot");
    assert_eq!(json["reels"], serde_json::json!(["7", "7", "7"]));
    assert_eq!(json["grand_jackpot"], true);
}
