//! Participant resolution and default-provider detection
//!
//! When the user names nobody, rogvibe fills the wheel with the coding
//! assistants it can find on `PATH`, padded with filler names so the wheel
//! layout is always full.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

use crate::constants::participants::{
    FALLBACK_DEFAULTS, FILLERS, LARGE_WHEEL_CAPACITY, MAYBE_VIBER, SMALL_WHEEL_CAPACITY,
};
use crate::core::ParticipantList;

/// Lookup of executables, abstracted so detection can be tested without
/// touching the real `PATH`
pub trait CommandProbe {
    /// Full path of `command` if it resolves to an executable
    fn locate(&self, command: &str) -> Option<PathBuf>;

    fn is_available(&self, command: &str) -> bool {
        self.locate(command).is_some()
    }
}

/// Resolves commands against a `PATH`-style search list
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// Probe using the current process `PATH`
    pub fn from_env() -> Self {
        Self {
            search_path: env::var_os("PATH"),
        }
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }
}

impl CommandProbe for PathProbe {
    fn locate(&self, command: &str) -> Option<PathBuf> {
        if command.is_empty() {
            return None;
        }

        let direct = Path::new(command);
        if direct.components().count() > 1 {
            return is_executable(direct).then(|| direct.to_path_buf());
        }

        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .flat_map(|dir| candidate_names(command).map(move |name| dir.join(name)))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(windows)]
fn candidate_names(command: &str) -> impl Iterator<Item = String> + '_ {
    ["", ".exe", ".cmd", ".bat"]
        .into_iter()
        .map(move |ext| format!("{command}{ext}"))
}

#[cfg(not(windows))]
fn candidate_names(command: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(command.to_string())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Detect which `candidates` are installed and shape them for the wheel
///
/// Returns an empty list when nothing is installed. Otherwise the providers
/// are shuffled, then padded with alternating fillers to 4 (fewer than 4
/// found) or 8 (5 to 7 found), or sampled down to 8 (more than 8 found).
pub fn detect_providers<P, R>(probe: &P, candidates: &[&str], rng: &mut R) -> Vec<String>
where
    P: CommandProbe + ?Sized,
    R: Rng + ?Sized,
{
    let mut providers: Vec<String> = candidates
        .iter()
        .filter(|candidate| probe.is_available(candidate))
        .map(|candidate| candidate.to_string())
        .collect();

    debug!(?providers, "detected providers on PATH");

    if providers.is_empty() {
        return providers;
    }

    providers.shuffle(rng);

    let found = providers.len();
    if found < SMALL_WHEEL_CAPACITY {
        pad_with_fillers(&mut providers, SMALL_WHEEL_CAPACITY);
    } else if found > SMALL_WHEEL_CAPACITY && found < LARGE_WHEEL_CAPACITY {
        pad_with_fillers(&mut providers, LARGE_WHEEL_CAPACITY);
    } else if found > LARGE_WHEEL_CAPACITY {
        providers = providers
            .choose_multiple(rng, LARGE_WHEEL_CAPACITY)
            .cloned()
            .collect();
    }

    debug!(?providers, "shaped default participants");
    providers
}

fn pad_with_fillers(providers: &mut Vec<String>, target: usize) {
    let mut fillers = FILLERS.iter().cycle();
    while providers.len() < target {
        if let Some(filler) = fillers.next() {
            providers.push(filler.to_string());
        }
    }
}

/// Participants used when none were supplied anywhere
pub fn default_participants<P, R>(probe: &P, rng: &mut R) -> ParticipantList
where
    P: CommandProbe + ?Sized,
    R: Rng + ?Sized,
{
    let detected = detect_providers(probe, MAYBE_VIBER, rng);
    if detected.is_empty() {
        debug!("no providers found, using fallback participants");
        ParticipantList::from_raw(FALLBACK_DEFAULTS)
    } else {
        ParticipantList::new(detected)
    }
}

/// Pick the first non-empty participant source: CLI names, then the
/// settings file, then detection
pub fn resolve_participants<P, R>(
    cli_names: &[String],
    settings_names: Option<&[String]>,
    probe: &P,
    rng: &mut R,
) -> ParticipantList
where
    P: CommandProbe + ?Sized,
    R: Rng + ?Sized,
{
    let from_cli = ParticipantList::from_raw(cli_names);
    if !from_cli.is_empty() {
        return from_cli;
    }

    if let Some(names) = settings_names {
        let from_settings = ParticipantList::from_raw(names);
        if !from_settings.is_empty() {
            return from_settings;
        }
    }

    default_participants(probe, rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Probe that reports a fixed set of commands as installed
    struct FakeProbe(HashSet<&'static str>);

    impl FakeProbe {
        fn with(commands: &[&'static str]) -> Self {
            Self(commands.iter().copied().collect())
        }
    }

    impl CommandProbe for FakeProbe {
        fn locate(&self, command: &str) -> Option<PathBuf> {
            self.0
                .contains(command)
                .then(|| PathBuf::from("/usr/bin").join(command))
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    fn count_fillers(names: &[String]) -> usize {
        names.iter().filter(|n| FILLERS.contains(&n.as_str())).count()
    }

    #[test]
    fn test_no_providers() {
        let result = detect_providers(&FakeProbe::with(&[]), MAYBE_VIBER, &mut rng());
        assert!(result.is_empty());
    }

    #[test]
    fn test_less_than_four_pads_to_four() {
        let probe = FakeProbe::with(&["kimi", "claude"]);
        let result = detect_providers(&probe, MAYBE_VIBER, &mut rng());

        assert_eq!(result.len(), 4);
        assert!(result.contains(&"kimi".to_string()));
        assert!(result.contains(&"claude".to_string()));
        assert_eq!(count_fillers(&result), 2);
        assert!(result.contains(&"lucky".to_string()));
        assert!(result.contains(&"handy".to_string()));
    }

    #[test]
    fn test_exactly_four_is_unchanged() {
        let providers = ["kimi", "claude", "gemini", "codex"];
        let result = detect_providers(&FakeProbe::with(&providers), MAYBE_VIBER, &mut rng());

        assert_eq!(result.len(), 4);
        assert_eq!(count_fillers(&result), 0);
        for provider in providers {
            assert!(result.contains(&provider.to_string()));
        }
    }

    #[test]
    fn test_between_five_and_eight_pads_to_eight() {
        let providers = ["kimi", "claude", "gemini", "codex", "code", "cursor"];
        let result = detect_providers(&FakeProbe::with(&providers), MAYBE_VIBER, &mut rng());

        assert_eq!(result.len(), 8);
        for provider in providers {
            assert!(result.contains(&provider.to_string()));
        }
        assert_eq!(result[6], "lucky");
        assert_eq!(result[7], "handy");
    }

    #[test]
    fn test_exactly_eight_is_unchanged() {
        let providers = [
            "kimi", "claude", "gemini", "codex", "code", "cursor", "amp", "opencode",
        ];
        let result = detect_providers(&FakeProbe::with(&providers), MAYBE_VIBER, &mut rng());

        assert_eq!(result.len(), 8);
        assert_eq!(count_fillers(&result), 0);
    }

    #[test]
    fn test_more_than_eight_samples_eight() {
        let candidates = [
            "kimi", "claude", "gemini", "codex", "code", "cursor", "amp", "opencode", "extra1",
            "extra2",
        ];
        let result = detect_providers(&FakeProbe::with(&candidates), &candidates, &mut rng());

        assert_eq!(result.len(), 8);
        let unique: HashSet<_> = result.iter().collect();
        assert_eq!(unique.len(), 8);
        assert!(result.iter().all(|r| candidates.contains(&r.as_str())));
    }

    #[test]
    fn test_detection_shuffles() {
        let providers = ["kimi", "claude", "gemini", "codex"];
        let probe = FakeProbe::with(&providers);
        let mut rng = rng();

        let orders: HashSet<Vec<String>> = (0..20)
            .map(|_| detect_providers(&probe, MAYBE_VIBER, &mut rng))
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn test_default_participants_fallback() {
        let list = default_participants(&FakeProbe::with(&[]), &mut rng());
        assert_eq!(list, ParticipantList::from_raw(FALLBACK_DEFAULTS));
    }

    #[test]
    fn test_resolve_prefers_cli_then_settings() {
        let probe = FakeProbe::with(&["claude"]);
        let cli = vec!["  alice ".to_string(), "bob".to_string()];
        let settings = vec!["carol".to_string()];

        let list = resolve_participants(&cli, Some(&settings), &probe, &mut rng());
        assert_eq!(list.names(), &["alice", "bob"]);

        let blank_cli = vec!["   ".to_string()];
        let list = resolve_participants(&blank_cli, Some(&settings), &probe, &mut rng());
        assert_eq!(list.names(), &["carol"]);

        let list = resolve_participants(&[], None, &probe, &mut rng());
        assert_eq!(list.len(), 4);
        assert!(list.iter().any(|name| name == "claude"));
    }

    #[cfg(unix)]
    #[test]
    fn test_path_probe_finds_executables() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("mytool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        let plain = dir.path().join("notes");
        std::fs::write(&plain, "not executable").unwrap();

        let probe = PathProbe::with_search_path(dir.path());
        assert_eq!(probe.locate("mytool"), Some(tool));
        assert!(!probe.is_available("notes"));
        assert!(!probe.is_available("missing"));
        assert!(!probe.is_available(""));
    }
}
