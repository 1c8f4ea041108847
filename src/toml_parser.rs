use std::path::{Path, PathBuf};

use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::constants::output::DEFAULT_SETTINGS_FILE;
use crate::error::RogvibeError;

/// Contents of `rogvibe.toml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub participants: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub slot: Option<SlotSettings>,
    pub animation: Option<AnimationSettings>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SlotSettings {
    pub reels: Option<usize>,
    pub symbols: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnimationSettings {
    pub base_delay_ms: Option<u64>,
    pub max_extra_delay_ms: Option<u64>,
}

impl Settings {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RogvibeError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&content, &path.display().to_string())
    }

    pub fn parse_str(content: &str, file: &str) -> Result<Self> {
        let settings = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            RogvibeError::TomlParseError(Box::new(crate::error::TomlParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
        })?;

        Ok(settings)
    }

    /// Load settings from an explicit path, or from `rogvibe.toml` in
    /// `dir` if one exists. A missing default file is not an error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading settings");
            return Self::parse_file(path);
        }

        let default_path: PathBuf = dir.join(DEFAULT_SETTINGS_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading default settings");
            Self::parse_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn slot_reels(&self) -> Option<usize> {
        self.slot.as_ref().and_then(|slot| slot.reels)
    }

    pub fn slot_symbols(&self) -> Option<&[String]> {
        self.slot
            .as_ref()
            .and_then(|slot| slot.symbols.as_deref())
    }

    pub fn base_delay_ms(&self) -> Option<u64> {
        self.animation.as_ref().and_then(|a| a.base_delay_ms)
    }

    pub fn max_extra_delay_ms(&self) -> Option<u64> {
        self.animation.as_ref().and_then(|a| a.max_extra_delay_ms)
    }
}
