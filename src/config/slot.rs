//! Slot mode configuration

use crate::animation::SpinTiming;
use crate::cli::OutputFormat;
use crate::constants::slot::MAX_REELS;
use crate::core::SymbolSet;

/// Configuration for a slot machine session
#[derive(Debug, Clone)]
pub struct SlotConfig {
    /// Alphabet every reel draws from
    pub symbols: SymbolSet,
    /// Number of reels, between 1 and 8
    pub reels: usize,
    pub seed: Option<u64>,
    pub timing: SpinTiming,
    pub headless: bool,
    pub format: OutputFormat,
}

impl SlotConfig {
    pub fn builder() -> SlotConfigBuilder {
        SlotConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SlotConfigBuilder {
    symbols: Option<SymbolSet>,
    reels: Option<usize>,
    seed: Option<Option<u64>>,
    timing: Option<SpinTiming>,
    headless: Option<bool>,
    format: Option<OutputFormat>,
}

impl SlotConfigBuilder {
    pub fn new() -> Self {
        Self {
            symbols: None,
            reels: None,
            seed: None,
            timing: None,
            headless: None,
            format: None,
        }
    }

    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = Some(symbols);
        self
    }

    pub fn with_reels(mut self, reels: usize) -> Self {
        self.reels = Some(reels);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_timing(mut self, timing: SpinTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = Some(headless);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for SlotConfigBuilder {
    type Config = SlotConfig;

    fn build(self) -> Result<Self::Config, crate::error::RogvibeError> {
        let reels = self.reels.ok_or_else(|| crate::error::RogvibeError::ConfigurationError {
            message: "Missing required field: reels".to_string(),
        })?;
        if !(1..=MAX_REELS).contains(&reels) {
            return Err(crate::error::RogvibeError::ConfigurationError {
                message: format!("reels must be between 1 and {MAX_REELS}, got {reels}"),
            });
        }

        Ok(SlotConfig {
            symbols: self.symbols.ok_or_else(|| {
                crate::error::RogvibeError::ConfigurationError {
                    message: "Missing required field: symbols".to_string(),
                }
            })?,
            reels,
            seed: self.seed.unwrap_or_default(),
            timing: self.timing.unwrap_or_default(),
            headless: self.headless.unwrap_or(false),
            format: self.format.unwrap_or(OutputFormat::Human),
        })
    }
}
