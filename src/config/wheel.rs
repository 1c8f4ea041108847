//! Wheel mode configuration

use crate::animation::SpinTiming;
use crate::cli::OutputFormat;
use crate::core::ParticipantList;

/// Configuration for a wheel session
///
/// The participant list is final here: CLI names, settings file and
/// default detection have already been resolved.
#[derive(Debug, Clone)]
pub struct WheelConfig {
    /// Names on the wheel, in display order
    pub participants: ParticipantList,
    /// Seed for a reproducible session
    pub seed: Option<u64>,
    /// Delay curve of the spin animation
    pub timing: SpinTiming,
    /// Draw once and print instead of running interactively
    pub headless: bool,
    /// Output format for headless draws
    pub format: OutputFormat,
}

impl WheelConfig {
    pub fn builder() -> WheelConfigBuilder {
        WheelConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct WheelConfigBuilder {
    participants: Option<ParticipantList>,
    seed: Option<Option<u64>>,
    timing: Option<SpinTiming>,
    headless: Option<bool>,
    format: Option<OutputFormat>,
}

impl WheelConfigBuilder {
    pub fn new() -> Self {
        Self {
            participants: None,
            seed: None,
            timing: None,
            headless: None,
            format: None,
        }
    }

    pub fn with_participants(mut self, participants: ParticipantList) -> Self {
        self.participants = Some(participants);
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

impl crate::common::ConfigBuilder for WheelConfigBuilder {
    type Config = WheelConfig;

    fn build(self) -> Result<Self::Config, crate::error::RogvibeError> {
        Ok(WheelConfig {
            participants: self.participants.ok_or_else(|| {
                crate::error::RogvibeError::ConfigurationError {
                    message: "Missing required field: participants".to_string(),
                }
            })?,
            seed: self.seed.unwrap_or_default(),
            timing: self.timing.unwrap_or_default(),
            headless: self.headless.unwrap_or(false),
            format: self.format.unwrap_or(OutputFormat::Human),
        })
    }
}
