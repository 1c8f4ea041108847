//! Common functionality shared across modes

use std::path::PathBuf;

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::SpinTiming;
use crate::toml_parser::Settings;

/// Session arguments shared by every mode
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Settings file (defaults to ./rogvibe.toml when present)
    #[arg(short, long, value_name = "PATH", env = "ROGVIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed the random number generator for a reproducible session
    #[arg(long, env = "ROGVIBE_SEED")]
    pub seed: Option<u64>,

    /// Draw once and print the result instead of opening the interactive
    /// display
    #[arg(long, env = "ROGVIBE_HEADLESS")]
    pub headless: bool,

    #[command(flatten)]
    pub format: FormatArgs,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format for headless draws
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "ROGVIBE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Slot machine arguments
#[derive(Args, Debug, Clone)]
pub struct SlotArgs {
    /// Play the slot machine instead of spinning the wheel
    #[arg(long, env = "ROGVIBE_SLOT")]
    pub slot: bool,

    /// Number of reels
    #[arg(long, value_name = "K", env = "ROGVIBE_REELS")]
    pub reels: Option<usize>,

    /// Reel symbols, comma separated
    #[arg(long, value_name = "SYMBOLS", value_delimiter = ',', env = "ROGVIBE_SYMBOLS")]
    pub symbols: Vec<String>,
}

/// Everything a mode needs to build its configuration
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub participants: Vec<String>,
    pub slot: SlotArgs,
    pub session: SessionArgs,
    pub settings: Settings,
}

impl LaunchRequest {
    /// Seed from the command line, falling back to the settings file
    pub fn seed(&self) -> Option<u64> {
        self.session.seed.or(self.settings.seed)
    }

    /// Animation timing from the settings file, falling back to defaults
    pub fn timing(&self) -> SpinTiming {
        let defaults = SpinTiming::default();
        SpinTiming {
            base_delay: self
                .settings
                .base_delay_ms()
                .map(std::time::Duration::from_millis)
                .unwrap_or(defaults.base_delay),
            max_extra_delay: self
                .settings
                .max_extra_delay_ms()
                .map(std::time::Duration::from_millis)
                .unwrap_or(defaults.max_extra_delay),
        }
    }
}

/// RNG for one session: seeded when reproducibility was asked for,
/// otherwise from OS entropy
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::RogvibeError>;
}

/// Trait for configurations that can be created from a launch request
pub trait FromRequest: Sized {
    fn from_request(request: &LaunchRequest) -> Result<Self, crate::error::RogvibeError>;
}

/// Macro to implement `TryFrom<&LaunchRequest>` using [`FromRequest`] trait
#[macro_export]
macro_rules! impl_try_from_request {
    ($config:ty) => {
        impl std::convert::TryFrom<&$crate::common::LaunchRequest> for $config {
            type Error = $crate::error::RogvibeError;

            fn try_from(request: &$crate::common::LaunchRequest) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromRequest>::from_request(request)
            }
        }
    };
}

/// Headless request with no names or flags, for tests
#[cfg(test)]
pub(crate) fn test_request(settings: Settings) -> LaunchRequest {
    LaunchRequest {
        participants: vec![],
        slot: SlotArgs {
            slot: false,
            reels: None,
            symbols: vec![],
        },
        session: SessionArgs {
            config: None,
            seed: None,
            headless: true,
            format: FormatArgs {
                format: crate::cli::OutputFormat::Human,
            },
            verbose: false,
        },
        settings,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::Rng;

    use super::*;
    use crate::toml_parser::AnimationSettings;

    #[test]
    fn test_seed_precedence() {
        let mut req = test_request(Settings {
            seed: Some(1),
            ..Settings::default()
        });
        assert_eq!(req.seed(), Some(1));

        req.session.seed = Some(2);
        assert_eq!(req.seed(), Some(2));
    }

    #[test]
    fn test_timing_from_settings() {
        let req = test_request(Settings {
            animation: Some(AnimationSettings {
                base_delay_ms: Some(10),
                max_extra_delay_ms: None,
            }),
            ..Settings::default()
        });

        let timing = req.timing();
        assert_eq!(timing.base_delay, Duration::from_millis(10));
        assert_eq!(timing.max_extra_delay, SpinTiming::default().max_extra_delay);
    }

    #[test]
    fn test_seeded_session_rng_is_reproducible() {
        let sequence = |seed: Option<u64>| -> Vec<u32> {
            let mut rng = session_rng(seed);
            (0..32).map(|_| rng.random_range(0..1000)).collect()
        };

        assert_eq!(sequence(Some(3)), sequence(Some(3)));
        assert_ne!(sequence(Some(3)), sequence(Some(4)));
    }
}
