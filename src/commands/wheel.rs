//! Wheel command implementation

use miette::{Result, WrapErr};

use crate::common::{ConfigBuilder, FromRequest, LaunchRequest, session_rng};
use crate::config::WheelConfig;
use crate::error::RogvibeError;
use crate::participants::{PathProbe, resolve_participants};

impl FromRequest for WheelConfig {
    fn from_request(request: &LaunchRequest) -> Result<Self, RogvibeError> {
        let seed = request.seed();
        // Detection gets its own stream so PATH contents never shift the draws
        let mut detect_rng = session_rng(seed.map(|seed| seed.wrapping_add(1)));
        let participants = resolve_participants(
            &request.participants,
            request.settings.participants.as_deref(),
            &PathProbe::from_env(),
            &mut detect_rng,
        );

        WheelConfig::builder()
            .with_participants(participants)
            .with_seed(seed)
            .with_timing(request.timing())
            .with_headless(request.session.headless)
            .with_format(request.session.format.format)
            .build()
    }
}

crate::impl_try_from_request!(WheelConfig);

/// Execute the wheel command
pub fn execute_wheel_command(request: &LaunchRequest) -> Result<()> {
    let config = WheelConfig::from_request(request)
        .wrap_err("Failed to build wheel configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::wheel::WheelExecutor;
    WheelExecutor::execute(config)
}
