//! Slot command implementation

use miette::{Result, WrapErr};

use crate::common::{ConfigBuilder, FromRequest, LaunchRequest};
use crate::config::SlotConfig;
use crate::constants::slot::{DEFAULT_REELS, DEFAULT_SYMBOLS};
use crate::core::SymbolSet;
use crate::error::RogvibeError;

impl FromRequest for SlotConfig {
    fn from_request(request: &LaunchRequest) -> Result<Self, RogvibeError> {
        let symbols = if !request.slot.symbols.is_empty() {
            SymbolSet::new(&request.slot.symbols)
        } else if let Some(symbols) = request.settings.slot_symbols() {
            SymbolSet::new(symbols)
        } else {
            SymbolSet::new(DEFAULT_SYMBOLS.iter().copied())
        };

        let reels = request
            .slot
            .reels
            .or(request.settings.slot_reels())
            .unwrap_or(DEFAULT_REELS);

        SlotConfig::builder()
            .with_symbols(symbols)
            .with_reels(reels)
            .with_seed(request.seed())
            .with_timing(request.timing())
            .with_headless(request.session.headless)
            .with_format(request.session.format.format)
            .build()
    }
}

crate::impl_try_from_request!(SlotConfig);

/// Execute the slot command
pub fn execute_slot_command(request: &LaunchRequest) -> Result<()> {
    let config = SlotConfig::from_request(request)
        .wrap_err("Failed to build slot machine configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::slot::SlotExecutor;
    SlotExecutor::execute(config)
}
