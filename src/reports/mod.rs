//! Report generation for headless draws
//!
//! - human: styled console output
//! - json: JSON for scripts

pub mod human;
pub mod json;

use crate::core::DrawOutcome;
use crate::error::RogvibeError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Render a finished draw
    fn generate_report(&self, outcome: &DrawOutcome) -> Result<String, RogvibeError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
