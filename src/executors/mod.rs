//! Command executors that handle the actual logic for each mode

pub mod slot;
pub mod wheel;

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::core::DrawOutcome;
use crate::launcher;
use crate::participants::PathProbe;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Interactive sessions need a terminal on stdout
fn is_interactive(headless: bool) -> bool {
    !headless && console::Term::stdout().is_term()
}

fn print_report(format: OutputFormat, outcome: &DrawOutcome) -> Result<()> {
    let report = match format {
        OutputFormat::Human => HumanReportGenerator::new().generate_report(outcome),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(outcome),
    }
    .wrap_err("Failed to generate report")?;

    print!("{report}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Replace this process with the winner; exits with 127, 126 or 1 when
/// that fails
fn launch_winner(winner: &str) -> Result<()> {
    if let Err(err) = launcher::launch(winner, &PathProbe::from_env()) {
        eprintln!("{} {}", style("[rogvibe]").red().bold(), err);
        std::process::exit(err.exit_code());
    }
    Ok(())
}
