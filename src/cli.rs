use clap::Parser;

use crate::common::{SessionArgs, SlotArgs};

#[derive(Parser, Debug)]
#[command(
    name = "rogvibe",
    about = "🎡 Spin a terminal lottery wheel to pick your next viber",
    long_about = "rogvibe puts a list of names on a terminal wheel and spins it to pick one at \
                  random. Every name has the same chance on every spin. Without names it looks \
                  for coding assistants installed on your PATH and lets fate choose which one \
                  to launch. Use --slot for a slot machine instead of a wheel.",
    version
)]
pub struct Cli {
    /// Names to put on the wheel (detected from PATH if none are given)
    #[arg(value_name = "NAME")]
    pub participants: Vec<String>,

    #[command(flatten)]
    pub slot: SlotArgs,

    #[command(flatten)]
    pub session: SessionArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
