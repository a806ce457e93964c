use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use iolyzer::AnalyzerError;

pub mod inspect;
pub mod modes;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show what the analyzer derives from a device profile.
    Inspect(InspectArgs),
    /// List the available analyzer modes.
    Modes(ModesArgs),
}

pub fn run(command: Command) -> Result<(), AnalyzerError> {
    match command {
        Command::Inspect(args) => inspect::run(args),
        Command::Modes(args) => {
            modes::run(args);
            Ok(())
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Device profile JSON distilled from an IODD.
    pub profile: PathBuf,

    /// Condition value selecting a process-data variant.
    #[arg(long, value_name = "VALUE")]
    pub condition: Option<i64>,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ModesArgs {
    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    pub format: OutputFormat,
}
