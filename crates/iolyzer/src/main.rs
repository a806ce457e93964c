mod cmd;

use clap::{Parser, ValueEnum};

use crate::cmd::Command;

#[derive(Parser, Debug)]
#[command(name = "iolyzer", version, about = "IO-Link protocol analysis CLI")]
struct Cli {
    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn init_logging(level: LogLevel) {
    use tracing::level_filters::LevelFilter;

    let filter = match level {
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(err) = cmd::run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inspect_subcommand() {
        let cli = Cli::try_parse_from([
            "iolyzer",
            "inspect",
            "device.json",
            "--condition",
            "2",
            "--format",
            "json",
        ])
        .expect("inspect args should parse");

        assert!(matches!(cli.command, Command::Inspect(_)));
    }

    #[test]
    fn parses_modes_subcommand() {
        let cli = Cli::try_parse_from(["iolyzer", "modes"]).expect("modes should parse");
        assert!(matches!(cli.command, Command::Modes(_)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["iolyzer", "--log-level", "loud", "modes"]).is_err());
    }
}
