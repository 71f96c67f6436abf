//! Passbook CLI - account bookkeeping in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logger;
mod output;

use commands::{config, scenarios, session};

/// Passbook - account bookkeeping in your terminal
#[derive(Parser)]
#[command(name = "pb", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a withdraw scenario table
    Scenarios {
        /// Read scenarios from a .json or .csv file instead of settings
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay deposits and withdrawals on one account
    Session {
        /// Operations such as deposit:100 withdraw:30 (short: d:100 w:30)
        #[arg(required = true)]
        ops: Vec<String>,
        /// Opening balance (defaults to the configured one)
        #[arg(long, allow_hyphen_values = true)]
        initial: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the command ran but reported failures
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Scenarios { file, json } => scenarios::run(file.as_deref(), json),
        Commands::Session { ops, initial, json } => session::run(&ops, initial, json).map(|()| true),
        Commands::Config { command } => config::run(command).map(|()| true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_trailing_json_flag() {
        let cli = Cli::try_parse_from(["pb", "session", "d:100", "w:30", "--json"]).unwrap();
        match cli.command {
            Commands::Session { ops, initial, json } => {
                assert_eq!(ops, vec!["d:100", "w:30"]);
                assert_eq!(initial, None);
                assert!(json);
            }
            _ => panic!("expected session command"),
        }
    }

    #[test]
    fn test_session_trailing_negative_initial() {
        let cli = Cli::try_parse_from(["pb", "session", "d:-5", "--initial", "-5", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Session { ops, initial, json } => {
                assert_eq!(ops, vec!["d:-5"]);
                assert_eq!(initial, Some(-5));
                assert!(!json);
            }
            _ => panic!("expected session command"),
        }
    }

    #[test]
    fn test_session_requires_operations() {
        assert!(Cli::try_parse_from(["pb", "session", "--json"]).is_err());
    }

    #[test]
    fn test_config_set_initial_negative() {
        let cli = Cli::try_parse_from(["pb", "config", "set-initial", "-10"]).unwrap();
        match cli.command {
            Commands::Config {
                command: config::ConfigCommands::SetInitial { balance },
            } => assert_eq!(balance, -10),
            _ => panic!("expected config set-initial"),
        }
    }

    #[test]
    fn test_scenarios_file_and_json() {
        let cli = Cli::try_parse_from(["pb", "scenarios", "--file", "x.csv", "--json"]).unwrap();
        match cli.command {
            Commands::Scenarios { file, json } => {
                assert_eq!(file, Some(PathBuf::from("x.csv")));
                assert!(json);
            }
            _ => panic!("expected scenarios command"),
        }
    }
}
