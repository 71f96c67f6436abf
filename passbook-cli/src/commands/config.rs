//! Config command - show or change settings

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use passbook_core::config::Config;

use super::get_passbook_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the opening balance used by sessions
    SetInitial {
        #[arg(allow_hyphen_values = true)]
        balance: i64,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let dir = get_passbook_dir()?;

    match command {
        ConfigCommands::Show { json } => {
            let config = Config::load(&dir).context("Failed to load settings")?;

            if json {
                let value = serde_json::json!({
                    "dir": dir,
                    "initialBalance": config.initial_balance,
                    "scenarios": config.scenarios(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("{}", "Passbook Settings".bold());
            println!();

            let mut table = output::create_table();
            table.add_row(vec!["Directory".to_string(), dir.display().to_string()]);
            table.add_row(vec!["Opening balance".to_string(), config.initial_balance.to_string()]);
            table.add_row(vec!["Scenarios".to_string(), config.scenarios().len().to_string()]);
            println!("{}", table);
            Ok(())
        }
        ConfigCommands::SetInitial { balance } => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create passbook directory: {:?}", dir))?;

            let mut config = Config::load(&dir).context("Failed to load settings")?;
            config.initial_balance = balance;
            config.save(&dir).context("Failed to save settings")?;

            output::success(&format!("Opening balance set to {}", balance));
            Ok(())
        }
    }
}
