//! Scenarios command - run a withdraw table

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use passbook_core::services::ScenarioService;

use super::get_context;
use crate::output;

/// Returns whether every scenario passed
pub fn run(file: Option<&Path>, json: bool) -> Result<bool> {
    let service = match file {
        Some(path) => ScenarioService::load_file(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()))?,
        None => get_context()?.scenario_service(),
    };

    let report = service.run();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(report.all_passed());
    }

    let mut table = output::create_table();
    table.set_header(vec![
        "Initial",
        "Withdraw",
        "Expected balance",
        "Expected success",
        "Actual balance",
        "Actual success",
        "Result",
    ]);

    for outcome in &report.outcomes {
        let s = &outcome.scenario;
        let verdict = if outcome.passed() {
            "PASS".green().to_string()
        } else {
            "FAIL".red().to_string()
        };
        table.add_row(vec![
            s.initial_balance.to_string(),
            s.withdraw_amount.to_string(),
            s.final_balance.to_string(),
            output::yes_no(s.success).to_string(),
            outcome.actual_balance.to_string(),
            output::yes_no(outcome.actual_success).to_string(),
            verdict,
        ]);
    }

    println!("{}", table);
    println!();

    if report.all_passed() {
        output::success(&format!("{} of {} scenarios passed", report.passed, report.total));
    } else {
        for outcome in report.failures() {
            println!("{}", outcome.scenario.to_string().bold());
            for mismatch in outcome.mismatches() {
                println!("  • {}", mismatch);
            }
        }
        println!();
        output::error(&format!("{} of {} scenarios failed", report.failed, report.total));
    }

    Ok(report.all_passed())
}
