//! Session command - replay operations on one account

use anyhow::Result;
use colored::Colorize;
use passbook_core::services::{parse_script, SessionService};
use passbook_core::OperationResult;

use super::get_context;
use crate::output;

pub fn run(tokens: &[String], initial: Option<i64>, json: bool) -> Result<()> {
    let operations = match parse_script(tokens) {
        Ok(ops) => ops,
        Err(e) if json => {
            let result: OperationResult<()> = OperationResult::fail(e.to_string());
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let report = session_service(initial)?.replay(&operations);

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(&report))?);
        return Ok(());
    }

    println!("Opening balance: {}", report.initial_balance);
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["#", "Operation", "Applied", "Balance"]);
    for (i, step) in report.steps.iter().enumerate() {
        let applied = if step.applied {
            output::yes_no(true).to_string()
        } else {
            "refused".yellow().to_string()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            step.operation.to_string(),
            applied,
            step.balance_after.to_string(),
        ]);
    }
    println!("{}", table);
    println!();

    println!("{} {}", "Final balance:".bold(), report.final_balance);
    if report.refused() > 0 {
        output::warning(&format!(
            "{} withdrawal(s) refused for insufficient funds",
            report.refused()
        ));
    }

    Ok(())
}

/// Settings are only read when no opening balance was given
fn session_service(initial: Option<i64>) -> Result<SessionService> {
    match initial {
        Some(balance) => Ok(SessionService::new(balance)),
        None => Ok(get_context()?.session_service(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_core::config::INITIAL_BALANCE_ENV;

    #[test]
    fn test_explicit_initial_ignores_malformed_env() {
        std::env::set_var(INITIAL_BALANCE_ENV, "not-a-number");
        let service = session_service(Some(7));
        std::env::remove_var(INITIAL_BALANCE_ENV);

        let report = service.unwrap().replay(&[]);
        assert_eq!(report.final_balance, 7);
    }
}
