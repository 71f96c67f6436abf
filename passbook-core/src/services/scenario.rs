//! Scenario service - run withdraw tables against fresh accounts

use std::path::Path;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{default_withdraw_scenarios, ScenarioOutcome, WithdrawScenario};

/// Summary of a scenario table run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl ScenarioReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Outcomes whose expectations did not hold
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Runs a table of withdraw scenarios
pub struct ScenarioService {
    scenarios: Vec<WithdrawScenario>,
}

impl ScenarioService {
    pub fn new(scenarios: Vec<WithdrawScenario>) -> Self {
        Self { scenarios }
    }

    /// Service over the reference withdraw table
    pub fn with_defaults() -> Self {
        Self::new(default_withdraw_scenarios())
    }

    /// Load a scenario table from a `.json` or `.csv` file
    ///
    /// JSON files hold an array of scenario objects. CSV files need the header
    /// `initial_balance,withdraw_amount,final_balance,success`.
    pub fn load_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let scenarios = match extension.as_deref() {
            Some("json") => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str::<Vec<WithdrawScenario>>(&content)?
            }
            Some("csv") => {
                let mut reader = csv::ReaderBuilder::new()
                    .trim(csv::Trim::All)
                    .from_path(path)?;
                reader
                    .deserialize::<WithdrawScenario>()
                    .collect::<std::result::Result<Vec<_>, csv::Error>>()?
            }
            _ => {
                return Err(Error::config(format!(
                    "unsupported scenario file '{}': expected .json or .csv",
                    path.display()
                )))
            }
        };

        if scenarios.is_empty() {
            return Err(Error::validation(format!(
                "scenario file '{}' contains no rows",
                path.display()
            )));
        }

        tracing::debug!(count = scenarios.len(), path = %path.display(), "loaded scenario table");
        Ok(Self::new(scenarios))
    }

    pub fn scenarios(&self) -> &[WithdrawScenario] {
        &self.scenarios
    }

    /// Run every scenario on its own account, preserving table order
    pub fn run(&self) -> ScenarioReport {
        let outcomes: Vec<ScenarioOutcome> = self.scenarios.iter().map(|s| s.run()).collect();

        for outcome in outcomes.iter().filter(|o| !o.passed()) {
            tracing::warn!(
                scenario = %outcome.scenario,
                mismatches = %outcome.mismatches().join("; "),
                "scenario failed"
            );
        }

        let passed = outcomes.iter().filter(|o| o.passed()).count();
        let report = ScenarioReport {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            outcomes,
        };

        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            "scenario run finished"
        );
        report
    }
}
