//! Withdraw scenario domain model
//!
//! A scenario is one row of a withdraw table: start an account at
//! `initial_balance`, withdraw `withdraw_amount`, and expect the account to
//! end at `final_balance` with the withdrawal reporting `success`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Account;

/// One withdraw case with its expected outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawScenario {
    pub initial_balance: i64,
    pub withdraw_amount: i64,
    pub final_balance: i64,
    pub success: bool,
}

impl WithdrawScenario {
    pub fn new(initial_balance: i64, withdraw_amount: i64, final_balance: i64, success: bool) -> Self {
        Self {
            initial_balance,
            withdraw_amount,
            final_balance,
            success,
        }
    }

    /// Build a scenario whose expectations follow the withdraw rule
    pub fn expected(initial_balance: i64, withdraw_amount: i64) -> Self {
        if withdraw_amount <= initial_balance {
            Self::new(
                initial_balance,
                withdraw_amount,
                initial_balance.wrapping_sub(withdraw_amount),
                true,
            )
        } else {
            Self::new(initial_balance, withdraw_amount, initial_balance, false)
        }
    }

    /// Run the scenario against a fresh account
    pub fn run(&self) -> ScenarioOutcome {
        let mut account = Account::with_balance(self.initial_balance);
        let actual_success = account.withdraw(self.withdraw_amount);

        ScenarioOutcome {
            scenario: *self,
            actual_balance: account.balance(),
            actual_success,
        }
    }
}

impl fmt::Display for WithdrawScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "initial_balance: {} withdraw_amount: {} final_balance: {} success: {}",
            self.initial_balance, self.withdraw_amount, self.final_balance, self.success
        )
    }
}

/// The observed result of running a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: WithdrawScenario,
    pub actual_balance: i64,
    pub actual_success: bool,
}

impl ScenarioOutcome {
    /// True when both the balance and the success flag match expectations
    pub fn passed(&self) -> bool {
        self.actual_balance == self.scenario.final_balance
            && self.actual_success == self.scenario.success
    }

    /// Describe each expectation that did not hold
    pub fn mismatches(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.actual_balance != self.scenario.final_balance {
            out.push(format!(
                "final_balance: expected {}, got {}",
                self.scenario.final_balance, self.actual_balance
            ));
        }
        if self.actual_success != self.scenario.success {
            out.push(format!(
                "success: expected {}, got {}",
                self.scenario.success, self.actual_success
            ));
        }
        out
    }
}

/// The reference withdraw table
pub fn default_withdraw_scenarios() -> Vec<WithdrawScenario> {
    vec![
        WithdrawScenario::new(100, 50, 50, true),
        WithdrawScenario::new(100, 200, 100, false),
        WithdrawScenario::new(150, 50, 100, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenarios_pass() {
        for scenario in default_withdraw_scenarios() {
            let outcome = scenario.run();
            assert!(outcome.passed(), "{} -> {:?}", scenario, outcome.mismatches());
        }
    }

    #[test]
    fn test_display_format() {
        let scenario = WithdrawScenario::new(100, 50, 50, true);
        assert_eq!(
            scenario.to_string(),
            "initial_balance: 100 withdraw_amount: 50 final_balance: 50 success: true"
        );
    }

    #[test]
    fn test_expected_follows_withdraw_rule() {
        assert_eq!(
            WithdrawScenario::expected(100, 200),
            WithdrawScenario::new(100, 200, 100, false)
        );
        assert_eq!(
            WithdrawScenario::expected(150, 50),
            WithdrawScenario::new(150, 50, 100, true)
        );
    }

    #[test]
    fn test_wrong_expectation_reports_mismatches() {
        let scenario = WithdrawScenario::new(100, 200, 0, true);
        let outcome = scenario.run();

        assert!(!outcome.passed());
        assert_eq!(outcome.actual_balance, 100);
        assert!(!outcome.actual_success);
        assert_eq!(
            outcome.mismatches(),
            vec![
                "final_balance: expected 0, got 100".to_string(),
                "success: expected true, got false".to_string(),
            ]
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{"initial_balance":150,"withdraw_amount":50,"final_balance":100,"success":true}"#;
        let scenario: WithdrawScenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario, WithdrawScenario::new(150, 50, 100, true));
    }
}
