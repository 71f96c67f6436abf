//! Session service - replay an operation script on one account

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Operation};

/// One applied operation and the balance it left behind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStep {
    pub operation: Operation,
    pub applied: bool,
    pub balance_after: i64,
}

/// Result of replaying a script
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub initial_balance: i64,
    pub final_balance: i64,
    pub steps: Vec<SessionStep>,
}

impl SessionReport {
    /// Number of withdrawals refused for insufficient funds
    pub fn refused(&self) -> usize {
        self.steps.iter().filter(|s| !s.applied).count()
    }
}

/// Replays operations against an account opened with `initial_balance`
pub struct SessionService {
    initial_balance: i64,
}

impl SessionService {
    pub fn new(initial_balance: i64) -> Self {
        Self { initial_balance }
    }

    pub fn replay(&self, operations: &[Operation]) -> SessionReport {
        let mut account = Account::with_balance(self.initial_balance);
        let mut steps = Vec::with_capacity(operations.len());

        for operation in operations {
            let applied = operation.apply(&mut account);
            if !applied {
                tracing::debug!(%operation, balance = account.balance(), "withdrawal refused");
            }
            steps.push(SessionStep {
                operation: *operation,
                applied,
                balance_after: account.balance(),
            });
        }

        SessionReport {
            initial_balance: self.initial_balance,
            final_balance: account.balance(),
            steps,
        }
    }
}

/// Parse script tokens such as `deposit:100 w:30`
///
/// Fails on the first bad token, naming its 1-based position.
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Operation>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token.as_ref().parse::<Operation>().map_err(|e| match e {
                Error::Parse(msg) => Error::parse(format!("token {}: {}", i + 1, msg)),
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_tracks_balance() {
        let ops = vec![
            Operation::Deposit(100),
            Operation::Withdraw(30),
            Operation::Withdraw(500),
            Operation::Deposit(5),
        ];
        let report = SessionService::new(0).replay(&ops);

        assert_eq!(report.final_balance, 75);
        assert_eq!(report.refused(), 1);
        let balances: Vec<i64> = report.steps.iter().map(|s| s.balance_after).collect();
        assert_eq!(balances, vec![100, 70, 70, 75]);
        assert!(!report.steps[2].applied);
    }

    #[test]
    fn test_replay_empty_script() {
        let report = SessionService::new(42).replay(&[]);
        assert_eq!(report.initial_balance, 42);
        assert_eq!(report.final_balance, 42);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_parse_script() {
        let ops = parse_script(&["deposit:100", "w:30"]).unwrap();
        assert_eq!(ops, vec![Operation::Deposit(100), Operation::Withdraw(30)]);
    }

    #[test]
    fn test_parse_script_reports_position() {
        let err = parse_script(&["d:1", "oops"]).unwrap_err();
        assert!(err.to_string().contains("token 2"));
    }
}
