//! Account operation model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::result::Error;
use super::Account;

/// A single deposit or withdraw request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "lowercase")]
pub enum Operation {
    Deposit(i64),
    Withdraw(i64),
}

impl Operation {
    /// Apply to an account, returning whether the operation took effect
    ///
    /// Deposits always apply.
    pub fn apply(&self, account: &mut Account) -> bool {
        match *self {
            Operation::Deposit(amount) => {
                account.deposit(amount);
                true
            }
            Operation::Withdraw(amount) => account.withdraw(amount),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit(amount) => write!(f, "deposit:{}", amount),
            Operation::Withdraw(amount) => write!(f, "withdraw:{}", amount),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Parse `deposit:<n>`, `withdraw:<n>`, or the short forms `d:<n>`, `w:<n>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, amount) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| Error::parse(format!("expected <verb>:<amount>, got '{}'", s)))?;

        let amount: i64 = amount
            .trim()
            .parse()
            .map_err(|_| Error::parse(format!("invalid amount in '{}'", s)))?;

        match verb.trim().to_lowercase().as_str() {
            "deposit" | "d" => Ok(Operation::Deposit(amount)),
            "withdraw" | "w" => Ok(Operation::Withdraw(amount)),
            other => Err(Error::parse(format!("unknown operation '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!("deposit:100".parse::<Operation>().unwrap(), Operation::Deposit(100));
        assert_eq!(" W:50 ".parse::<Operation>().unwrap(), Operation::Withdraw(50));
        assert_eq!("Withdraw:-5".parse::<Operation>().unwrap(), Operation::Withdraw(-5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("deposit".parse::<Operation>(), Err(Error::Parse(_))));
        assert!(matches!("deposit:abc".parse::<Operation>(), Err(Error::Parse(_))));
        assert!(matches!("transfer:10".parse::<Operation>(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_display_uses_long_form() {
        assert_eq!(Operation::Deposit(100).to_string(), "deposit:100");
        assert_eq!(Operation::Withdraw(7).to_string(), "withdraw:7");
    }

    #[test]
    fn test_apply() {
        let mut account = Account::new();
        assert!(Operation::Deposit(100).apply(&mut account));
        assert!(!Operation::Withdraw(200).apply(&mut account));
        assert!(Operation::Withdraw(40).apply(&mut account));
        assert_eq!(account.balance(), 60);
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Operation::Withdraw(5)).unwrap();
        assert_eq!(json, r#"{"kind":"withdraw","amount":5}"#);
    }
}
