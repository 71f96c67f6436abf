//! Account domain model

use serde::Serialize;

/// An account holding an integer balance
///
/// The balance is only ever changed through `deposit` and `withdraw`.
/// Amounts are not validated: negative deposits and negative initial
/// balances pass through as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Account {
    balance: i64,
}

impl Account {
    /// Create an empty account
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account that starts with the given balance
    pub fn with_balance(balance: i64) -> Self {
        Self { balance }
    }

    /// Current balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `amount` to the balance
    pub fn deposit(&mut self, amount: i64) {
        self.balance = self.balance.wrapping_add(amount);
    }

    /// Take `amount` out of the balance if funds allow
    ///
    /// Returns `false` and leaves the balance untouched when `amount`
    /// exceeds the current balance.
    #[must_use = "a refused withdrawal is only reported through the return value"]
    pub fn withdraw(&mut self, amount: i64) -> bool {
        if amount <= self.balance {
            self.balance = self.balance.wrapping_sub(amount);
            true
        } else {
            false
        }
    }
}
