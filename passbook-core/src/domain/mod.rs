//! Core domain entities
//!
//! Pure data structures and the rules that govern them - no I/O.

mod account;
mod operation;
pub mod result;
pub mod scenario;

pub use account::Account;
pub use operation::Operation;
pub use scenario::{default_withdraw_scenarios, ScenarioOutcome, WithdrawScenario};
