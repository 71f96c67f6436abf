//! Passbook Core - account bookkeeping
//!
//! - **domain**: the `Account` entity, operations and withdraw scenarios
//! - **services**: scenario table runs and session replays
//! - **config**: `settings.json` handling

pub mod config;
pub mod domain;
pub mod services;

use std::path::Path;

use config::Config;
use services::{ScenarioService, SessionService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{Account, Operation, ScenarioOutcome, WithdrawScenario};

/// Main context for Passbook operations
///
/// Loads configuration once and hands out services built from it.
pub struct PassbookContext {
    pub config: Config,
}

impl PassbookContext {
    pub fn new(dir: &Path) -> Result<Self> {
        let config = Config::load(dir)?;
        Ok(Self { config })
    }

    /// Scenario service over the configured withdraw table
    pub fn scenario_service(&self) -> ScenarioService {
        ScenarioService::new(self.config.scenarios())
    }

    /// Session service, optionally overriding the configured opening balance
    pub fn session_service(&self, initial_balance: Option<i64>) -> SessionService {
        SessionService::new(initial_balance.unwrap_or(self.config.initial_balance))
    }
}
