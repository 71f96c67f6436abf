//! Configuration management
//!
//! Settings live in `settings.json` inside the passbook directory:
//! ```json
//! {
//!   "app": { "initialBalance": 0, ... },
//!   "scenarios": [
//!     { "initial_balance": 100, "withdraw_amount": 50, "final_balance": 50, "success": true }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::{default_withdraw_scenarios, WithdrawScenario};

/// Environment variable overriding `app.initialBalance`
pub const INITIAL_BALANCE_ENV: &str = "PASSBOOK_INITIAL_BALANCE";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    scenarios: Vec<WithdrawScenario>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    initial_balance: i64,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Passbook configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Opening balance for session replays
    pub initial_balance: i64,
    /// Extra withdraw scenarios appended to the reference table
    pub extra_scenarios: Vec<WithdrawScenario>,
}

impl Config {
    /// Load config from the passbook directory
    ///
    /// A missing or malformed settings file yields defaults. The
    /// `PASSBOOK_INITIAL_BALANCE` environment variable beats the file.
    pub fn load(dir: &Path) -> Result<Self> {
        let raw = match read_settings(dir) {
            Ok(raw) => raw,
            Err(Error::Json(e)) => {
                tracing::warn!(dir = %dir.display(), error = %e, "ignoring malformed settings file");
                SettingsFile::default()
            }
            Err(e) => return Err(e),
        };

        let initial_balance = match std::env::var(INITIAL_BALANCE_ENV) {
            Ok(value) => value.trim().parse::<i64>().map_err(|_| {
                Error::config(format!("{} must be an integer, got '{}'", INITIAL_BALANCE_ENV, value))
            })?,
            Err(_) => raw.app.initial_balance,
        };

        Ok(Self {
            initial_balance,
            extra_scenarios: raw.scenarios,
        })
    }

    /// Save config to the passbook directory
    /// Preserves app settings this crate doesn't manage
    ///
    /// Refuses to overwrite a settings file that does not parse.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let mut settings = read_settings(dir).map_err(|e| match e {
            Error::Json(e) => Error::config(format!(
                "refusing to overwrite malformed {}: {}",
                dir.join(SETTINGS_FILE).display(),
                e
            )),
            other => other,
        })?;

        settings.app.initial_balance = self.initial_balance;
        settings.scenarios = self.extra_scenarios.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }

    /// Reference withdraw table followed by configured rows
    pub fn scenarios(&self) -> Vec<WithdrawScenario> {
        let mut scenarios = default_withdraw_scenarios();
        scenarios.extend(self.extra_scenarios.iter().copied());
        scenarios
    }
}

fn read_settings(dir: &Path) -> Result<SettingsFile> {
    let settings_path = dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content)?)
}
