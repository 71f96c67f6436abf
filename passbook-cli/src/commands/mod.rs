//! CLI command implementations

pub mod config;
pub mod scenarios;
pub mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use passbook_core::PassbookContext;

/// Get the passbook directory from environment or default
pub fn get_passbook_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PASSBOOK_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".passbook"))
}

/// Build the passbook context from settings
pub fn get_context() -> Result<PassbookContext> {
    let dir = get_passbook_dir()?;
    tracing::debug!(dir = %dir.display(), "loading settings");

    PassbookContext::new(&dir).context("Failed to load passbook settings")
}
