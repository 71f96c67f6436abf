//! Service layer - business logic orchestration
//!
//! Services drive the domain entities for a specific use case.

mod scenario;
mod session;

pub use scenario::{ScenarioReport, ScenarioService};
pub use session::{parse_script, SessionReport, SessionService, SessionStep};
