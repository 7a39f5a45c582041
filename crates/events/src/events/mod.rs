use serde::{Deserialize, Serialize};

pub mod general;
pub mod guard;

pub use general::*;
pub use guard::*;

/// Top-level application event enum that aggregates all domain-specific events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// General utility events (warnings, debug messages)
    General(GeneralEvent),

    /// Guard events (project verification)
    Guard(GuardEvent),
}
