//! Structured logging integration for events
//!
//! Every event that reaches the CLI is also logged with structured fields, so
//! `--debug` (or `RUST_LOG`) yields a full trace of the run on stderr.

use droidcheck_events::{AppEvent, GeneralEvent, GuardEvent};
use tracing::{debug, info, warn};

/// Log an `AppEvent` using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(event: &AppEvent) {
    match event {
        AppEvent::Guard(guard_event) => match guard_event {
            GuardEvent::VerificationStarted { title, root } => {
                info!(title = %title, root = %root.display(), "Verification started");
            }
            GuardEvent::SectionStarted { section } => {
                debug!(section = %section, "Section started");
            }
            GuardEvent::CheckCompleted { outcome } => {
                debug!(
                    section = %outcome.section,
                    kind = %outcome.kind,
                    path = %outcome.path.display(),
                    present = outcome.present,
                    "Check completed"
                );
            }
            GuardEvent::SourceFilesCounted { count } => {
                info!(
                    tree = %count.tree.display(),
                    extension = %count.extension,
                    count = count.count,
                    "Source files counted"
                );
            }
            GuardEvent::PermissionScanStarted { manifest } => {
                debug!(manifest = %manifest.display(), "Permission scan started");
            }
            GuardEvent::PermissionChecked { outcome } => {
                debug!(
                    permission = %outcome.permission,
                    present = outcome.present,
                    "Permission checked"
                );
            }
            GuardEvent::PermissionScanSkipped { manifest } => {
                debug!(manifest = %manifest.display(), "Permission scan skipped");
            }
            GuardEvent::VerificationCompleted { passed, failures } => {
                info!(passed = passed, failures = failures, "Verification completed");
            }
        },

        AppEvent::General(general_event) => match general_event {
            GeneralEvent::Warning { message, context } => {
                warn!(message = %message, context = ?context, "Warning");
            }
            GeneralEvent::DebugLog { message } => {
                debug!(message = %message, "Debug log");
            }
        },
    }
}
