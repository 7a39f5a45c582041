//! Event handling and checklist display

use crate::display::OutputRenderer;
use crate::logging::log_event_with_tracing;
use droidcheck_events::{AppEvent, GuardEvent};

/// Turns verifier events into checklist lines on stdout
pub struct EventHandler {
    renderer: OutputRenderer,
}

impl EventHandler {
    /// Create new event handler
    pub fn new(renderer: OutputRenderer) -> Self {
        Self { renderer }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        log_event_with_tracing(&event);

        // JSON mode prints only the final report
        if self.renderer.is_json() {
            return;
        }

        // General events already reached stderr through tracing
        let AppEvent::Guard(guard_event) = event else {
            return;
        };

        match guard_event {
            GuardEvent::VerificationStarted { title, .. } => {
                for line in self.renderer.banner_lines(&title) {
                    println!("{line}");
                }
            }
            GuardEvent::SectionStarted { section } => {
                println!("{}", self.renderer.section_header(section));
            }
            GuardEvent::CheckCompleted { outcome } => {
                println!("{}", self.renderer.check_line(&outcome));
            }
            GuardEvent::SourceFilesCounted { count } => {
                for line in self.renderer.source_count_lines(&count) {
                    println!("{line}");
                }
            }
            GuardEvent::PermissionScanStarted { .. } => {
                println!("{}", self.renderer.permission_header());
            }
            GuardEvent::PermissionChecked { outcome } => {
                println!("{}", self.renderer.permission_line(&outcome));
            }
            GuardEvent::PermissionScanSkipped { .. } | GuardEvent::VerificationCompleted { .. } => {}
        }
    }
}
