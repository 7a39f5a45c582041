#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for droidcheck
//!
//! The verifier never prints. Every check result travels as an event to the
//! CLI, which decides how to render it (text lines, logs, or nothing in JSON
//! mode).

pub mod events;
pub use events::{AppEvent, GeneralEvent, GuardEvent};

use std::sync::mpsc;

/// Type alias for event sender
pub type EventSender = mpsc::Sender<AppEvent>;

/// Type alias for event receiver
pub type EventReceiver = mpsc::Receiver<AppEvent>;

/// Create a new event channel
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}

/// The unified trait for emitting events
///
/// Implemented by anything that may hold an `EventSender`; emitting without
/// a sender is a no-op.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            // Ignore send errors - if receiver is dropped, we just continue
            let _ = sender.send(event);
        }
    }

    /// Emit a debug log event
    fn emit_debug(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::debug(message)));
    }

    /// Emit a warning event
    fn emit_warning(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning(message)));
    }

    /// Emit a warning event with context
    fn emit_warning_with_context(&self, message: impl Into<String>, context: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning_with_context(
            message, context,
        )));
    }
}

impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}
