//! Guard-specific error types for project verification

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

/// Errors that abort a verification run.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum GuardError {
    /// The manifest exists but its contents could not be read.
    #[error("manifest at {path} could not be read: {reason}")]
    UnreadableManifest { path: String, reason: String },
}

impl UserFacingError for GuardError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnreadableManifest { .. } => {
                Some("Make sure the manifest is a readable UTF-8 text file.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::UnreadableManifest { .. } => Some("guard.unreadable_manifest"),
        }
    }
}
