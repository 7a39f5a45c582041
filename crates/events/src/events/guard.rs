use droidcheck_types::{CheckOutcome, CheckSection, PermissionOutcome, SourceFileCount};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Events emitted while verifying a project tree, in run order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuardEvent {
    /// Verification began against `root`.
    VerificationStarted { title: String, root: PathBuf },

    /// A group of existence checks is about to run.
    SectionStarted { section: CheckSection },

    /// One existence check finished.
    CheckCompleted { outcome: CheckOutcome },

    /// Informational source-file count finished.
    SourceFilesCounted { count: SourceFileCount },

    /// The manifest exists and its permissions are being scanned.
    PermissionScanStarted { manifest: PathBuf },

    /// One required permission was looked up.
    PermissionChecked { outcome: PermissionOutcome },

    /// The manifest is absent, so no permission lines follow.
    PermissionScanSkipped { manifest: PathBuf },

    /// Every check ran.
    VerificationCompleted { passed: bool, failures: usize },
}
