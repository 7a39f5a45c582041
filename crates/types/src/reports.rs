//! Report type definitions for a verification run

use crate::{CheckOutcome, CheckSection, PermissionOutcome};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcomes of one section's checks, in table order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectionReport {
    pub section: CheckSection,
    pub checks: Vec<CheckOutcome>,
}

impl SectionReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.present)
    }
}

/// Informational count of source files under the source tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileCount {
    pub tree: PathBuf,
    /// Extension without the leading dot
    pub extension: String,
    pub language: String,
    pub count: usize,
}

/// Outcome of the manifest permission scan.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PermissionScan {
    /// The manifest does not exist; its absence is already a failed file check.
    Skipped { manifest: PathBuf },
    Scanned {
        manifest: PathBuf,
        outcomes: Vec<PermissionOutcome>,
    },
}

impl PermissionScan {
    /// Permission outcomes, empty when the scan was skipped.
    #[must_use]
    pub fn outcomes(&self) -> &[PermissionOutcome] {
        match self {
            Self::Skipped { .. } => &[],
            Self::Scanned { outcomes, .. } => outcomes,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Full result of a verification run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationReport {
    pub title: String,
    pub root: PathBuf,
    pub sections: Vec<SectionReport>,
    pub source_files: SourceFileCount,
    pub permissions: PermissionScan,
    /// Number of failed directory, file and permission checks
    pub failures: usize,
    pub passed: bool,
}

impl VerificationReport {
    /// Process exit status: 0 when every required check passed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed)
    }

    /// Every existence check, across sections, in run order.
    pub fn checks(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.sections.iter().flat_map(|section| section.checks.iter())
    }

    /// Existence checks that found nothing at their path.
    pub fn missing(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks().filter(|check| !check.present)
    }
}
