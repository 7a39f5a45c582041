//! Check records and their outcomes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What kind of filesystem entry a check expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Directory,
    File,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// An expected path relative to the project root, with a human-readable label.
///
/// An empty `path` refers to the project root itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub path: String,
    pub description: String,
}

impl CheckItem {
    #[must_use]
    pub fn new(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
        }
    }
}

/// Groups of existence checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckSection {
    Structure,
    BuildConfiguration,
    ApplicationFiles,
    ResourceFiles,
}

impl CheckSection {
    pub const ALL: [CheckSection; 4] = [
        Self::Structure,
        Self::BuildConfiguration,
        Self::ApplicationFiles,
        Self::ResourceFiles,
    ];

    /// Header line printed before the section's checks.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Structure => "📁 PROJECT STRUCTURE",
            Self::BuildConfiguration => "🔧 BUILD CONFIGURATION",
            Self::ApplicationFiles => "📱 ANDROID APPLICATION FILES",
            Self::ResourceFiles => "🎨 RESOURCE FILES",
        }
    }

    /// Kind of entry every item in this section must be.
    #[must_use]
    pub fn kind(self) -> PathKind {
        match self {
            Self::Structure => PathKind::Directory,
            _ => PathKind::File,
        }
    }
}

impl fmt::Display for CheckSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structure => "structure",
            Self::BuildConfiguration => "build_configuration",
            Self::ApplicationFiles => "application_files",
            Self::ResourceFiles => "resource_files",
        };
        f.write_str(name)
    }
}

/// Result of one existence check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub section: CheckSection,
    pub description: String,
    /// Path as probed, i.e. joined onto the project root.
    pub path: PathBuf,
    pub kind: PathKind,
    pub present: bool,
}

/// Result of looking for one permission identifier in the manifest text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionOutcome {
    pub permission: String,
    pub present: bool,
}

/// Aggregate pass/fail across all required checks.
///
/// Starts passing; the first failed check latches it to failed for the rest
/// of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallStatus {
    passed: bool,
    failures: usize,
}

impl OverallStatus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            passed: true,
            failures: 0,
        }
    }

    /// Fold one check result into the aggregate and hand it back.
    pub fn record(&mut self, passed: bool) -> bool {
        if !passed {
            self.passed = false;
            self.failures += 1;
        }
        passed
    }

    #[must_use]
    pub fn passed(self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn failures(self) -> usize {
        self.failures
    }
}

impl Default for OverallStatus {
    fn default() -> Self {
        Self::new()
    }
}
