use crate::permissions::scan_permissions;
use crate::probe::{check_path_exists, count_source_files};
use droidcheck_config::ProjectConfig;
use droidcheck_errors::{Error, GuardError};
use droidcheck_events::{AppEvent, EventEmitter, EventSender, GuardEvent};
use droidcheck_types::{
    CheckOutcome, CheckSection, OverallStatus, PermissionScan, SectionReport, SourceFileCount,
    VerificationReport,
};
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

/// Runs every check against one project tree.
pub struct Verifier {
    project: ProjectConfig,
    tx: Option<EventSender>,
}

impl EventEmitter for Verifier {
    fn event_sender(&self) -> Option<&EventSender> {
        self.tx.as_ref()
    }
}

impl Verifier {
    #[must_use]
    pub fn new(project: ProjectConfig) -> Self {
        Self { project, tx: None }
    }

    /// Stream a `GuardEvent` for every step of the run to `tx`.
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Run all checks in their fixed order and aggregate the outcome.
    ///
    /// Missing paths and permissions are reported, not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns `GuardError::UnreadableManifest` when the manifest exists but
    /// cannot be read as text. The run stops there; events already emitted
    /// stay valid.
    pub fn run(&self) -> Result<VerificationReport, Error> {
        let start = Instant::now();
        let root = self.project.root.clone();
        info!(root = %root.display(), "Starting project verification");

        self.emit(AppEvent::Guard(GuardEvent::VerificationStarted {
            title: self.project.title.clone(),
            root: root.clone(),
        }));

        let mut status = OverallStatus::new();
        let sections = CheckSection::ALL
            .into_iter()
            .map(|section| self.run_section(section, &mut status))
            .collect();

        let source_files = self.count_sources();
        let permissions = self.scan_manifest(&mut status)?;

        let passed = status.passed();
        let failures = status.failures();
        self.emit(AppEvent::Guard(GuardEvent::VerificationCompleted { passed, failures }));

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(passed, failures, duration_ms, "Project verification finished");

        Ok(VerificationReport {
            title: self.project.title.clone(),
            root,
            sections,
            source_files,
            permissions,
            failures,
            passed,
        })
    }

    fn run_section(&self, section: CheckSection, status: &mut OverallStatus) -> SectionReport {
        self.emit(AppEvent::Guard(GuardEvent::SectionStarted { section }));

        let kind = section.kind();
        let checks = self
            .project
            .items(section)
            .iter()
            .map(|item| {
                let path = self.project.resolve(&item.path);
                let present = status.record(check_path_exists(&path, kind));
                if present {
                    debug!(%section, %kind, path = %path.display(), "Found");
                } else {
                    debug!(%section, %kind, path = %path.display(), "Missing");
                }

                let outcome = CheckOutcome {
                    section,
                    description: item.description.clone(),
                    path,
                    kind,
                    present,
                };
                self.emit(AppEvent::Guard(GuardEvent::CheckCompleted {
                    outcome: outcome.clone(),
                }));
                outcome
            })
            .collect();

        SectionReport { section, checks }
    }

    /// Informational only: never touches the overall status.
    fn count_sources(&self) -> SourceFileCount {
        let tree = self.project.source_tree_path();
        let walk = count_source_files(&tree, &self.project.source_extension);

        for skipped in &walk.skipped {
            debug!(tree = %tree.display(), error = %skipped, "Skipped unreadable entry");
            self.emit_warning_with_context(
                "Skipped unreadable entry while counting source files",
                skipped.clone(),
            );
        }

        let count = SourceFileCount {
            tree,
            extension: self.project.source_extension.clone(),
            language: self.project.source_language.clone(),
            count: walk.count,
        };
        self.emit(AppEvent::Guard(GuardEvent::SourceFilesCounted {
            count: count.clone(),
        }));
        count
    }

    fn scan_manifest(&self, status: &mut OverallStatus) -> Result<PermissionScan, Error> {
        let manifest = self.project.manifest_path();

        // Absence was already recorded by the application-files section
        if !manifest.exists() {
            debug!(manifest = %manifest.display(), "Manifest absent, skipping permission scan");
            self.emit(AppEvent::Guard(GuardEvent::PermissionScanSkipped {
                manifest: manifest.clone(),
            }));
            return Ok(PermissionScan::Skipped { manifest });
        }

        let text = fs::read_to_string(&manifest).map_err(|e| GuardError::UnreadableManifest {
            path: manifest.display().to_string(),
            reason: e.to_string(),
        })?;

        self.emit(AppEvent::Guard(GuardEvent::PermissionScanStarted {
            manifest: manifest.clone(),
        }));

        let outcomes = scan_permissions(&text, &self.project.required_permissions);
        for outcome in &outcomes {
            if !status.record(outcome.present) {
                info!(permission = %outcome.permission, "Required permission not declared");
            }
            self.emit(AppEvent::Guard(GuardEvent::PermissionChecked {
                outcome: outcome.clone(),
            }));
        }

        Ok(PermissionScan::Scanned { manifest, outcomes })
    }
}
