//! Integration tests for report types

use droidcheck_types::{
    CheckOutcome, CheckSection, PathKind, PermissionOutcome, PermissionScan, SectionReport,
    SourceFileCount, VerificationReport,
};
use std::path::PathBuf;

fn outcome(section: CheckSection, path: &str, present: bool) -> CheckOutcome {
    CheckOutcome {
        section,
        description: path.to_string(),
        path: PathBuf::from(path),
        kind: section.kind(),
        present,
    }
}

fn report(passed: bool, permissions: PermissionScan) -> VerificationReport {
    VerificationReport {
        title: "MT5 Alert".to_string(),
        root: PathBuf::from("MT5AlertApp"),
        sections: vec![
            SectionReport {
                section: CheckSection::Structure,
                checks: vec![outcome(CheckSection::Structure, "MT5AlertApp", true)],
            },
            SectionReport {
                section: CheckSection::BuildConfiguration,
                checks: vec![
                    outcome(CheckSection::BuildConfiguration, "MT5AlertApp/build.gradle", passed),
                    outcome(CheckSection::BuildConfiguration, "MT5AlertApp/settings.gradle", true),
                ],
            },
        ],
        source_files: SourceFileCount {
            tree: PathBuf::from("MT5AlertApp/app/src/main/java"),
            extension: "kt".to_string(),
            language: "Kotlin".to_string(),
            count: 3,
        },
        permissions,
        failures: usize::from(!passed),
        passed,
    }
}

#[test]
fn test_exit_code_follows_passed() {
    let skipped = PermissionScan::Skipped {
        manifest: PathBuf::from("MT5AlertApp/app/src/main/AndroidManifest.xml"),
    };
    assert_eq!(report(true, skipped.clone()).exit_code(), 0);
    assert_eq!(report(false, skipped).exit_code(), 1);
}

#[test]
fn test_missing_lists_only_failed_checks() {
    let report = report(false, PermissionScan::Skipped {
        manifest: PathBuf::from("m.xml"),
    });
    let missing: Vec<_> = report.missing().collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].path, PathBuf::from("MT5AlertApp/build.gradle"));
    assert_eq!(missing[0].kind, PathKind::File);
    assert!(!report.sections[1].passed());
    assert!(report.sections[0].passed());
}

#[test]
fn test_skipped_scan_has_no_outcomes() {
    let scan = PermissionScan::Skipped {
        manifest: PathBuf::from("m.xml"),
    };
    assert!(scan.is_skipped());
    assert!(scan.outcomes().is_empty());

    let scan = PermissionScan::Scanned {
        manifest: PathBuf::from("m.xml"),
        outcomes: vec![PermissionOutcome {
            permission: "android.permission.INTERNET".to_string(),
            present: true,
        }],
    };
    assert!(!scan.is_skipped());
    assert_eq!(scan.outcomes().len(), 1);
}

#[test]
fn test_report_json_shape() {
    let report = report(true, PermissionScan::Skipped {
        manifest: PathBuf::from("m.xml"),
    });
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["passed"], true);
    assert_eq!(value["permissions"]["status"], "skipped");
    assert_eq!(value["sections"][0]["section"], "structure");
    assert_eq!(value["sections"][0]["checks"][0]["kind"], "directory");
    assert_eq!(value["source_files"]["count"], 3);
}
