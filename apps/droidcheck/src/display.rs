//! Output rendering and formatting

use console::{Style, Term};
use droidcheck_types::{
    CheckOutcome, CheckSection, ColorChoice, PermissionOutcome, SourceFileCount,
    VerificationReport,
};
use std::io;
use std::path::Path;

const RULE_WIDTH: usize = 60;

const NEXT_STEPS: [&str; 5] = [
    "Open Android Studio",
    "Select 'Open an existing Android Studio project'",
    "Navigate to the {root} folder",
    "Android Studio will automatically configure the project",
    "Build and install the APK to your Android device",
];

const REQUIREMENTS: [&str; 3] = [
    "Android Studio 2022.2.1 or newer",
    "Android device or emulator running Android 5.0+ (API 21+)",
    "USB debugging enabled (for physical device)",
];

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.json_output
    }

    /// Render the closing part of a run
    pub fn render_report(&self, report: &VerificationReport) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            println!("{json}");
        } else {
            for line in self.summary_lines(report) {
                println!("{line}");
            }
        }
        Ok(())
    }

    pub fn banner_lines(&self, title: &str) -> [String; 3] {
        [
            rule(),
            format!("{title} Android Project Structure Verification"),
            rule(),
        ]
    }

    pub fn section_header(&self, section: CheckSection) -> String {
        format!("\n{}:", section.header())
    }

    pub fn check_line(&self, outcome: &CheckOutcome) -> String {
        let path = outcome.path.display();
        if outcome.present {
            format!("{} {}: {path}", self.pass_marker(), outcome.description)
        } else {
            format!(
                "{} {}: {path}",
                self.fail_marker("✗ MISSING"),
                outcome.description
            )
        }
    }

    pub fn source_count_lines(&self, count: &SourceFileCount) -> [String; 2] {
        [
            "\n📊 PROJECT ANALYSIS:".to_string(),
            format!(
                "{} Found {} {} source files",
                self.pass_marker(),
                count.count,
                count.language
            ),
        ]
    }

    pub fn permission_header(&self) -> &'static str {
        "🔐 PERMISSION ANALYSIS:"
    }

    pub fn permission_line(&self, outcome: &PermissionOutcome) -> String {
        if outcome.present {
            format!("{} Permission: {}", self.pass_marker(), outcome.permission)
        } else {
            format!(
                "{} Missing permission: {}",
                self.fail_marker("✗"),
                outcome.permission
            )
        }
    }

    /// Closing banner, with next steps when every check passed
    pub fn summary_lines(&self, report: &VerificationReport) -> Vec<String> {
        let mut lines = vec![format!("\n{}", rule())];

        if !report.passed {
            lines.push(
                self.fail_marker("❌ PROJECT VERIFICATION FAILED: Missing files detected!"),
            );
            return lines;
        }

        lines.push(self.style_success("🎉 PROJECT VERIFICATION COMPLETE: ALL FILES PRESENT!"));
        lines.push("\n📋 NEXT STEPS:".to_string());
        lines.extend(
            NEXT_STEPS
                .iter()
                .enumerate()
                .map(|(i, step)| format!("{}. {}", i + 1, fill_root(step, &report.root))),
        );
        lines.push("\n⚠️  REQUIREMENTS:".to_string());
        lines.extend(REQUIREMENTS.iter().map(|req| format!("- {req}")));
        lines.push(rule());
        lines
    }

    fn pass_marker(&self) -> String {
        if self.supports_color() {
            Style::new().green().force_styling(true).apply_to("✓").to_string()
        } else {
            "✓".to_string()
        }
    }

    fn fail_marker(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().red().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn style_success(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().green().bold().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Check if color output is supported
    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn fill_root(step: &str, root: &Path) -> String {
    step.replace("{root}", &root.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use droidcheck_types::{PathKind, PermissionScan};
    use std::path::PathBuf;

    fn plain() -> OutputRenderer {
        OutputRenderer::new(false, ColorChoice::Never)
    }

    fn outcome(present: bool) -> CheckOutcome {
        CheckOutcome {
            section: CheckSection::Structure,
            description: "App module directory".to_string(),
            path: PathBuf::from("MT5AlertApp/app"),
            kind: PathKind::Directory,
            present,
        }
    }

    fn report(passed: bool) -> VerificationReport {
        VerificationReport {
            title: "MT5 Alert".to_string(),
            root: PathBuf::from("MT5AlertApp"),
            sections: Vec::new(),
            source_files: SourceFileCount {
                tree: PathBuf::from("MT5AlertApp/app/src/main/java"),
                extension: "kt".to_string(),
                language: "Kotlin".to_string(),
                count: 0,
            },
            permissions: PermissionScan::Skipped {
                manifest: PathBuf::from("MT5AlertApp/app/src/main/AndroidManifest.xml"),
            },
            failures: usize::from(!passed),
            passed,
        }
    }

    #[test]
    fn check_lines_use_markers() {
        let renderer = plain();
        assert_eq!(
            renderer.check_line(&outcome(true)),
            "✓ App module directory: MT5AlertApp/app"
        );
        assert_eq!(
            renderer.check_line(&outcome(false)),
            "✗ MISSING App module directory: MT5AlertApp/app"
        );
    }

    #[test]
    fn permission_lines() {
        let renderer = plain();
        let mut outcome = PermissionOutcome {
            permission: "android.permission.WAKE_LOCK".to_string(),
            present: true,
        };
        assert_eq!(
            renderer.permission_line(&outcome),
            "✓ Permission: android.permission.WAKE_LOCK"
        );
        outcome.present = false;
        assert_eq!(
            renderer.permission_line(&outcome),
            "✗ Missing permission: android.permission.WAKE_LOCK"
        );
    }

    #[test]
    fn failed_summary_has_no_closing_rule() {
        let lines = plain().summary_lines(&report(false));
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "❌ PROJECT VERIFICATION FAILED: Missing files detected!"
        );
    }

    #[test]
    fn passed_summary_names_root_folder() {
        let lines = plain().summary_lines(&report(true));
        assert!(lines.contains(&"3. Navigate to the MT5AlertApp folder".to_string()));
        assert!(lines.contains(&"- USB debugging enabled (for physical device)".to_string()));
        assert_eq!(lines.last().unwrap(), &"=".repeat(60));
    }

    #[test]
    fn always_color_wraps_markers() {
        let renderer = OutputRenderer::new(false, ColorChoice::Always);
        let line = renderer.check_line(&outcome(true));
        assert!(line.contains('\u{1b}'));
        assert!(line.ends_with("App module directory: MT5AlertApp/app"));
    }
}
