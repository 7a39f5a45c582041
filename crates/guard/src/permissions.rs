use droidcheck_types::PermissionOutcome;

/// Look up each required identifier as a literal substring of the manifest.
///
/// Outcomes come back in `required` order and are independent of each other.
#[must_use]
pub fn scan_permissions<S: AsRef<str>>(
    manifest_text: &str,
    required: &[S],
) -> Vec<PermissionOutcome> {
    required
        .iter()
        .map(|permission| {
            let permission = permission.as_ref();
            PermissionOutcome {
                permission: permission.to_string(),
                present: manifest_text.contains(permission),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 3] = [
        "android.permission.INTERNET",
        "android.permission.FOREGROUND_SERVICE",
        "android.permission.WAKE_LOCK",
    ];

    #[test]
    fn each_identifier_is_checked_on_its_own() {
        let manifest = r#"<manifest>
    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="android.permission.WAKE_LOCK" />
</manifest>"#;

        let outcomes = scan_permissions(manifest, &REQUIRED);
        let present: Vec<_> = outcomes.iter().map(|o| o.present).collect();
        assert_eq!(present, [true, false, true]);
        assert_eq!(outcomes[1].permission, "android.permission.FOREGROUND_SERVICE");
    }

    #[test]
    fn match_is_textual_not_structural() {
        // Inside a comment still counts: no XML parsing happens
        let manifest = "<!-- android.permission.INTERNET -->";
        let outcomes = scan_permissions(manifest, &REQUIRED[..1]);
        assert!(outcomes[0].present);
    }

    #[test]
    fn longer_identifier_contains_shorter_one() {
        // FOREGROUND_SERVICE_DATA_SYNC carries FOREGROUND_SERVICE as a prefix
        let manifest = "android.permission.FOREGROUND_SERVICE_DATA_SYNC";
        let outcomes = scan_permissions(manifest, &REQUIRED);
        assert!(outcomes[1].present);
        assert!(!outcomes[0].present);
    }

    #[test]
    fn empty_manifest_misses_everything() {
        let outcomes = scan_permissions("", &REQUIRED);
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| !o.present));
    }
}
