//! Filesystem probes: existence checks and the source-file walk

use droidcheck_types::PathKind;
use std::path::Path;
use walkdir::WalkDir;

/// Test whether `path` exists as the given kind.
///
/// Symlinks are followed. A missing path, or one of the other kind, is a
/// plain `false`.
#[must_use]
pub fn check_path_exists(path: &Path, kind: PathKind) -> bool {
    match kind {
        PathKind::Directory => path.is_dir(),
        PathKind::File => path.is_file(),
    }
}

/// Result of walking the source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceWalk {
    pub count: usize,
    /// Entries that could not be read, as display strings
    pub skipped: Vec<String>,
}

/// Count non-directory entries under `tree` whose name ends with `.{extension}`.
///
/// The tree root itself is never counted, and a missing tree counts zero.
/// Directory symlinks are not descended into.
#[must_use]
pub fn count_source_files(tree: &Path, extension: &str) -> SourceWalk {
    let mut walk = SourceWalk::default();
    if !tree.is_dir() {
        return walk;
    }

    let suffix = format!(".{extension}");
    for entry in WalkDir::new(tree).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                walk.skipped.push(e.to_string());
                continue;
            }
        };

        let is_dir = entry.file_type().is_dir()
            || (entry.path_is_symlink() && entry.path().is_dir());
        if is_dir {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            walk.count += 1;
        }
    }

    walk
}
