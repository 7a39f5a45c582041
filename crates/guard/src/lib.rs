#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Project verification guard
//!
//! Probes a project tree for its expected directories and files, counts
//! source files and scans the manifest for required permissions. Results are
//! returned as a `VerificationReport` and streamed as `GuardEvent`s; nothing
//! here writes to stdout or to the inspected tree.

mod permissions;
mod probe;
mod verifier;

pub use permissions::scan_permissions;
pub use probe::{check_path_exists, count_source_files, SourceWalk};
pub use verifier::Verifier;
