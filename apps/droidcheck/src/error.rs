//! CLI error handling

use std::fmt;

use droidcheck_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration or verification error
    Verify(droidcheck_errors::Error),
    /// I/O error while writing output
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Verify(e) => {
                let message = e.user_message();
                write!(f, "{message}")?;
                if let Some(code) = e.user_code() {
                    write!(f, "\n  Code: {code}")?;
                }
                if let Some(hint) = e.user_hint() {
                    write!(f, "\n  Hint: {hint}")?;
                }
                Ok(())
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl CliError {
    /// One-line JSON form for stderr in `--json` mode
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CliError::Verify(e) => serde_json::json!({
                "error": e.user_message(),
                "code": e.user_code(),
                "hint": e.user_hint(),
            }),
            CliError::Io(e) => serde_json::json!({
                "error": format!("I/O error: {e}"),
                "code": null,
                "hint": null,
            }),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Verify(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<droidcheck_errors::Error> for CliError {
    fn from(e: droidcheck_errors::Error) -> Self {
        CliError::Verify(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
