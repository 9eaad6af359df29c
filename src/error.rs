use std::fmt;
use std::path::PathBuf;

/// Failures that stop a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A required external tool could not be run.
    DependencyMissing { tool: String, hint: String },
    /// `--spec` was requested but the spec file does not exist.
    SpecFileMissing(PathBuf),
    /// The packaging tool ran and reported failure.
    BuildFailed { code: Option<i32> },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::DependencyMissing { tool, hint } => {
                write!(f, "{} is not installed. Install it with: {}", tool, hint)
            }
            BuildError::SpecFileMissing(path) => {
                write!(f, "Spec file not found: {}", path.display())
            }
            BuildError::BuildFailed { code: Some(code) } => {
                write!(f, "Packaging failed: pyinstaller exited with code {}", code)
            }
            BuildError::BuildFailed { code: None } => {
                write!(f, "Packaging failed: pyinstaller was terminated by a signal")
            }
        }
    }
}

impl std::error::Error for BuildError {}
