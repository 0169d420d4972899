//! Error types for initialization runs.

use crate::registry::InstallError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for initialization operations.
pub type InitResult<T> = Result<T, InitError>;

/// Broad category of an [`InitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitErrorKind {
    /// Malformed answers; raised before any step runs.
    Validation,
    /// Scaffold or config write failure.
    Filesystem,
    /// Edition or starterkit resolution/installation failure.
    Install,
    /// The prompt collaborator could not collect answers.
    Prompt,
}

/// Errors that can occur during initialization.
#[derive(Debug, Error)]
pub enum InitError {
    /// The project directory cannot be used.
    #[error("Invalid project directory: {0}")]
    InvalidProjectDir(String),

    /// An edition or starterkit identifier is not a valid package name.
    #[error("Invalid {field} package '{id}': {reason}")]
    InvalidPackageId {
        field: &'static str,
        id: String,
        reason: String,
    },

    /// A path that must be a directory exists as something else.
    #[error("{0:?} exists and is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the configuration.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An edition or starterkit could not be installed.
    #[error(transparent)]
    Install(#[from] InstallError),

    /// Answers could not be collected.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl InitError {
    pub fn kind(&self) -> InitErrorKind {
        match self {
            InitError::InvalidProjectDir(_) | InitError::InvalidPackageId { .. } => {
                InitErrorKind::Validation
            }
            InitError::NotADirectory(_)
            | InitError::DirectoryCreate { .. }
            | InitError::FileWrite { .. }
            | InitError::Serialize(_) => InitErrorKind::Filesystem,
            InitError::Install(_) => InitErrorKind::Install,
            InitError::Prompt(_) => InitErrorKind::Prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            InitError::InvalidProjectDir("nul byte".to_string()).kind(),
            InitErrorKind::Validation
        );
        assert_eq!(
            InitError::NotADirectory(PathBuf::from("demo")).kind(),
            InitErrorKind::Filesystem
        );
        assert_eq!(
            InitError::from(InstallError::NotFound("edition-x".to_string())).kind(),
            InitErrorKind::Install
        );
        assert_eq!(
            InitError::Prompt("closed".to_string()).kind(),
            InitErrorKind::Prompt
        );
    }

    #[test]
    fn test_install_error_message_is_forwarded() {
        let inner = InstallError::NotFound("edition-x".to_string());
        let message = inner.to_string();
        assert_eq!(InitError::from(inner).to_string(), message);
    }
}
