//! Validating collected answers.

use super::error::{InitError, InitResult};
use crate::registry::validate_package_name;
use pl_protocol::answers::Answers;
use std::path::PathBuf;

/// Project directory used when none was given or prompting was cancelled.
pub const DEFAULT_PROJECT_DIR: &str = "./";

/// Answers after defaults and validation have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAnswers {
    pub project_dir: PathBuf,
    pub edition: Option<String>,
    pub starterkit: Option<String>,
}

/// Apply defaults to `answers` and validate them.
///
/// Blank values count as absent; a missing project directory becomes
/// [`DEFAULT_PROJECT_DIR`].
///
/// # Errors
///
/// - `InitError::InvalidProjectDir` if the directory is not valid UTF-8 or
///   contains a NUL byte
/// - `InitError::InvalidPackageId` if an edition or starterkit is not a valid
///   package name
pub fn validate_answers(answers: Answers) -> InitResult<ValidatedAnswers> {
    let answers = answers.normalized();

    let project_dir = answers
        .project_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_DIR));
    let Some(dir) = project_dir.to_str() else {
        return Err(InitError::InvalidProjectDir(format!(
            "{:?} is not valid UTF-8",
            project_dir
        )));
    };
    if dir.contains('\0') {
        return Err(InitError::InvalidProjectDir(format!(
            "{:?} contains a NUL byte",
            project_dir
        )));
    }

    for (field, id) in [("edition", &answers.edition), ("starterkit", &answers.starterkit)] {
        if let Some(id) = id {
            validate_package_name(id).map_err(|reason| InitError::InvalidPackageId {
                field,
                id: id.clone(),
                reason,
            })?;
        }
    }

    Ok(ValidatedAnswers {
        project_dir,
        edition: answers.edition,
        starterkit: answers.starterkit,
    })
}
