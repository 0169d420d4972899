//! Invocation options and collected answers.
//!
//! `InitOptions` is what a caller hands to the initializer. `Answers` is what
//! the pipeline actually works from: either the options themselves (when a
//! project directory was supplied) or the result of prompting the user.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use ts_rs::TS;

/// Options supplied by the caller of `init`.
///
/// Field names follow the camelCase shape used by the JavaScript tooling:
///
/// ```json
/// { "projectDir": "./demo", "edition": "@pattern-lab/edition-node" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    /// Target directory. When present, prompting is skipped entirely.
    #[serde(default)]
    #[ts(type = "string | null")]
    pub project_dir: Option<PathBuf>,

    /// Edition package to install.
    #[serde(default)]
    pub edition: Option<String>,

    /// Starterkit package to install.
    #[serde(default)]
    pub starterkit: Option<String>,
}

impl InitOptions {
    /// Options for a given project directory with no packages.
    pub fn for_project_dir(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: Some(project_dir.into()),
            ..Self::default()
        }
    }

    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    pub fn with_starterkit(mut self, starterkit: impl Into<String>) -> Self {
        self.starterkit = Some(starterkit.into());
        self
    }
}

/// Answers the pipeline runs from.
///
/// Optional packages are explicit `Option`s: an edition is requested if and
/// only if `edition.is_some()`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    #[serde(default)]
    #[ts(type = "string | null")]
    pub project_dir: Option<PathBuf>,

    #[serde(default)]
    pub edition: Option<String>,

    #[serde(default)]
    pub starterkit: Option<String>,
}

impl Answers {
    /// Drop blank package identifiers and blank project directories.
    ///
    /// `Some("")` and whitespace-only values mean "not requested".
    pub fn normalized(self) -> Self {
        Self {
            project_dir: self
                .project_dir
                .filter(|dir| !dir.as_os_str().to_string_lossy().trim().is_empty()),
            edition: non_blank(self.edition),
            starterkit: non_blank(self.starterkit),
        }
    }
}

impl From<InitOptions> for Answers {
    fn from(options: InitOptions) -> Self {
        Self {
            project_dir: options.project_dir,
            edition: options.edition,
            starterkit: options.starterkit,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
