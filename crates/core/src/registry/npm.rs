//! npm-backed package registry.
//!
//! Editions and starterkits are ordinary npm packages. Installing one runs
//! `npm install --save <id>` inside the project directory and then copies the
//! package's files into place.

use crate::registry::base::{InstallContext, InstallError, PackageRegistry};
use crate::registry::command::{CommandOutput, CommandRunner};
use crate::registry::package::installed_package_dir;
use async_trait::async_trait;
use pl_protocol::config_models::{ProjectConfig, CONFIG_FILE_NAME, EXPORT_DIRECTORY_KEY, PATHS_KEY};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio_stream::StreamExt;
use walkdir::WalkDir;

/// Number of stderr lines kept in an `InstallFailed` reason.
const STDERR_TAIL_LINES: usize = 8;

/// Keys an edition may not override: they describe the project layout.
const LAYOUT_KEYS: [&str; 2] = [PATHS_KEY, EXPORT_DIRECTORY_KEY];

/// Directory inside a starterkit holding the files copied to the source dir.
const STARTERKIT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct NpmRegistry {
    command: String,
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NpmRegistry {
    pub fn new() -> Self {
        Self {
            command: "npm".to_string(),
        }
    }

    /// Use a different executable (a path or a name on `PATH`).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Install `id` into `project_dir/node_modules` and return its directory.
    async fn install_package(&self, id: &str, project_dir: &Path) -> Result<PathBuf, InstallError> {
        let executable = which::which(&self.command).map_err(|e| {
            InstallError::RegistryUnavailable(format!("'{}' not found: {}", self.command, e))
        })?;

        ensure_manifest(id, project_dir).await?;

        tracing::info!(package = id, dir = %project_dir.display(), "running {} install", self.command);
        let mut stream = CommandRunner::execute(
            executable.to_string_lossy().into_owned(),
            vec!["install".to_string(), "--save".to_string(), id.to_string()],
            project_dir.to_path_buf(),
        );

        let mut exit = None;
        while let Some(output) = stream.next().await {
            match output? {
                CommandOutput::Line(line) => tracing::debug!(package = id, "{}", line),
                exited @ CommandOutput::Exited { .. } => exit = Some(exited),
            }
        }

        match exit {
            Some(CommandOutput::Exited { code: Some(0), .. }) => {}
            Some(CommandOutput::Exited { code, stderr }) => {
                return Err(classify_failure(id, code, &stderr));
            }
            _ => {
                return Err(InstallError::InstallFailed {
                    package: id.to_string(),
                    reason: "package manager exited without a status".to_string(),
                });
            }
        }

        let package_dir = installed_package_dir(project_dir, id);
        if !package_dir.is_dir() {
            return Err(InstallError::NotFound(id.to_string()));
        }
        Ok(package_dir)
    }
}

#[async_trait]
impl PackageRegistry for NpmRegistry {
    async fn install_edition(
        &self,
        edition: &str,
        ctx: InstallContext<'_>,
    ) -> Result<ProjectConfig, InstallError> {
        let package_dir = self.install_package(edition, ctx.project_dir).await?;

        let meta_dir = package_dir.join("source").join("_meta");
        if meta_dir.is_dir() {
            let source_dir = require_source_dir(edition, &ctx)?;
            copy_tree(edition, &meta_dir, &source_dir.join("_meta")).await?;
        }

        let gulpfile = package_dir.join("gulpfile.js");
        if gulpfile.is_file() {
            tokio::fs::copy(&gulpfile, ctx.project_dir.join("gulpfile.js"))
                .await
                .map_err(|e| InstallError::Copy {
                    package: edition.to_string(),
                    reason: format!("gulpfile.js: {e}"),
                })?;
        }

        edition_fragment(edition, &package_dir).await
    }

    async fn install_starterkit(
        &self,
        starterkit: &str,
        ctx: InstallContext<'_>,
    ) -> Result<(), InstallError> {
        let package_dir = self.install_package(starterkit, ctx.project_dir).await?;

        let dist = package_dir.join(STARTERKIT_DIST_DIR);
        if !dist.is_dir() {
            return Err(InstallError::InvalidPackage {
                package: starterkit.to_string(),
                reason: format!("no {STARTERKIT_DIST_DIR}/ directory"),
            });
        }

        let source_dir = require_source_dir(starterkit, &ctx)?;
        copy_tree(starterkit, &dist, source_dir).await
    }
}

fn require_source_dir<'a>(package: &str, ctx: &InstallContext<'a>) -> Result<&'a Path, InstallError> {
    ctx.source_dir().ok_or_else(|| InstallError::InvalidPackage {
        package: package.to_string(),
        reason: "configuration has no paths.source.root".to_string(),
    })
}

/// Read the edition's own `patternlab-config.json`, minus layout keys.
async fn edition_fragment(edition: &str, package_dir: &Path) -> Result<ProjectConfig, InstallError> {
    let path = package_dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ProjectConfig::new());
    }

    let invalid = |reason: String| InstallError::InvalidPackage {
        package: edition.to_string(),
        reason,
    };
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| invalid(format!("cannot read {CONFIG_FILE_NAME}: {e}")))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| invalid(format!("cannot parse {CONFIG_FILE_NAME}: {e}")))?;
    let mut fragment = ProjectConfig::from_value(value)
        .ok_or_else(|| invalid(format!("{CONFIG_FILE_NAME} is not a JSON object")))?;

    for key in LAYOUT_KEYS {
        fragment.remove(key);
    }
    Ok(fragment)
}

#[derive(Serialize)]
struct Manifest {
    name: String,
    version: &'static str,
    private: bool,
}

/// Write a minimal `package.json` so npm installs into this directory.
async fn ensure_manifest(package: &str, project_dir: &Path) -> Result<(), InstallError> {
    let path = project_dir.join("package.json");
    if path.exists() {
        return Ok(());
    }

    let manifest = Manifest {
        name: manifest_name(project_dir),
        version: "0.0.0",
        private: true,
    };
    let failed = |reason: String| InstallError::InstallFailed {
        package: package.to_string(),
        reason,
    };
    let content = serde_json::to_string_pretty(&manifest)
        .map_err(|e| failed(format!("cannot encode package.json: {e}")))?;
    tokio::fs::write(&path, content + "\n")
        .await
        .map_err(|e| failed(format!("cannot write package.json: {e}")))
}

fn manifest_name(project_dir: &Path) -> String {
    let raw = std::fs::canonicalize(project_dir)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();
    let name: String = raw
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect();
    let name = name.trim_matches('-');
    if name.is_empty() {
        "patternlab-project".to_string()
    } else {
        name.to_string()
    }
}

fn classify_failure(package: &str, code: Option<i32>, stderr: &str) -> InstallError {
    if stderr.contains("E404") || stderr.contains("404 Not Found") {
        return InstallError::NotFound(package.to_string());
    }

    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");
    let status = code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));
    InstallError::InstallFailed {
        package: package.to_string(),
        reason: if tail.is_empty() {
            status
        } else {
            format!("{status}: {tail}")
        },
    }
}

/// Recursively copy `from` into `to`, overwriting existing files.
async fn copy_tree(package: &str, from: &Path, to: &Path) -> Result<(), InstallError> {
    let package = package.to_string();
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || copy_tree_blocking(&from, &to))
        .await
        .map_err(|e| e.to_string())
        .and_then(|r| r)
        .map_err(|reason| InstallError::Copy { package, reason })
}

fn copy_tree_blocking(from: &Path, to: &Path) -> Result<(), String> {
    for entry in WalkDir::new(from).min_depth(1) {
        let entry = entry.map_err(|e| e.to_string())?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| e.to_string())?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| format!("{}: {e}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| format!("{}: {e}", parent.display()))?;
            }
            std::fs::copy(entry.path(), &target).map_err(|e| format!("{}: {e}", target.display()))?;
        }
    }
    Ok(())
}
