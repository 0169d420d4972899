//! Base PackageRegistry trait and supporting types.

use async_trait::async_trait;
use pl_protocol::config_models::ProjectConfig;
use std::path::Path;
use thiserror::Error;

/// Context handed to installers.
///
/// Installers only borrow the configuration; they never keep it.
#[derive(Debug, Clone, Copy)]
pub struct InstallContext<'a> {
    /// The project directory being initialized.
    pub project_dir: &'a Path,

    /// The configuration as it stands when the installer runs.
    pub config: &'a ProjectConfig,
}

impl<'a> InstallContext<'a> {
    pub fn new(project_dir: &'a Path, config: &'a ProjectConfig) -> Self {
        Self {
            project_dir,
            config,
        }
    }

    /// The source directory files are installed into.
    ///
    /// Uses `paths.source.root` from the configuration, which is already
    /// rooted at the project directory.
    pub fn source_dir(&self) -> Option<&'a Path> {
        self.config.source_root().map(Path::new)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    #[error("Package not found: {0}")]
    NotFound(String),
    #[error("Package registry not available: {0}")]
    RegistryUnavailable(String),
    #[error("Failed to install {package}: {reason}")]
    InstallFailed { package: String, reason: String },
    #[error("Invalid package {package}: {reason}")]
    InvalidPackage { package: String, reason: String },
    #[error("Failed to copy files from {package}: {reason}")]
    Copy { package: String, reason: String },
}

/// Resolves and installs edition and starterkit packages.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Install an edition and return the configuration fragment it contributes.
    async fn install_edition(
        &self,
        edition: &str,
        ctx: InstallContext<'_>,
    ) -> Result<ProjectConfig, InstallError>;

    /// Install a starterkit, copying its files into the source directory.
    async fn install_starterkit(
        &self,
        starterkit: &str,
        ctx: InstallContext<'_>,
    ) -> Result<(), InstallError>;
}
