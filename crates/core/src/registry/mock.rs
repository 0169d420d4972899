//! Mock registry implementation for testing.

use crate::registry::base::{InstallContext, InstallError, PackageRegistry};
use async_trait::async_trait;
use pl_protocol::config_models::ProjectConfig;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Which installer was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallKind {
    Edition,
    Starterkit,
}

/// A recorded installer call.
#[derive(Debug, Clone)]
pub struct InstallCall {
    pub kind: InstallKind,
    pub id: String,
    pub project_dir: PathBuf,
    /// The configuration as the installer saw it.
    pub config: ProjectConfig,
    /// Whether the source directory existed when the call was made.
    pub source_dir_existed: bool,
}

#[derive(Clone, Default)]
pub struct MockRegistry {
    edition_fragment: ProjectConfig,
    edition_error: Option<InstallError>,
    starterkit_error: Option<InstallError>,
    calls: Arc<Mutex<Vec<InstallCall>>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `fragment` from every edition install.
    pub fn with_edition_fragment(mut self, fragment: ProjectConfig) -> Self {
        self.edition_fragment = fragment;
        self
    }

    pub fn failing_edition(mut self, error: InstallError) -> Self {
        self.edition_error = Some(error);
        self
    }

    pub fn failing_starterkit(mut self, error: InstallError) -> Self {
        self.starterkit_error = Some(error);
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, kind: InstallKind, id: &str, ctx: &InstallContext<'_>) {
        let call = InstallCall {
            kind,
            id: id.to_string(),
            project_dir: ctx.project_dir.to_path_buf(),
            config: ctx.config.clone(),
            source_dir_existed: ctx.source_dir().is_some_and(|dir| dir.is_dir()),
        };
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl PackageRegistry for MockRegistry {
    async fn install_edition(
        &self,
        edition: &str,
        ctx: InstallContext<'_>,
    ) -> Result<ProjectConfig, InstallError> {
        self.record(InstallKind::Edition, edition, &ctx);
        match &self.edition_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.edition_fragment.clone()),
        }
    }

    async fn install_starterkit(
        &self,
        starterkit: &str,
        ctx: InstallContext<'_>,
    ) -> Result<(), InstallError> {
        self.record(InstallKind::Starterkit, starterkit, &ctx);
        match &self.starterkit_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    #[tokio::test]
    async fn test_mock_registry_records_calls() {
        let registry = MockRegistry::new()
            .with_edition_fragment(ProjectConfig::from_value(json!({ "engine": "mustache" })).unwrap());
        let config = ProjectConfig::new();
        let ctx = InstallContext::new(Path::new("./demo"), &config);

        let fragment = registry.install_edition("edition-node", ctx).await.unwrap();
        registry.install_starterkit("starterkit-demo", ctx).await.unwrap();

        assert_eq!(fragment.get("engine"), Some(&json!("mustache")));
        let calls = registry.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].kind, InstallKind::Edition);
        assert_eq!(calls[0].id, "edition-node");
        assert_eq!(calls[1].kind, InstallKind::Starterkit);
        assert!(!calls[1].source_dir_existed);
    }

    #[tokio::test]
    async fn test_mock_registry_failures() {
        let registry = MockRegistry::new()
            .failing_edition(InstallError::NotFound("edition-x".to_string()))
            .failing_starterkit(InstallError::NotFound("starterkit-x".to_string()));
        let config = ProjectConfig::new();
        let ctx = InstallContext::new(Path::new("./demo"), &config);

        assert!(registry.install_edition("edition-x", ctx).await.is_err());
        assert!(registry.install_starterkit("starterkit-x", ctx).await.is_err());
        assert_eq!(registry.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_call_log() {
        let registry = MockRegistry::new();
        let observer = registry.clone();
        let config = ProjectConfig::new();

        registry
            .install_starterkit("starterkit-demo", InstallContext::new(Path::new("."), &config))
            .await
            .unwrap();

        assert_eq!(observer.calls().len(), 1);
    }
}
