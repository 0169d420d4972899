//! Persisting `patternlab-config.json`.

use crate::init::error::{InitError, InitResult};
use pl_protocol::config_models::ProjectConfig;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `config` to `path` as pretty-printed JSON.
///
/// Any existing file is replaced wholesale. The content goes to a temporary
/// file in the same directory which is then persisted over `path`, so a
/// failure never leaves a truncated config behind.
///
/// # Errors
///
/// Returns `InitError::FileWrite` if the directory is not writable or the
/// rename fails, and `InitError::Serialize` if the config cannot be encoded.
pub async fn write_config(path: &Path, config: &ProjectConfig) -> InitResult<()> {
    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');

    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || persist(&target, content.as_bytes()))
        .await
        .map_err(|e| InitError::FileWrite {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?
}

fn persist(path: &Path, content: &[u8]) -> InitResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_write = |source| InitError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(file_write)?;
    tmp.write_all(content).map_err(file_write)?;
    tmp.as_file().sync_all().map_err(file_write)?;
    tmp.persist(path).map_err(|e| file_write(e.error))?;

    tracing::debug!(path = %path.display(), "wrote configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> ProjectConfig {
        ProjectConfig::from_value(json!({
            "engine": "mustache",
            "paths": { "source": { "root": "./demo/source/" } }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_write_config_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patternlab-config.json");

        write_config(&path, &sample()).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        assert!(content.contains("\n  \"engine\": \"mustache\""));

        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["paths"]["source"]["root"], "./demo/source/");
    }

    #[tokio::test]
    async fn test_write_config_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patternlab-config.json");
        fs::write(&path, r#"{ "stale": true, "engine": "twig" }"#).unwrap();

        write_config(&path, &sample()).await.unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["engine"], "mustache");
        assert!(value.get("stale").is_none(), "old keys must not survive");
    }

    #[tokio::test]
    async fn test_write_config_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("patternlab-config.json");

        let result = write_config(&path, &sample()).await;
        assert!(matches!(result, Err(InitError::FileWrite { .. })));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_write_config_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patternlab-config.json");

        write_config(&path, &sample()).await.unwrap();
        write_config(&path, &sample()).await.unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
