//! Default Pattern Lab configuration.
//!
//! The baseline `patternlab-config.json` is embedded into the binary with
//! `rust-embed` from the workspace `templates/` directory. Callers load it once
//! at process start and pass it to the orchestrator; it is never looked up
//! through global state during a run.

use super::error::{ConfigError, ConfigResult};
use pl_protocol::config_models::{ProjectConfig, CONFIG_FILE_NAME, PATHS_KEY};
use rust_embed::RustEmbed;
use serde_json::Value;
use std::path::Path;

/// Embedded template files from the `templates/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = workspace `templates/`
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get embedded template content by path.
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// Load the default configuration.
///
/// With `override_path` set, the file at that path is used instead of the
/// embedded `patternlab-config.json`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, is not valid JSON, is not
/// a JSON object, or has no `paths` object.
///
/// # Example
///
/// ```
/// use pl_core::config::defaults::load_default_config;
///
/// let defaults = load_default_config(None).expect("embedded defaults");
/// assert_eq!(defaults.source_root(), Some("./source/"));
/// ```
pub fn load_default_config(override_path: Option<&Path>) -> ConfigResult<ProjectConfig> {
    match override_path {
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            parse_default_config(&content, &path.display().to_string())
        }
        None => {
            let content = get_template(CONFIG_FILE_NAME)
                .ok_or_else(|| ConfigError::TemplateNotFound(CONFIG_FILE_NAME.to_string()))?;
            parse_default_config(&content, "embedded defaults")
        }
    }
}

/// Parse and validate a default configuration document.
pub fn parse_default_config(content: &str, origin: &str) -> ConfigResult<ProjectConfig> {
    let value: Value = serde_json::from_str(content).map_err(|source| ConfigError::JsonParse {
        origin: origin.to_string(),
        source,
    })?;

    let config = ProjectConfig::from_value(value).ok_or_else(|| ConfigError::InvalidConfig {
        origin: origin.to_string(),
        reason: "top-level value must be a JSON object".to_string(),
    })?;

    if !config.get(PATHS_KEY).is_some_and(Value::is_object) {
        return Err(ConfigError::InvalidConfig {
            origin: origin.to_string(),
            reason: format!("missing `{PATHS_KEY}` object"),
        });
    }

    Ok(config)
}
