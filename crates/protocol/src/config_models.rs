//! Project configuration models for `patternlab-config.json`.
//!
//! The configuration consumed by the pattern-library engine is an open JSON
//! object. Only a handful of keys matter to the initializer (the path groups
//! and the export directory); everything else is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use ts_rs::TS;

/// File name of the persisted configuration inside the project directory.
pub const CONFIG_FILE_NAME: &str = "patternlab-config.json";

/// Top-level key holding the `source` and `public` path groups.
pub const PATHS_KEY: &str = "paths";

/// Path groups under `paths` whose string leaves are project paths.
pub const PATH_GROUPS: [&str; 2] = ["source", "public"];

/// Top-level key holding the pattern export directory.
pub const EXPORT_DIRECTORY_KEY: &str = "patternExportDirectory";

/// The mapping of settings persisted to drive the pattern-library engine.
///
/// Serializes transparently as a JSON object.
///
/// # Example
///
/// ```
/// use pl_protocol::config_models::ProjectConfig;
/// use serde_json::json;
///
/// let mut config = ProjectConfig::from_value(json!({ "engine": "mustache" })).unwrap();
/// config.merge(ProjectConfig::from_value(json!({ "engine": "handlebars" })).unwrap());
/// assert_eq!(config.get("engine"), Some(&json!("handlebars")));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ProjectConfig(Map<String, Value>);

impl ProjectConfig {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value, or `None` if it is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge a fragment into this configuration.
    ///
    /// Shallow, last-writer-wins: a top-level key present in `fragment`
    /// replaces the existing value wholesale, nested objects included.
    pub fn merge(&mut self, fragment: ProjectConfig) {
        for (key, value) in fragment.0 {
            self.0.insert(key, value);
        }
    }

    /// Look up a nested value by a `/`-separated key path (`"paths/source/root"`).
    pub fn lookup(&self, key_path: &str) -> Option<&Value> {
        let mut segments = key_path.split('/').filter(|s| !s.is_empty());
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// The `paths.source.root` directory, if configured.
    pub fn source_root(&self) -> Option<&str> {
        self.lookup("paths/source/root").and_then(Value::as_str)
    }

    /// Every path-bearing string with its dotted key.
    ///
    /// Covers all string leaves under `paths.source` and `paths.public`, and
    /// `patternExportDirectory`.
    pub fn path_values(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for group in PATH_GROUPS {
            if let Some(value) = self.lookup(&format!("{PATHS_KEY}/{group}")) {
                collect_strings(value, format!("{PATHS_KEY}.{group}"), &mut out);
            }
        }
        if let Some(Value::String(dir)) = self.0.get(EXPORT_DIRECTORY_KEY) {
            out.push((EXPORT_DIRECTORY_KEY.to_string(), dir.clone()));
        }
        out
    }
}

impl From<ProjectConfig> for Value {
    fn from(config: ProjectConfig) -> Self {
        Value::Object(config.0)
    }
}

fn collect_strings(value: &Value, key: String, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(s) => out.push((key, s.clone())),
        Value::Object(map) => {
            for (child, v) in map {
                collect_strings(v, format!("{key}.{child}"), out);
            }
        }
        _ => {}
    }
}

/// Names of the three directories created inside a project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLayout {
    pub source_dir: String,
    pub public_dir: String,
    pub export_dir: String,
}

impl Default for DirectoryLayout {
    fn default() -> Self {
        Self {
            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            export_dir: "pattern_exports".to_string(),
        }
    }
}

impl DirectoryLayout {
    /// Resolve the layout against a project directory.
    pub fn resolve(&self, project_dir: &Path) -> ResolvedLayout {
        ResolvedLayout {
            project_dir: project_dir.to_path_buf(),
            source: project_dir.join(&self.source_dir),
            public: project_dir.join(&self.public_dir),
            export: project_dir.join(&self.export_dir),
        }
    }
}

/// A `DirectoryLayout` joined onto a concrete project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub project_dir: PathBuf,
    pub source: PathBuf,
    pub public: PathBuf,
    pub export: PathBuf,
}

impl ResolvedLayout {
    /// Location of `patternlab-config.json`.
    pub fn config_file(&self) -> PathBuf {
        self.project_dir.join(CONFIG_FILE_NAME)
    }
}
