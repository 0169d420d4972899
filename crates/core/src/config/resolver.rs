//! Rooting default configuration paths at a project directory.
//!
//! The default configuration describes a project living in the current
//! directory (`./source/`, `./public/`, ...). Before anything is written, every
//! path-bearing field is rewritten to live under the chosen project directory
//! and directory names.

use pl_protocol::config_models::{
    DirectoryLayout, ProjectConfig, EXPORT_DIRECTORY_KEY, PATHS_KEY,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Rewrite every path-bearing field of `default_config` under `project_dir`.
///
/// - strings under `paths.source` (at any depth) move under `project_dir/source_dir`
/// - strings under `paths.public` (at any depth) move under `project_dir/public_dir`
/// - `patternExportDirectory` becomes `project_dir/export_dir`
///
/// The part of each default value after a leading `./` and the default group
/// directory (`source/`, `public/`) is kept, so `./source/_patterns/` becomes
/// `<project_dir>/<source_dir>/_patterns/`. Trailing slashes are preserved and
/// joined paths are lexically normalized. Values that are neither strings nor
/// objects are left untouched.
///
/// `default_config` is not modified.
///
/// # Example
///
/// ```
/// use pl_core::config::resolver::resolve_config_paths;
/// use pl_protocol::config_models::ProjectConfig;
/// use serde_json::json;
/// use std::path::Path;
///
/// let defaults = ProjectConfig::from_value(json!({
///     "paths": { "source": { "root": "./source/" }, "public": {} },
///     "patternExportDirectory": "./pattern_exports/"
/// })).unwrap();
///
/// let config = resolve_config_paths(&defaults, Path::new("./demo"), "source", "public", "pattern_exports");
/// assert_eq!(config.source_root(), Some("./demo/source/"));
/// ```
pub fn resolve_config_paths(
    default_config: &ProjectConfig,
    project_dir: &Path,
    source_dir: &str,
    public_dir: &str,
    export_dir: &str,
) -> ProjectConfig {
    let mut config = default_config.clone();
    let project_dir = normalize(project_dir);

    if let Some(Value::Object(paths)) = config.get_mut(PATHS_KEY) {
        for (group, dir_name) in [("source", source_dir), ("public", public_dir)] {
            if let Some(value) = paths.get_mut(group) {
                reroot(value, &project_dir.join(dir_name), group);
            }
        }
    }

    let trailing_slash = config
        .get(EXPORT_DIRECTORY_KEY)
        .and_then(Value::as_str)
        .map_or(true, |dir| dir.ends_with('/'));
    config.insert(
        EXPORT_DIRECTORY_KEY,
        Value::String(render(&project_dir.join(export_dir), trailing_slash)),
    );

    config
}

/// [`resolve_config_paths`] with the directory names taken from a layout.
pub fn resolve_with_layout(
    default_config: &ProjectConfig,
    project_dir: &Path,
    layout: &DirectoryLayout,
) -> ProjectConfig {
    resolve_config_paths(
        default_config,
        project_dir,
        &layout.source_dir,
        &layout.public_dir,
        &layout.export_dir,
    )
}

fn reroot(value: &mut Value, base: &Path, default_dir: &str) {
    match value {
        Value::String(path) => {
            let rest = remainder(path, default_dir);
            let rooted = render(&base.join(rest), path.ends_with('/'));
            *path = rooted;
        }
        Value::Object(map) => {
            for child in map.values_mut() {
                reroot(child, base, default_dir);
            }
        }
        _ => {}
    }
}

/// The part of a default path below its group directory.
fn remainder<'a>(value: &'a str, default_dir: &str) -> &'a str {
    let mut rest = value;
    loop {
        let next = rest.trim_start_matches('/');
        let next = next.strip_prefix("./").unwrap_or(next);
        if next == rest {
            break;
        }
        rest = next;
    }
    if rest == "." {
        return "";
    }
    match rest.strip_prefix(default_dir) {
        Some("") => "",
        Some(after) if after.starts_with('/') => after.trim_start_matches('/'),
        _ => rest,
    }
}

/// Drop empty segments and interior `.` components.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

fn render(path: &Path, trailing_slash: bool) -> String {
    let mut rendered = normalize(path).to_string_lossy().into_owned();
    if trailing_slash && !rendered.ends_with(std::path::MAIN_SEPARATOR) {
        rendered.push(std::path::MAIN_SEPARATOR);
    }
    rendered
}
