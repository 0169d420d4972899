//! Package identifier rules.

use std::path::{Path, PathBuf};

const MAX_NAME_LENGTH: usize = 214;

/// Check that `id` is a usable npm package name.
///
/// Accepts `name` and `@scope/name`. Returns the reason on rejection.
pub fn validate_package_name(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("name is empty".to_string());
    }
    if id.len() > MAX_NAME_LENGTH {
        return Err(format!("name is longer than {MAX_NAME_LENGTH} characters"));
    }
    if id.chars().any(char::is_whitespace) {
        return Err("name contains whitespace".to_string());
    }

    let name = match id.strip_prefix('@') {
        Some(scoped) => {
            let (scope, name) = scoped
                .split_once('/')
                .ok_or_else(|| "scoped name must look like @scope/name".to_string())?;
            if scope.is_empty() || name.is_empty() || name.contains('/') {
                return Err("scoped name must look like @scope/name".to_string());
            }
            check_segment(scope)?;
            name
        }
        None => {
            if id.contains('/') {
                return Err("unscoped name cannot contain '/'".to_string());
            }
            id
        }
    };

    check_segment(name)
}

fn check_segment(segment: &str) -> Result<(), String> {
    if segment.starts_with('.') || segment.starts_with('_') {
        return Err("name cannot start with '.' or '_'".to_string());
    }
    if segment.contains('\\') || segment.contains(':') {
        return Err("name contains a path character".to_string());
    }
    Ok(())
}

/// Where a package lands inside `node_modules`.
pub fn installed_package_dir(project_dir: &Path, id: &str) -> PathBuf {
    id.split('/')
        .fold(project_dir.join("node_modules"), |dir, segment| dir.join(segment))
}
