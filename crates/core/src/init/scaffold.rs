//! Directory skeleton for a new project.

use super::error::{InitError, InitResult};
use std::path::Path;

/// Create `project_dir` and its source, public and export directories.
///
/// Idempotent: directories that already exist are left alone.
///
/// # Errors
///
/// - `InitError::NotADirectory` if `project_dir` or one of the layout
///   directories exists as a file
/// - `InitError::DirectoryCreate` if the filesystem refuses the creation
///
/// # Example
/// ```no_run
/// use pl_core::init::scaffold::scaffold;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// scaffold(Path::new("./demo"), "source", "public", "pattern_exports").await?;
/// # Ok(())
/// # }
/// ```
pub async fn scaffold(
    project_dir: &Path,
    source_dir: &str,
    public_dir: &str,
    export_dir: &str,
) -> InitResult<()> {
    ensure_dir(project_dir).await?;
    for name in [source_dir, public_dir, export_dir] {
        ensure_dir(&project_dir.join(name)).await?;
    }
    Ok(())
}

async fn ensure_dir(path: &Path) -> InitResult<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => return Ok(()),
        Ok(_) => return Err(InitError::NotADirectory(path.to_path_buf())),
        Err(_) => {}
    }

    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| InitError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_scaffold_creates_layout() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("demo");

        scaffold(&project, "source", "public", "pattern_exports")
            .await
            .unwrap();

        assert!(project.join("source").is_dir());
        assert!(project.join("public").is_dir());
        assert!(project.join("pattern_exports").is_dir());
    }

    #[tokio::test]
    async fn test_scaffold_is_idempotent() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("demo");

        scaffold(&project, "source", "public", "pattern_exports")
            .await
            .unwrap();
        fs::write(project.join("source").join("keep.txt"), "user file").unwrap();
        let first = entries(&project);

        scaffold(&project, "source", "public", "pattern_exports")
            .await
            .expect("second scaffold should succeed");

        assert_eq!(entries(&project), first);
        assert!(project.join("source/keep.txt").is_file());
    }

    #[tokio::test]
    async fn test_scaffold_project_dir_is_file() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("demo");
        fs::write(&project, "not a directory").unwrap();

        let result = scaffold(&project, "source", "public", "pattern_exports").await;

        assert!(matches!(result, Err(InitError::NotADirectory(path)) if path == project));
    }

    #[tokio::test]
    async fn test_scaffold_subdirectory_is_file() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("demo");
        fs::create_dir_all(&project).unwrap();
        fs::write(project.join("public"), "oops").unwrap();

        let result = scaffold(&project, "source", "public", "pattern_exports").await;

        assert!(matches!(result, Err(InitError::NotADirectory(_))));
        assert!(project.join("source").is_dir(), "earlier directories stay in place");
        assert!(!project.join("pattern_exports").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_scaffold_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        // Root ignores directory permissions; nothing to assert there.
        if fs::write(locked.join("probe"), "").is_ok() {
            return;
        }

        let result = scaffold(&locked.join("demo"), "source", "public", "pattern_exports").await;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(InitError::DirectoryCreate { .. })));
    }
}
