//! Development entry-point bootstrapper
//!
//! Wrapper around the project's TypeScript development CLI. The tsx runner
//! caches transpiled modules under ~/.tsx, which can serve stale code after
//! an edit; clearing it before every launch guarantees the dev loop always
//! runs the latest sources.

use crate::{Result, StagehandError};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Development entry point, relative to the project root
pub const ENTRY_POINT: &str = "tools/cli/develop.ts";

/// Location of the tsx transpile cache
pub fn runner_cache_dir() -> PathBuf {
    let mut dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push(".tsx");
    dir
}

/// Best-effort removal of the runner cache
///
/// A failed removal only means the next launch may reuse cached modules,
/// so errors are logged and otherwise ignored.
pub fn clear_runner_cache(dir: &Path) {
    if !dir.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_dir_all(dir) {
        tracing::debug!(path = %dir.display(), error = %e, "Failed to clear runner cache");
    }
}

/// Launch the development entry point with inherited stdio
///
/// Returns the child's exit code; a child killed by a signal reports 1.
pub fn run_entry_point(project_root: &Path) -> Result<i32> {
    let entry = project_root.join(ENTRY_POINT);

    tracing::info!(entry = %entry.display(), "Launching development entry point");

    let status = Command::new("npx")
        .arg("tsx")
        .arg(&entry)
        .current_dir(project_root)
        .status()
        .map_err(|e| {
            StagehandError::Develop(format!(
                "Failed to launch development entry point {}: {}",
                entry.display(),
                e
            ))
        })?;

    Ok(status.code().unwrap_or(1))
}

/// Clear the runner cache, then launch the entry point
pub fn run(project_root: &Path) -> Result<i32> {
    clear_runner_cache(&runner_cache_dir());
    run_entry_point(project_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clear_runner_cache_removes_dir() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_dir.path().join(".tsx");
        std::fs::create_dir(&cache).unwrap();
        std::fs::write(cache.join("module.js"), "cached").unwrap();

        clear_runner_cache(&cache);
        assert!(!cache.exists());
    }

    #[test]
    fn test_clear_runner_cache_missing_dir_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let cache = temp_dir.path().join("does-not-exist");

        // Must not panic or error
        clear_runner_cache(&cache);
        assert!(!cache.exists());
    }

    #[test]
    fn test_runner_cache_dir_under_home() {
        let dir = runner_cache_dir();
        assert!(dir.ends_with(".tsx"));
    }
}
