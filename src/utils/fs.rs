//! File system utilities for the dependency-copy step
//!
//! Thin wrappers over [`std::fs`] that attach path context to errors. All
//! operations are ordinary blocking calls; the plugin is single-threaded and
//! the host owns any higher-level cancellation of the build.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Ensures a directory exists, creating it and all parent directories if
/// necessary.
///
/// # Errors
///
/// Returns an error if the path exists but is not a directory, or creation
/// fails (permissions, invalid path).
///
/// # Examples
///
/// ```rust,no_run
/// use helpdeps::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("working/DLL"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!(
            "Path exists but is not a directory: {}",
            path.display()
        ));
    }
    Ok(())
}

/// Clears the read-only bit on a file, leaving other permissions intact.
///
/// Dependency copies must always end up writable so later build steps can
/// modify or delete them, even when the source assembly was read-only (as
/// files pulled from a package cache often are).
pub fn clear_readonly(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for: {}", path.display()))?;
    let mut permissions = metadata.permissions();
    if permissions.readonly() {
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions)
            .with_context(|| format!("Failed to reset attributes on: {}", path.display()))?;
    }
    Ok(())
}
