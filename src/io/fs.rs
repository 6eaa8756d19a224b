use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Create the parent directory of `path` if it doesn't exist; error if a non-directory is in the way.
pub fn ensure_parent_dir_exists(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) else { return Ok(()) };
    if parent.exists() {
        if !parent.is_dir() {
            bail!("Path exists but is not a directory: {}", parent.display());
        }
    } else {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Error if `path` already exists, unless `force` is set.
pub fn require_writable(path: &Path, force: bool) -> Result<()> {
    if path.is_dir() {
        bail!("Output path is a directory: {}", path.display());
    }
    if path.exists() && !force {
        bail!("Output file already exists (use --force to overwrite): {}", path.display());
    }
    Ok(())
}
