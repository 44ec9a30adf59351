use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Create the directory if it doesn’t exist; error if a non-directory exists there.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            bail!("Path exists but is not a directory: {}", path.display());
        }
    } else {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }
    Ok(())
}

/// Error unless the directory already exists.
pub fn require_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("Path exists but is not a directory: {}", path.display());
    }
    Ok(())
}

/// Refuse to reuse a non-empty output directory unless forced.
pub fn check_output_dir(path: &Path, force: bool) -> Result<()> {
    let occupied = path.is_dir() && fs::read_dir(path)
        .with_context(|| format!("Failed to list {}", path.display()))?
        .next()
        .is_some();
    if occupied && !force {
        bail!("Refusing to write into non-empty directory: {} (use --force)", path.display());
    }
    ensure_dir_exists(path)
}
