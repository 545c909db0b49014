use crate::shared::error::AlertViewError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum snapshot or config file size (32 MB)
pub const MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Checks that `path` is a regular file (not a symlink, not a directory)
/// no larger than `max_size`, and returns its size.
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
pub fn ensure_readable_file(path: &Path, description: &str, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AlertViewError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AlertViewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Pass the path of the real file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(AlertViewError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the snapshot or strip unused labels before rendering".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Rejects writes through an existing symbolic link.
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(AlertViewError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Write to a regular file path".to_string(),
        }
        .into()),
        // a missing file is fine, it will be created
        _ => Ok(()),
    }
}
