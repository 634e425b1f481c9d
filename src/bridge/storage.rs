//! Artifact persistence — the only true side-effecting call in the
//! bridge core.
//!
//! Writes go through tokio's fs so a large GIF does not block message
//! dispatch. The destination folder defaults to a `Photobooth`
//! subfolder of the user's video directory, created on first use.

use std::path::{Path, PathBuf};

/// Subfolder created under the user's media directory.
const DEFAULT_SUBFOLDER: &str = "Photobooth";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to create folder {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Default destination for saved GIFs: `<user videos>/Photobooth`.
///
/// Falls back to the home directory, then the working directory, on
/// platforms that report no video folder.
pub fn default_save_folder() -> PathBuf {
    dirs::video_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_SUBFOLDER)
}

/// Create `dir` and any missing parent segments.
pub fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir).map_err(|source| StorageError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write the complete byte sequence to `target`, overwriting any
/// existing file at that path. Creates the parent folder if absent.
/// Returns the path that was written.
pub async fn write_artifact(bytes: &[u8], target: &Path) -> Result<PathBuf, StorageError> {
    if let Some(parent) = target.parent() {
        ensure_dir(parent)?;
    }

    tokio::fs::write(target, bytes)
        .await
        .map_err(|source| StorageError::Write {
            path: target.to_path_buf(),
            source,
        })?;

    Ok(target.to_path_buf())
}
