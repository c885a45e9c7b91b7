//! Atomic document writer.
//!
//! The document is rendered in full before anything touches the filesystem,
//! then written to `<path>.immutable-auth.tmp` and renamed over the target.
//! Files that differ from the rendered text only in line endings are left
//! alone.

use std::path::{Path, PathBuf};

use immutable_auth_core::Manifest;
use immutable_auth_renderer::Renderer;

use crate::error::{io_err, SyncError};

/// Outcome of writing the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File already held exactly the rendered content.
    Unchanged { path: PathBuf },
}

/// Render `manifest` and write it atomically to `path`.
pub fn write_document(
    renderer: &Renderer,
    manifest: &Manifest,
    path: &Path,
) -> Result<WriteResult, SyncError> {
    let content = renderer.render(manifest)?;
    atomic_write(path, &content)
}

/// Atomically replace `path` with `content`, skipping identical files.
pub fn atomic_write(path: &Path, content: &str) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.immutable-auth.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<WriteResult, SyncError> {
    let normalized = content.replace("\r\n", "\n");

    if let Ok(existing) = std::fs::read_to_string(path) {
        if existing.replace("\r\n", "\n") == normalized {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, &normalized).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}
