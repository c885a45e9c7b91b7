//! Unified diff between a rendered document and a file on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use immutable_auth_core::Manifest;
use immutable_auth_renderer::Renderer;

use crate::error::{io_err, SyncError};

/// Result of comparing the rendered document with `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDiff {
    pub path: PathBuf,
    /// `false` when the file does not exist.
    pub exists: bool,
    /// Empty when the file is up to date.
    pub unified_diff: String,
}

impl DocumentDiff {
    pub fn is_up_to_date(&self) -> bool {
        self.exists && self.unified_diff.is_empty()
    }
}

/// Render `manifest` and diff it against the current content of `path`.
///
/// No files are written.
pub fn diff_document(
    renderer: &Renderer,
    manifest: &Manifest,
    path: &Path,
) -> Result<DocumentDiff, SyncError> {
    let rendered = normalize_line_endings(&renderer.render(manifest)?);
    let existing = read_existing(path)?;
    let exists = existing.is_some();
    let existing = existing.unwrap_or_default();

    let unified_diff = if existing == rendered {
        String::new()
    } else {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&format!("a/{name}"), &format!("b/{name}"))
            .context_radius(3)
            .to_string()
    };

    Ok(DocumentDiff {
        path: path.to_path_buf(),
        exists,
        unified_diff,
    })
}

fn read_existing(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(normalize_line_endings(&content))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use immutable_auth_core::NameSaltPair;
    use tempfile::TempDir;

    use super::*;
    use crate::writer::write_document;

    #[test]
    fn no_diff_after_write() {
        let dir = TempDir::new().expect("tempdir");
        let target = dir.path().join("ImmutableAuth.sol");
        let renderer = Renderer::new().expect("renderer");
        let manifest = Manifest::bundled();
        write_document(&renderer, &manifest, &target).expect("write");

        let diff = diff_document(&renderer, &manifest, &target).expect("diff");
        assert!(diff.is_up_to_date());
    }

    #[test]
    fn crlf_checkout_is_not_a_diff() {
        let dir = TempDir::new().expect("tempdir");
        let target = dir.path().join("ImmutableAuth.sol");
        let renderer = Renderer::new().expect("renderer");
        let manifest = Manifest::bundled();
        let doc = renderer.render(&manifest).expect("render");
        fs::write(&target, doc.replace('\n', "\r\n")).expect("write");

        assert!(diff_document(&renderer, &manifest, &target)
            .expect("diff")
            .is_up_to_date());
    }

    #[test]
    fn new_contract_shows_as_added_lines() {
        let dir = TempDir::new().expect("tempdir");
        let target = dir.path().join("ImmutableAuth.sol");
        let renderer = Renderer::new().expect("renderer");
        let before = Manifest::new(vec![NameSaltPair::named("MadToken")]);
        write_document(&renderer, &before, &target).expect("write");

        let after = Manifest::new(vec![
            NameSaltPair::named("MadToken"),
            NameSaltPair::named("Lockup"),
        ]);
        let diff = diff_document(&renderer, &after, &target).expect("diff");
        assert!(!diff.is_up_to_date());
        assert!(diff.unified_diff.contains("--- a/ImmutableAuth.sol"));
        assert!(diff.unified_diff.contains("+++ b/ImmutableAuth.sol"));
        assert!(diff.unified_diff.contains("@@"));
        assert!(diff
            .unified_diff
            .contains("+abstract contract immutableLockup is immutableFactory {"));
    }

    #[test]
    fn missing_file_is_reported_as_not_existing() {
        let dir = TempDir::new().expect("tempdir");
        let diff = diff_document(
            &Renderer::new().expect("renderer"),
            &Manifest::bundled(),
            &dir.path().join("absent.sol"),
        )
        .expect("diff");
        assert!(!diff.exists);
        assert!(!diff.is_up_to_date());
        assert!(diff.unified_diff.contains("+pragma solidity"));
    }
}
