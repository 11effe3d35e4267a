//! Content file discovery by filesystem walking.
//!
//! The [`Scanner`] recursively enumerates markdown files under a content
//! root and returns their root-relative paths with forward-slash
//! separators, matching the path convention of navigation identifiers.
//! No file content is read.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of files treated as content.
const CONTENT_EXTENSION: &str = "md";

/// Content scanning error.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The content root does not exist or is not a directory.
    #[error("Content directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error while walking the tree.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discovers content files by walking the filesystem.
///
/// Entries are classified with `DirEntry::file_type`, which does not
/// follow symbolic links, so symlinked directories are never recursed and
/// link cycles cannot occur.
pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new scanner rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The content root this scanner walks.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the content root and return every markdown file's relative
    /// path, forward-slash separated, extension included.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotADirectory`] if the root is missing or not
    /// a directory, or [`ScanError::Io`] if reading a directory fails.
    pub fn scan(&self) -> Result<BTreeSet<String>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        let mut files = BTreeSet::new();
        scan_directory(&self.root, "", &mut files)?;
        tracing::debug!(
            root = %self.root.display(),
            file_count = files.len(),
            "Content scan completed"
        );
        Ok(files)
    }
}

/// Scan one directory level and recurse into subdirectories.
fn scan_directory(
    dir_path: &Path,
    rel_prefix: &str,
    files: &mut BTreeSet<String>,
) -> Result<(), ScanError> {
    for entry in fs::read_dir(dir_path)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let rel_path = if rel_prefix.is_empty() {
            name
        } else {
            format!("{rel_prefix}/{name}")
        };

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            scan_directory(&entry.path(), &rel_path, files)?;
        } else if file_type.is_file()
            && entry
                .path()
                .extension()
                .is_some_and(|e| e == CONTENT_EXTENSION)
        {
            files.insert(rel_path);
        }
    }
    Ok(())
}
