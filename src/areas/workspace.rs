//! Workspace listing and the canonical entry plan
//!
//! The workspace is the directory tree being snapshotted. This module keeps
//! the listing/classification step separate from object materialization: it
//! turns a directory into a *plan* (a canonically sorted list of classified
//! entries) so the ordering rule can be tested without touching a filesystem.

use crate::artifacts::errors::{StoreError, StoreResult};
use crate::artifacts::objects::entry_mode::EntryMode;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".git", ".", ".."];

/// Kind of a workspace entry the tree builder can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn entry_mode(&self) -> EntryMode {
        match self {
            EntryKind::File => EntryMode::Regular,
            EntryKind::Directory => EntryMode::Directory,
        }
    }
}

/// One classified child of a directory, before any hashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl WorkspaceEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        WorkspaceEntry {
            name: name.into(),
            kind,
        }
    }

    /// Key for the canonical tree order: directories compare as if their name
    /// were suffixed with the path separator. A directory `foo` therefore
    /// compares as `foo/`, which places it after a file named `foo.txt`.
    fn sort_key(&self) -> String {
        match self.kind {
            EntryKind::File => self.name.clone(),
            EntryKind::Directory => format!("{}/", self.name),
        }
    }
}

/// Sort entries into the canonical tree order
pub fn canonical_order(entries: &mut [WorkspaceEntry]) {
    entries.sort_by_key(|entry| entry.sort_key());
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a file's raw bytes, relative to the workspace root
    pub fn read_file(&self, file_path: &Path) -> StoreResult<Vec<u8>> {
        Ok(std::fs::read(self.path.join(file_path))?)
    }

    /// Classify a path as file or directory
    ///
    /// Symlinks and special files are not representable in a tree and fail
    /// with `UnsupportedEntry` instead of being silently mis-hashed.
    pub fn classify(&self, path: &Path) -> StoreResult<EntryKind> {
        let metadata = std::fs::symlink_metadata(self.path.join(path))?;
        let file_type = metadata.file_type();

        if file_type.is_file() {
            Ok(EntryKind::File)
        } else if file_type.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Err(StoreError::UnsupportedEntry {
                path: path.to_path_buf(),
            })
        }
    }

    /// Produce the canonical entry plan for a directory
    ///
    /// Lists immediate children (excluding the store's own metadata
    /// directory), classifies each, and returns them in canonical order.
    pub fn plan_dir(&self, dir_path: &Path) -> StoreResult<Vec<WorkspaceEntry>> {
        let full_path = self.path.join(dir_path);

        let mut entries = Vec::new();
        for dir_entry in std::fs::read_dir(&full_path)? {
            let dir_entry = dir_entry?;
            let name = dir_entry
                .file_name()
                .into_string()
                .map_err(|_| StoreError::UnsupportedEntry {
                    path: dir_entry.path(),
                })?;

            if IGNORED_PATHS.contains(&name.as_str()) {
                continue;
            }

            let kind = self.classify(&dir_path.join(&name))?;
            entries.push(WorkspaceEntry::new(name, kind));
        }

        canonical_order(&mut entries);
        Ok(entries)
    }
}

/// Resolve a workspace-relative child path
pub fn child_path(dir_path: &Path, name: &str) -> PathBuf {
    if dir_path.as_os_str().is_empty() {
        PathBuf::from(name)
    } else {
        dir_path.join(name)
    }
}
