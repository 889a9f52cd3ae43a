//! Reference namespace skeleton
//!
//! Only the skeleton is in scope here: the `refs/` directory tree and the
//! `HEAD` pointer, stored as a text file containing a symbolic reference of
//! the form `ref: refs/heads/<branch>`.

use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference file
pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch HEAD points at after `init`
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn git_path(&self) -> &Path {
        &self.path
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    /// Point HEAD at the given branch
    pub fn set_head(&self, branch: &str) -> std::io::Result<()> {
        std::fs::write(self.head_path(), format!("ref: refs/heads/{branch}\n"))
    }
}
