//! Typed failure taxonomy for the object store core
//!
//! Every core component (codec, database, workspace) surfaces failures to its
//! caller as one of these variants. The command layer wraps them with `anyhow`
//! context; callers that care about the category can still `downcast_ref`.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested id has no backing object file.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// Header/length mismatch, malformed tree entry, or decompression failure.
    #[error("corrupt object: {reason}")]
    CorruptObject { reason: String },

    /// A workspace entry the tree builder cannot classify (symlink, device, ...).
    #[error("unsupported workspace entry: {}", path.display())]
    UnsupportedEntry { path: PathBuf },

    /// The repository skeleton already exists.
    #[error("already initialized repository at {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    /// A commit references an object that is not present in the database.
    #[error("dangling reference: {0}")]
    DanglingReference(ObjectId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        StoreError::CorruptObject {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the core.
pub type StoreResult<T> = Result<T, StoreError>;
