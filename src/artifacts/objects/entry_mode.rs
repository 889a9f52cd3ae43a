//! Tree entry modes
//!
//! A closed set: regular files (`100644`) and directories (`040000`).
//! Executables, symlinks and other special kinds are not representable;
//! the workspace rejects them before they ever reach a tree.

use crate::artifacts::errors::{StoreError, StoreResult};
use crate::artifacts::objects::object_type::ObjectType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryMode {
    #[default]
    Regular,
    Directory,
}

impl EntryMode {
    /// Octal mode string as it appears inside a tree payload
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryMode::Regular => "100644",
            EntryMode::Directory => "040000",
        }
    }

    pub fn from_mode_str(value: &str) -> StoreResult<Self> {
        match value {
            "100644" => Ok(EntryMode::Regular),
            "040000" => Ok(EntryMode::Directory),
            _ => Err(StoreError::corrupt(format!(
                "unrecognized tree entry mode: {value}"
            ))),
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, EntryMode::Directory)
    }

    /// Kind of object this mode points at
    pub fn object_type(&self) -> ObjectType {
        match self {
            EntryMode::Regular => ObjectType::Blob,
            EntryMode::Directory => ObjectType::Tree,
        }
    }
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
