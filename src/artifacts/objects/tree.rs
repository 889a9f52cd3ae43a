//! Tree object
//!
//! Trees represent directory snapshots. They list child entries (files as
//! blobs, subdirectories as nested trees) with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! ## Ordering
//!
//! Entries are stored in the canonical order computed by the workspace layer
//! (directories compare as `name + "/"`). The codec never re-sorts: it has no
//! business rediscovering directory-vs-file information from encoded bytes,
//! so [`Tree::new`] trusts its caller.

use crate::artifacts::errors::{StoreError, StoreResult};
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// One named child of a tree
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: EntryMode,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        self.mode.is_tree()
    }
}

/// Directory snapshot holding entries in canonical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Wrap an already canonically-sorted entry list
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Tree { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> StoreResult<Bytes> {
        let mut content_bytes = Vec::new();
        for entry in &self.entries {
            let header = format!("{} {}", entry.mode.as_str(), entry.name);
            content_bytes.write_all(header.as_bytes())?;
            content_bytes.push(0);
            entry.oid.write_h40_to(&mut content_bytes)?;
        }

        let mut tree_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        tree_bytes.write_all(header.as_bytes())?;
        tree_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> StoreResult<Self> {
        let mut entries = Vec::new();
        let mut reader = reader;

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            // Read "mode " (space-delimited)
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break; // clean EOF: no more entries
            }
            // Must end with ' ' or it's malformed
            if mode_bytes.pop() != Some(b' ') {
                return Err(StoreError::corrupt("unexpected EOF in tree entry mode"));
            }

            let mode_str = std::str::from_utf8(&mode_bytes)
                .map_err(|_| StoreError::corrupt("non-ascii tree entry mode"))?;
            let mode = EntryMode::from_mode_str(mode_str)?;

            // Read "name\0"
            name_bytes.clear();
            let n = reader.read_until(b'\0', &mut name_bytes)?;
            if n == 0 || name_bytes.pop() != Some(b'\0') {
                return Err(StoreError::corrupt("unexpected EOF in tree entry name"));
            }
            let name = std::str::from_utf8(&name_bytes)
                .map_err(|_| StoreError::corrupt("non-utf8 tree entry name"))?
                .to_owned();

            // Read the raw 20-byte object id
            let oid = ObjectId::read_h40_from(&mut reader)?;

            entries.push(TreeEntry::new(mode, name, oid));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.mode.object_type().as_str(),
                    entry.oid.as_ref(),
                    entry.name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
