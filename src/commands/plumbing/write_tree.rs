use crate::areas::repository::Repository;
use crate::areas::workspace::{EntryKind, child_path};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Build blob and tree objects for a workspace subtree, bottom-up
    ///
    /// Prints and returns the id of the object built for `path` (the root
    /// tree for a directory, a blob for a regular file).
    pub fn write_tree(&mut self, path: Option<&Path>) -> anyhow::Result<ObjectId> {
        let path = path.unwrap_or_else(|| Path::new(""));
        let object_id = self
            .build_subtree(path)
            .context(format!("Unable to build tree for {}", path.display()))?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(object_id)
    }

    /// Materialize one workspace path into an object
    ///
    /// Children are always processed in canonical order before the parent
    /// tree is encoded, so a tree's id is a pure function of its content,
    /// independent of filesystem iteration order.
    fn build_subtree(&self, path: &Path) -> anyhow::Result<ObjectId> {
        match self.workspace().classify(path)? {
            EntryKind::File => {
                let data = self.workspace().read_file(path)?;
                let blob = Blob::new(Bytes::from(data));
                Ok(self.database().store(&blob)?)
            }
            EntryKind::Directory => {
                let plan = self.workspace().plan_dir(path)?;

                let mut entries = Vec::with_capacity(plan.len());
                for planned in plan {
                    let oid = self.build_subtree(&child_path(path, &planned.name))?;
                    entries.push(TreeEntry::new(
                        planned.kind.entry_mode(),
                        planned.name,
                        oid,
                    ));
                }

                let tree = Tree::new(entries);
                Ok(self.database().store(&tree)?)
            }
        }
    }
}
