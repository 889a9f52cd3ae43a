use crate::areas::repository::Repository;
use crate::artifacts::errors::StoreError;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Assemble and store a commit object for an existing tree
    ///
    /// The tree and parent ids are not required to exist in the database;
    /// `verify` enables that check as a safety net, surfaced as
    /// [`StoreError::DanglingReference`].
    pub fn commit_tree(
        &mut self,
        tree_sha: &str,
        parent_sha: Option<&str>,
        message: &str,
        verify: bool,
    ) -> anyhow::Result<ObjectId> {
        let tree_oid = ObjectId::try_parse(tree_sha.to_string())?;
        let parents = match parent_sha {
            Some(sha) => vec![ObjectId::try_parse(sha.to_string())?],
            None => vec![],
        };

        if verify {
            for oid in std::iter::once(&tree_oid).chain(parents.iter()) {
                if !self.database().contains(oid) {
                    return Err(StoreError::DanglingReference(oid.clone()).into());
                }
            }
        }

        let author = Author::from_env_or_default();
        let commit = Commit::new(parents, tree_oid, author, message.to_string());

        let object_id = self.database().store(&commit)?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(object_id)
    }
}
