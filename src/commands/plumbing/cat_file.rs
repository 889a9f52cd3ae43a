use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn cat_file(&mut self, object_sha: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha.to_string())?;

        let object = self
            .database()
            .parse_object(&object_id)
            .context(format!("Unable to read object {object_sha}"))?;

        match object {
            // blob content is printed verbatim, without a trailing newline
            ObjectBox::Blob(blob) => write!(self.writer(), "{}", blob.display())?,
            ObjectBox::Tree(tree) => writeln!(self.writer(), "{}", tree.display())?,
            ObjectBox::Commit(commit) => writeln!(self.writer(), "{}", commit.display())?,
        }

        Ok(())
    }
}
