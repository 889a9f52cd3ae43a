use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// List the immediate entries of a tree object
    pub fn ls_tree(&mut self, object_sha: &str, name_only: bool) -> anyhow::Result<()> {
        let oid = ObjectId::try_parse(object_sha.to_string())?;

        let tree = self
            .database()
            .parse_object_as_tree(&oid)?
            .ok_or_else(|| anyhow::anyhow!("not a tree object: {object_sha}"))?;

        for entry in tree.into_entries() {
            if name_only {
                writeln!(self.writer(), "{}", entry.name)?;
            } else {
                writeln!(
                    self.writer(),
                    "{} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.mode.object_type().as_str(),
                    entry.oid.as_ref(),
                    entry.name
                )?;
            }
        }

        Ok(())
    }
}
