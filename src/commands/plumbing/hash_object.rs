use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use bytes::Bytes;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<()> {
        // read object file
        let object_data = self
            .workspace()
            .read_file(object_path.as_ref())
            .context(format!("Unable to read file {object_path}"))?;
        let object = Blob::new(Bytes::from(object_data));

        // hash
        let object_id = object.object_id()?;

        writeln!(self.writer(), "{object_id}")?;

        // write (if write is true) as compressed object file
        if !write {
            return Ok(());
        }

        self.database().store(&object)?;

        Ok(())
    }
}
