use crate::artifacts::errors::{StoreError, StoreResult};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Content-addressed object database
///
/// Persists framed, zlib-compressed objects under a two-level fanout:
/// `objects/<first-2-hex>/<remaining-38-hex>`. Objects are immutable once
/// written; a second write of the same content is a no-op.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Load the raw framed bytes of an object
    pub fn load(&self, object_id: &ObjectId) -> StoreResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_id, object_path)
    }

    /// Store an object, returning its id
    ///
    /// Idempotent: when the object file already exists the content is
    /// identical by construction, so the write is skipped.
    pub fn store(&self, object: &impl Object) -> StoreResult<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .ok_or_else(|| StoreError::corrupt("object path has no parent directory"))?,
            )?;

            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(object_id)
    }

    /// Check whether an object is present without reading it
    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> StoreResult<ObjectBox> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> StoreResult<Option<Blob>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(Some(Blob::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> StoreResult<Option<Tree>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Tree => Ok(Some(Tree::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> StoreResult<Option<Commit>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> StoreResult<(ObjectType, impl BufRead)> {
        let object_content = self.load(object_id)?;
        let total_length = object_content.len();
        let mut object_reader = Cursor::new(object_content);

        let (object_type, declared_length) = ObjectType::parse_header(&mut object_reader)?;

        let remaining_length = total_length - object_reader.position() as usize;
        if declared_length != remaining_length {
            return Err(StoreError::corrupt(format!(
                "declared payload length {declared_length} does not match actual {remaining_length}"
            )));
        }

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_id: &ObjectId, object_path: PathBuf) -> StoreResult<Bytes> {
        let object_content = std::fs::read(&object_path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                StoreError::ObjectNotFound(object_id.clone())
            } else {
                StoreError::Io(error)
            }
        })?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> StoreResult<()> {
        let object_dir = object_path
            .parent()
            .ok_or_else(|| StoreError::corrupt("object path has no parent directory"))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)?;

        file.write_all(&object_content)?;

        // rename the temp file to the object file to make the write atomic:
        // a concurrent reader never observes a partially written object
        std::fs::rename(&temp_object_path, &object_path)?;

        Ok(())
    }

    fn compress(data: Bytes) -> StoreResult<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&data)?;

        Ok(encoder.finish()?.into())
    }

    fn decompress(data: Bytes) -> StoreResult<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|error| StoreError::corrupt(format!("decompression failed: {error}")))?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
