//! Blob object
//!
//! Blobs store file content as raw, uninterpreted bytes. Filenames and modes
//! live in tree entries, never in the blob itself.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::errors::StoreResult;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// File content, identified by the SHA-1 hash of its framed form
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> StoreResult<Bytes> {
        let mut blob_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), self.content.len());
        blob_bytes.write_all(header.as_bytes())?;
        blob_bytes.write_all(&self.content)?;

        Ok(Bytes::from(blob_bytes))
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> StoreResult<Self> {
        // the header has already been read
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    #[test]
    fn known_blob_hashes_to_known_id() -> StoreResult<()> {
        let blob = Blob::new(Bytes::from_static(b"hello\n"));

        assert_eq!(&blob.serialize()?[..], b"blob 6\0hello\n");
        assert_eq!(
            blob.object_id()?.as_ref(),
            "ce013625030ba8dba906f756967f9e9ca3946491"
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn serialization_round_trips(content in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let blob = Blob::new(Bytes::from(content));
            let framed = blob.serialize().unwrap();

            let mut reader = Cursor::new(framed);
            let (object_type, size) =
                ObjectType::parse_header(&mut reader).unwrap();
            prop_assert_eq!(object_type, ObjectType::Blob);
            prop_assert_eq!(size, blob.content().len());

            let decoded = Blob::deserialize(reader).unwrap();
            prop_assert_eq!(decoded, blob);
        }
    }
}
