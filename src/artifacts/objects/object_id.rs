//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes
//! over the framed object bytes. They uniquely identify all objects in the
//! store (blobs, trees, commits).
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::errors::{StoreError, StoreResult};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::io;
use std::path::PathBuf;

/// Content hash (and hence address) of a framed object
///
/// A 40-character lowercase hexadecimal string. Value equality only; the id
/// carries no identity beyond its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    pub fn try_parse(id: String) -> StoreResult<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(StoreError::corrupt(format!(
                "invalid object id length: {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StoreError::corrupt(format!(
                "invalid object id characters: {id}"
            )));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Used when serializing tree entries, which carry the raw digest rather
    /// than its hex form.
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> StoreResult<()> {
        let hex40 = self.as_ref();

        for i in (0..OBJECT_ID_LENGTH).step_by(2) {
            let byte = u8::from_str_radix(&hex40[i..i + 2], 16)
                .map_err(|_| StoreError::corrupt("invalid hex digit in object id"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Read an object ID from binary format (20 bytes)
    ///
    /// Reads exactly 20 bytes and converts them to the 40-character hex form.
    /// Fails when the reader is exhausted before 20 bytes are available.
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> StoreResult<Self> {
        let mut hex40 = String::with_capacity(OBJECT_ID_LENGTH);
        let mut buffer = [0; 1];

        for _ in 0..(OBJECT_ID_LENGTH / 2) {
            reader
                .read_exact(&mut buffer)
                .map_err(|_| StoreError::corrupt("unexpected EOF in object id"))?;
            hex40.push_str(&format!("{:02x}", buffer[0]));
        }

        Self::try_parse(hex40)
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Get abbreviated form of the object ID (first 7 characters)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_length_and_non_hex_input() {
        assert!(ObjectId::try_parse("abc123".to_string()).is_err());
        assert!(ObjectId::try_parse("g".repeat(40)).is_err());
        assert!(ObjectId::try_parse("a".repeat(40)).is_ok());
    }

    #[test]
    fn binary_form_round_trips() -> StoreResult<()> {
        let oid = ObjectId::try_parse("ce013625030ba8dba906f756967f9e9ca3946491".to_string())?;

        let mut raw = Vec::new();
        oid.write_h40_to(&mut raw)?;
        assert_eq!(raw.len(), 20);

        let parsed = ObjectId::read_h40_from(&mut raw.as_slice())?;
        assert_eq!(parsed, oid);
        Ok(())
    }

    #[test]
    fn truncated_binary_form_is_rejected() {
        let raw = [0u8; 19];
        let err = ObjectId::read_h40_from(&mut raw.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::CorruptObject { .. }));
    }

    #[test]
    fn splits_into_fanout_path() -> StoreResult<()> {
        let oid = ObjectId::try_parse("ce013625030ba8dba906f756967f9e9ca3946491".to_string())?;
        assert_eq!(
            oid.to_path(),
            PathBuf::from("ce").join("013625030ba8dba906f756967f9e9ca3946491")
        );
        Ok(())
    }
}
