use crate::artifacts::errors::{StoreError, StoreResult};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Parse the object header `<kind> <size>\0` from a reader.
    ///
    /// Consumes the header and leaves the reader positioned at the payload.
    /// Returns the object kind together with the declared payload size, so
    /// callers can check it against the bytes that actually remain.
    pub fn parse_header(data_reader: &mut impl BufRead) -> StoreResult<(ObjectType, usize)> {
        let mut object_type = Vec::new();
        data_reader.read_until(b' ', &mut object_type)?;
        if object_type.pop() != Some(b' ') {
            return Err(StoreError::corrupt("unexpected EOF in object header"));
        }

        let object_type = std::str::from_utf8(&object_type)
            .map_err(|_| StoreError::corrupt("non-ascii object kind in header"))?;
        let object_type = ObjectType::try_from(object_type)?;

        let mut size = Vec::new();
        data_reader.read_until(b'\0', &mut size)?;
        if size.pop() != Some(b'\0') {
            return Err(StoreError::corrupt("missing NUL terminator in object header"));
        }

        let size = std::str::from_utf8(&size)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| StoreError::corrupt("invalid payload length in object header"))?;

        Ok((object_type, size))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = StoreError;

    fn try_from(value: &str) -> StoreResult<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(StoreError::corrupt(format!("invalid object kind: {value}"))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
