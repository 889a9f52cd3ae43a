//! Commit object
//!
//! Commits record a tree snapshot together with metadata: optional parent
//! commit, author/committer identity with timestamp, and a message.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! This layout is self-consistent (decode is symmetric with encode); nothing
//! outside this store needs to parse it.

use crate::artifacts::errors::{StoreError, StoreResult};
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::io::{BufRead, Write};

/// Fallback identity when no author environment is configured
const DEFAULT_AUTHOR_NAME: &str = "nit";
const DEFAULT_AUTHOR_EMAIL: &str = "nit@localhost";

/// Author or committer identity with timestamp
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new author with the current timestamp
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    /// Create a new author with a specific timestamp
    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Format complete author info: "Name <email> timestamp timezone"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Load author information from the environment
    ///
    /// Reads GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL, and optionally GIT_AUTHOR_DATE.
    /// Missing name or email falls back to the default identity; a missing
    /// date means the current time.
    pub fn from_env_or_default() -> Self {
        let name =
            std::env::var("GIT_AUTHOR_NAME").unwrap_or_else(|_| DEFAULT_AUTHOR_NAME.to_string());
        let email =
            std::env::var("GIT_AUTHOR_EMAIL").unwrap_or_else(|_| DEFAULT_AUTHOR_EMAIL.to_string());
        let timestamp = std::env::var("GIT_AUTHOR_DATE").ok().and_then(|date_str| {
            chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        });

        match timestamp {
            Some(ts) => Author::new_with_timestamp(name, email, ts),
            None => Author::new(name, email),
        }
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = StoreError;

    fn try_from(value: &str) -> StoreResult<Self> {
        // Format: "name <email> timestamp timezone"
        // Split from right to get timezone and timestamp first
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(StoreError::corrupt("invalid author format"));
        }

        let timezone = parts[0];
        let timestamp = parts[1];
        let name_email_part = parts[2]; // "name <email>"

        let email_start = name_email_part
            .find('<')
            .ok_or_else(|| StoreError::corrupt("author format missing '<'"))?;
        let email_end = name_email_part
            .find('>')
            .ok_or_else(|| StoreError::corrupt("author format missing '>'"))?;

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        // "%s %z" reads the epoch seconds as an absolute instant and keeps
        // the recorded offset, so encode/decode preserves the instant exactly
        let datetime = chrono::DateTime::parse_from_str(&format!("{timestamp} {timezone}"), "%s %z")
            .map_err(|_| StoreError::corrupt("invalid author timestamp or timezone"))?;

        Ok(Author {
            name,
            email,
            timestamp: datetime,
        })
    }
}

/// Snapshot of the store at a point in time
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit ID (empty for the initial commit)
    parents: Vec<ObjectId>,
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Author who wrote the changes
    author: Author,
    /// Committer who recorded the commit
    committer: Author,
    /// Commit message
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            parents,
            tree_oid,
            author: author.clone(),
            committer: author,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }
}

impl Packable for Commit {
    fn serialize(&self) -> StoreResult<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!("tree {}", self.tree_oid.as_ref()));
        for parent in &self.parents {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!("author {}", self.author.display()));
        object_content.push(format!("committer {}", self.committer.display()));
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let content_bytes = object_content.join("\n").into_bytes();

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> StoreResult<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)
            .map_err(|_| StoreError::corrupt("non-utf8 commit payload"))?;
        let mut lines = content.lines();

        let tree_line = lines
            .next()
            .ok_or_else(|| StoreError::corrupt("commit payload missing tree line"))?;
        let tree_oid = tree_line
            .strip_prefix("tree ")
            .ok_or_else(|| StoreError::corrupt("commit payload has invalid tree line"))?
            .to_string();
        let tree_oid = ObjectId::try_parse(tree_oid)?;

        // Parse all parent lines (zero for the initial commit)
        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .ok_or_else(|| StoreError::corrupt("commit payload missing author line"))?;

        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);

            next_line = lines
                .next()
                .ok_or_else(|| StoreError::corrupt("commit payload missing author line"))?;
        }

        // At this point, next_line should be the author line
        let author = next_line
            .strip_prefix("author ")
            .ok_or_else(|| StoreError::corrupt("commit payload has invalid author line"))?;
        let author = Author::try_from(author)?;

        let committer_line = lines
            .next()
            .ok_or_else(|| StoreError::corrupt("commit payload missing committer line"))?;
        let committer = committer_line
            .strip_prefix("committer ")
            .ok_or_else(|| StoreError::corrupt("commit payload has invalid committer line"))?;
        let _committer = Author::try_from(committer)?;

        // skip the empty line
        lines.next();

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parents, tree_oid, author, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("tree {}", self.tree_oid.as_ref()));
        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn oid(fill: char) -> ObjectId {
        ObjectId::try_parse(fill.to_string().repeat(40)).unwrap()
    }

    fn author() -> Author {
        let timestamp =
            chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00+02:00").unwrap();
        Author::new_with_timestamp(
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            timestamp,
        )
    }

    fn payload_of(commit: &Commit) -> Vec<u8> {
        let framed = commit.serialize().unwrap();
        let mut reader = Cursor::new(framed);
        ObjectType::parse_header(&mut reader).unwrap();
        let position = reader.position() as usize;
        reader.into_inner()[position..].to_vec()
    }

    #[test]
    fn root_commit_payload_references_tree_and_message() {
        let commit = Commit::new(vec![], oid('a'), author(), "Initial commit".to_string());
        let payload = String::from_utf8(payload_of(&commit)).unwrap();

        assert!(payload.starts_with(&format!("tree {}", oid('a'))));
        assert!(!payload.contains("parent "));
        assert!(payload.ends_with("\n\nInitial commit"));
    }

    #[test]
    fn child_commit_round_trips_with_parent() -> StoreResult<()> {
        let commit = Commit::new(
            vec![oid('b')],
            oid('a'),
            author(),
            "Second commit".to_string(),
        );

        let decoded = Commit::deserialize(Cursor::new(payload_of(&commit)))?;

        assert_eq!(decoded.tree_oid(), &oid('a'));
        assert_eq!(decoded.parent(), Some(&oid('b')));
        assert_eq!(decoded.message(), "Second commit");
        assert_eq!(decoded.author(), commit.author());
        Ok(())
    }

    #[test]
    fn payload_without_tree_line_is_corrupt() {
        let payload = b"author nobody <n@e> 0 +0000".to_vec();
        let err = Commit::deserialize(Cursor::new(payload)).unwrap_err();
        assert!(matches!(err, StoreError::CorruptObject { .. }));
    }
}
