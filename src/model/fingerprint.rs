// File hash model used to identify mod files by content

use crate::model::ModelError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A file and the hash of its content.
///
/// Two file hashes are equal when their digests match. Where the file lives
/// does not matter, so `path` takes no part in equality or hashing.
#[derive(Debug, Clone)]
pub struct FileHash {
    path: String,
    digest: String,
}

impl FileHash {
    /// Create a file hash. The digest is stored as lowercase hex.
    pub fn new(path: impl Into<String>, digest: impl AsRef<str>) -> Result<Self, ModelError> {
        let path = path.into();
        let digest = digest.as_ref().trim().to_lowercase();
        if digest.is_empty() {
            return Err(ModelError::EmptyDigest(path));
        }
        Ok(Self { path, digest })
    }

    /// The file path, absolute or relative to the install directory
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lowercase hex digest of the file content
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl PartialEq for FileHash {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl Eq for FileHash {}

impl Hash for FileHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest.hash(state);
    }
}

impl fmt::Display for FileHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} md5={}", self.path, self.digest)
    }
}
