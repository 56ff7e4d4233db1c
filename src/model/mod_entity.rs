// Mod model shared by the local scan and the BeatMods catalog

use crate::model::{FileHash, ModelError};
use std::fmt;

/// A mod package: a name, catalog metadata when known, and its files.
///
/// Files are grouped by the downloadable archive they came from. A mod found
/// by scanning the install directory has exactly one group holding one file;
/// a catalog mod mirrors the catalog's download layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mod {
    name: String,
    version: Option<String>,
    link: Option<String>,
    files: Vec<Vec<FileHash>>,
}

impl Mod {
    /// Create a mod. Rejects a mod without any file group.
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        link: Option<String>,
        files: Vec<Vec<FileHash>>,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if files.is_empty() {
            return Err(ModelError::NoFileGroups(name));
        }
        Ok(Self {
            name,
            version,
            link,
            files,
        })
    }

    /// Create a mod for a single file found in the install directory
    pub fn local(name: impl Into<String>, file: FileHash) -> Self {
        Self {
            name: name.into(),
            version: None,
            link: None,
            files: vec![vec![file]],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mod version, only known for catalog mods
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Link to the mod's home page, only known for catalog mods
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Files grouped by download archive
    #[allow(dead_code)] // Only read by tests, matching goes through all_files
    pub fn files(&self) -> &[Vec<FileHash>] {
        &self.files
    }

    /// All files across every group
    pub fn all_files(&self) -> impl Iterator<Item = &FileHash> {
        self.files.iter().flatten()
    }

    /// Whether both mods carry the same name (exact, case-sensitive)
    pub fn names_match(&self, other: &Mod) -> bool {
        self.name == other.name
    }

    /// Whether any file of this mod has the same hash as any file of `other`
    pub fn shares_file_with(&self, other: &Mod) -> bool {
        self.all_files()
            .any(|file| other.all_files().any(|theirs| theirs == file))
    }
}

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} v{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
