// Errors raised while constructing model values

use thiserror::Error;

/// Rejections for malformed catalog or scan data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("mod '{0}' has no file groups")]
    NoFileGroups(String),

    #[error("file '{0}' has an empty hash")]
    EmptyDigest(String),
}
