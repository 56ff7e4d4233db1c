// Hash computation utilities

use anyhow::Result;
use md5::{Digest, Md5};
use std::fs;
use std::path::Path;

/// Compute the lowercase hex MD5 digest of some data
pub fn compute_md5(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Read a file and return the MD5 digest of its content
pub fn hash_file(path: &Path) -> Result<String> {
    let data =
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    Ok(compute_md5(&data))
}
