use crate::digest::{hash_file, DigestAlgorithm};
use crate::error::Result;
use std::path::Path;

/// Render the digest report for a file (the `hash` subcommand)
pub fn show_digest(path: &Path, algorithm: DigestAlgorithm) -> Result<String> {
    let digest = hash_file(path, algorithm)?;
    Ok(format!("{} ({}) = {}\n", path.display(), algorithm, digest))
}
