use crate::error::{RestitchError, Result};
use digest::Digest;
use sha1::Sha1;
use sha2::Sha256;
use sha3::Sha3_256;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming block size used by [`hash_file`]. Purely a memory bound;
/// the digest is identical for any positive block size.
pub const DEFAULT_BLOCK_SIZE: usize = 8192;

/// Digest algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha3,
    Blake3,
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = RestitchError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha3" => Ok(Self::Sha3),
            "blake3" => Ok(Self::Blake3),
            _ => Err(RestitchError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha3 => "sha3",
            Self::Blake3 => "blake3",
        };
        f.write_str(name)
    }
}

/// Hash the whole file at `path` and return the lowercase hex digest
pub fn hash_file(path: &Path, algorithm: DigestAlgorithm) -> Result<String> {
    hash_file_with_block_size(path, algorithm, DEFAULT_BLOCK_SIZE)
}

/// Hash `path` streaming `block_size` bytes at a time
pub fn hash_file_with_block_size(
    path: &Path,
    algorithm: DigestAlgorithm,
    block_size: usize,
) -> Result<String> {
    let file = open_target(path)?;
    match algorithm {
        DigestAlgorithm::Sha1 => hash_reader::<Sha1, _>(file, block_size),
        DigestAlgorithm::Sha256 => hash_reader::<Sha256, _>(file, block_size),
        DigestAlgorithm::Sha3 => hash_reader::<Sha3_256, _>(file, block_size),
        DigestAlgorithm::Blake3 => hash_reader_blake3(file, block_size),
    }
}

fn open_target(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RestitchError::NotFound(path.to_path_buf()),
        _ => RestitchError::Io(e),
    })
}

fn hash_reader<D: Digest, R: Read>(mut reader: R, block_size: usize) -> Result<String> {
    let mut hasher = D::new();
    let mut block = vec![0u8; block_size.max(1)];
    loop {
        let read = reader.read(&mut block)?;
        if read == 0 {
            break;
        }
        hasher.update(&block[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// BLAKE3 has its own hasher API rather than the `digest` traits
fn hash_reader_blake3(mut reader: impl Read, block_size: usize) -> Result<String> {
    let mut hasher = blake3::Hasher::new();
    let mut block = vec![0u8; block_size.max(1)];
    loop {
        let read = reader.read(&mut block)?;
        if read == 0 {
            break;
        }
        hasher.update(&block[..read]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}
