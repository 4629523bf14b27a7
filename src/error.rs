use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestitchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No chunks named '{}_1', '{}_2', ... in {}", .prefix, .prefix, .folder.display())]
    MissingSource { folder: PathBuf, prefix: String },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, RestitchError>;
