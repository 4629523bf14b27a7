//! Restitch - split-file reassembly with integrity checking
//!
//! Rebuilds a file from sequentially numbered chunk files
//! (`part_1`, `part_2`, ...), hashes the result for integrity
//! verification, and identifies its type from the magic number at the
//! start of the file.
//!
//! ## Pipeline
//!
//! ```text
//! folder/prefix_N → Assemble → output file ┬→ Digest (streaming hash)
//!                                          └→ Signature (type sniff)
//! ```
//!
//! Assembly consumes chunks in strictly increasing index order,
//! starting at 1, and the first absent index ends the sequence. Digest
//! computation and signature detection read the finished file
//! independently; the three steps share nothing but the filesystem.
//!
//! ## Example
//!
//! ```no_run
//! use restitch::assemble::assemble_chunks;
//! use restitch::digest::{hash_file, DigestAlgorithm};
//! use restitch::signature::detect_extension;
//! use std::path::Path;
//!
//! let summary = assemble_chunks(
//!     Path::new("SplitFile"),
//!     "part",
//!     Path::new("reconstructed_file"),
//! ).unwrap();
//! println!("{} chunks, {} bytes", summary.chunks, summary.bytes);
//!
//! let digest = hash_file(Path::new("reconstructed_file"), DigestAlgorithm::Sha1).unwrap();
//! let extension = detect_extension(Path::new("reconstructed_file")).unwrap();
//! println!("{} ({})", digest, extension);
//! ```

pub mod assemble;
pub mod cli;
pub mod digest;
pub mod error;
pub mod signature;

pub use assemble::{assemble_chunks, AssemblySummary};
pub use digest::{hash_file, DigestAlgorithm};
pub use error::{RestitchError, Result};
pub use signature::{detect_extension, SIGNATURES};
