use crate::assemble::{assemble_chunks, AssemblySummary};
use crate::digest::{hash_file, DigestAlgorithm};
use crate::error::Result;
use crate::signature::{detect_extension, UNKNOWN_EXTENSION};
use std::path::{Path, PathBuf};

/// Options for the assemble command
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    pub algorithm: DigestAlgorithm,
    pub verify: bool,
}

/// What the assemble command produced
#[derive(Debug, Clone)]
pub struct AssembleOutcome {
    pub summary: AssemblySummary,
    /// Extension label sniffed from the reconstructed file
    pub extension: &'static str,
    /// Path of the extension-tagged copy, when the type was recognized
    pub tagged_path: Option<PathBuf>,
    /// Digest of the reconstructed file, when `verify` was set
    pub digest: Option<String>,
}

/// Reassemble the chunk sequence at `folder/<prefix>_N` into `output`,
/// sniff the result's file type, and write an extension-tagged copy
/// next to it. The caller-named output file is kept either way, so a
/// later verification always has a stable path to read.
pub fn assemble_file(
    folder: &Path,
    prefix: &str,
    output: &Path,
    options: &AssembleOptions,
) -> Result<AssembleOutcome> {
    let summary = assemble_chunks(folder, prefix, output)?;
    let extension = detect_extension(output)?;

    let tagged_path = if extension == UNKNOWN_EXTENSION {
        None
    } else {
        let path = path_with_extension(output, extension);
        std::fs::copy(output, &path)?;
        Some(path)
    };

    let digest = if options.verify {
        Some(hash_file(output, options.algorithm)?)
    } else {
        None
    };

    Ok(AssembleOutcome {
        summary,
        extension,
        tagged_path,
        digest,
    })
}

/// Append `.extension` to a path without touching its existing name
fn path_with_extension(output: &Path, extension: &str) -> PathBuf {
    let mut os = output.as_os_str().to_os_string();
    os.push(".");
    os.push(extension);
    PathBuf::from(os)
}
