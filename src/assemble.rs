use crate::error::{RestitchError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Result of a completed assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblySummary {
    /// Number of chunk files consumed
    pub chunks: usize,
    /// Total bytes written to the output
    pub bytes: u64,
}

/// Path of the chunk at `index` inside `folder`
fn chunk_path(folder: &Path, prefix: &str, index: usize) -> PathBuf {
    folder.join(format!("{}_{}", prefix, index))
}

/// Reassemble `folder/<prefix>_1`, `<prefix>_2`, ... into `output`.
///
/// Chunks are consumed in strictly increasing index order and the first
/// absent index ends the sequence, so a folder with `part_1` and `part_3`
/// but no `part_2` yields only `part_1`'s bytes. The output file is
/// created fresh (an existing file at `output` is truncated) and removed
/// again if a read or write fails partway through. Chunk files are never
/// modified.
///
/// Fails with [`RestitchError::MissingSource`] when the folder does not
/// exist or contains no chunk at index 1; no output file is created in
/// that case.
pub fn assemble_chunks(folder: &Path, prefix: &str, output: &Path) -> Result<AssemblySummary> {
    if !chunk_path(folder, prefix, 1).is_file() {
        return Err(RestitchError::MissingSource {
            folder: folder.to_path_buf(),
            prefix: prefix.to_string(),
        });
    }

    let result = copy_chunks(folder, prefix, output);
    if result.is_err() {
        // An error result must not leave a half-written output behind
        let _ = fs::remove_file(output);
    }
    result
}

fn copy_chunks(folder: &Path, prefix: &str, output: &Path) -> Result<AssemblySummary> {
    let mut writer = BufWriter::new(File::create(output)?);
    let mut chunks = 0;
    let mut bytes = 0u64;

    loop {
        let path = chunk_path(folder, prefix, chunks + 1);
        if !path.is_file() {
            break;
        }
        let mut chunk = File::open(&path)?;
        bytes += io::copy(&mut chunk, &mut writer)?;
        chunks += 1;
    }

    writer.flush()?;
    Ok(AssemblySummary { chunks, bytes })
}
