use crate::error::{RestitchError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Label returned when no signature matches
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// Bytes read from the start of the file; long enough for every
/// pattern in [`SIGNATURES`]
const HEADER_LEN: usize = 8;

/// Magic-number table mapping a byte prefix to an extension label.
/// First match wins, so order is significant. The RIFF entry covers the
/// container header shared by webp and friends, and ID3 only catches
/// tagged mp3 files.
pub const SIGNATURES: &[(&[u8], &str)] = &[
    (&[0xFF, 0xD8, 0xFF], "jpg"),
    (b"\x89PNG\r\n\x1a\n", "png"),
    (b"GIF87a", "gif"),
    (b"GIF89a", "gif"),
    (b"%PDF", "pdf"),
    (&[0x50, 0x4B, 0x03, 0x04], "zip"),
    (&[0x49, 0x49, 0x2A, 0x00], "tif"),
    (&[0x4D, 0x4D, 0x00, 0x2A], "tif"),
    (&[0x00, 0x00, 0x01, 0x00], "ico"),
    (b"RIFF", "webp"),
    (b"OggS", "ogg"),
    (b"fLaC", "flac"),
    (b"ID3", "mp3"),
    (b"BM", "bmp"),
];

/// Sniff the file type of `path` from its leading bytes.
///
/// Reads at most [`HEADER_LEN`] bytes (fewer for shorter files) and
/// returns the label of the first matching table entry, or
/// [`UNKNOWN_EXTENSION`] when nothing matches. Read-only.
pub fn detect_extension(path: &Path) -> Result<&'static str> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RestitchError::NotFound(path.to_path_buf()),
        _ => RestitchError::Io(e),
    })?;

    let mut header = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        let read = file.read(&mut header[filled..])?;
        if read == 0 {
            break;
        }
        filled += read;
    }

    Ok(match_signature(&header[..filled]))
}

/// First-match lookup against [`SIGNATURES`]
fn match_signature(header: &[u8]) -> &'static str {
    SIGNATURES
        .iter()
        .find(|(pattern, _)| header.starts_with(pattern))
        .map(|(_, extension)| *extension)
        .unwrap_or(UNKNOWN_EXTENSION)
}
