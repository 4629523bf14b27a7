use crate::error::Result;
use crate::signature::detect_extension;
use std::path::Path;

/// Render the file-type report for a file (the `detect` subcommand)
pub fn show_extension(path: &Path) -> Result<String> {
    let extension = detect_extension(path)?;
    Ok(format!("{}: {}\n", path.display(), extension))
}
