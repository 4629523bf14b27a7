use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn restitch_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_restitch"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(restitch_command().args(args).output()?)
}

fn write_chunks(folder: &Path, prefix: &str, contents: &[&[u8]]) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(folder)?;
    for (i, content) in contents.iter().enumerate() {
        fs::write(folder.join(format!("{}_{}", prefix, i + 1)), content)?;
    }
    Ok(())
}

#[test]
fn cli_end_to_end_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let folder = dir.path().join("SplitFile");
    let output = dir.path().join("reconstructed");

    write_chunks(&folder, "part", &[b"AB", b"CD", b"EF"])?;

    let assemble = run(&[
        "assemble",
        "--folder",
        folder.to_str().unwrap(),
        "--prefix",
        "part",
        "--output",
        output.to_str().unwrap(),
        "--verify",
    ])?;
    assert!(
        assemble.status.success(),
        "assemble command failed: {}",
        String::from_utf8_lossy(&assemble.stderr)
    );
    let stdout = String::from_utf8(assemble.stdout)?;
    assert!(
        stdout.contains("Assembled 3 chunks (6 bytes)"),
        "assemble output missing summary: {}",
        stdout
    );
    // sha1 of "ABCDEF"
    assert!(
        stdout.contains("970093678b182127f60bb51b8af2c94d539eca3a"),
        "verify output missing digest: {}",
        stdout
    );

    assert_eq!(fs::read(&output)?, b"ABCDEF");

    // Hash subcommand agrees with the verify line
    let hash = run(&["hash", output.to_str().unwrap()])?;
    assert!(hash.status.success());
    assert!(
        String::from_utf8(hash.stdout)?.contains("970093678b182127f60bb51b8af2c94d539eca3a")
    );

    // Unrecognized content reports as unknown
    let detect = run(&["detect", output.to_str().unwrap()])?;
    assert!(detect.status.success());
    assert!(String::from_utf8(detect.stdout)?.contains("unknown"));

    Ok(())
}

#[test]
fn assemble_tags_recognized_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let folder = dir.path().join("chunks");
    let output = dir.path().join("image");

    write_chunks(&folder, "pic", &[b"\x89PNG\r\n\x1a\n", b"fake payload"])?;

    let assemble = run(&[
        "assemble",
        "-f",
        folder.to_str().unwrap(),
        "-p",
        "pic",
        "-o",
        output.to_str().unwrap(),
    ])?;
    assert!(
        assemble.status.success(),
        "assemble command failed: {}",
        String::from_utf8_lossy(&assemble.stderr)
    );
    assert!(String::from_utf8(assemble.stdout)?.contains("'png'"));

    let tagged = dir.path().join("image.png");
    assert!(tagged.exists(), "expected tagged copy at {}", tagged.display());
    assert_eq!(fs::read(&tagged)?, fs::read(&output)?);

    Ok(())
}

#[test]
fn assemble_missing_folder_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let folder = dir.path().join("no_such_folder");
    let output = dir.path().join("out");

    let assemble = run(&[
        "assemble",
        "-f",
        folder.to_str().unwrap(),
        "-p",
        "part",
        "-o",
        output.to_str().unwrap(),
    ])?;
    assert!(!assemble.status.success(), "assemble should fail");
    assert!(
        String::from_utf8_lossy(&assemble.stderr).contains("Error"),
        "stderr should carry the error"
    );
    assert!(!output.exists(), "no output should be created on failure");

    Ok(())
}

#[test]
fn hash_missing_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("nope");

    let hash = run(&["hash", missing.to_str().unwrap()])?;
    assert!(!hash.status.success());
    assert!(String::from_utf8_lossy(&hash.stderr).contains("File not found"));

    Ok(())
}

#[test]
fn hash_algorithm_is_selectable() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("data");
    fs::write(&file, b"ABCDEF")?;

    let hash = run(&["hash", file.to_str().unwrap(), "--algorithm", "sha256"])?;
    assert!(hash.status.success());
    assert!(String::from_utf8(hash.stdout)?
        .contains("e9c0f8b575cbfcb42ab3b78ecc87efa3b011d9a5d10b09fa4e96f240bf6a82f5"));

    let bogus = run(&["hash", file.to_str().unwrap(), "--algorithm", "md5"])?;
    assert!(!bogus.status.success(), "unsupported algorithm must be rejected");

    Ok(())
}

#[test]
fn version_flag_prints_build_info() -> Result<(), Box<dyn Error>> {
    let version = run(&["--version"])?;
    assert!(version.status.success());
    assert!(String::from_utf8(version.stdout)?.starts_with("restitch"));

    Ok(())
}
