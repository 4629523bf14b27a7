use std::fs;
use std::path::Path;
use std::process::Command;

fn read_trimmed(path: &Path, fallback: &str) -> String {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| fallback.to_string())
}

fn git_short_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Increment the build counter on every compile
    let build_file = Path::new("BUILD_NUMBER");
    let build_number: u64 = read_trimmed(build_file, "0").parse().unwrap_or(0) + 1;
    fs::write(build_file, build_number.to_string()).expect("Failed to write build number");

    let version = read_trimmed(Path::new("VERSION"), "0.1.0");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    println!("cargo:rustc-env=RESTITCH_VERSION={}", version);
    println!("cargo:rustc-env=RESTITCH_BUILD={}", build_number);
    println!(
        "cargo:rustc-env=RESTITCH_PROFILE={}",
        if profile == "release" { "release" } else { "development" }
    );
    println!("cargo:rustc-env=RESTITCH_GIT_HASH={}", git_short_hash());

    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
