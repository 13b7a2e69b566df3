use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // Release builds report the bare package version
    let full_version = if profile == "debug" {
        match git_describe() {
            Some((hash, true)) => format!("{}-dev+{}.dirty", version, hash),
            Some((hash, false)) => format!("{}-dev+{}", version, hash),
            None => format!("{}-dev+unknown", version),
        }
    } else {
        version
    };

    println!("cargo:rustc-env=AGENTCTL_VERSION={}", full_version);
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}

/// Short commit hash and whether the working tree has uncommitted changes.
fn git_describe() -> Option<(String, bool)> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let dirty = Command::new("git")
        .args(["status", "--porcelain", "--untracked-files=no"])
        .output()
        .map(|out| out.status.success() && !out.stdout.is_empty())
        .unwrap_or(false);

    Some((hash, dirty))
}
