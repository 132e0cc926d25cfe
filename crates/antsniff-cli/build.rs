use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ANTSNIFF_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");

    // Release builds pin the commit; local builds ask git.
    let commit = env_commit("ANTSNIFF_BUILD_COMMIT")
        .or_else(|| env_commit("GITHUB_SHA"))
        .or_else(|| git(&["rev-parse", "--short=7", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=ANTSNIFF_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=ANTSNIFF_BUILD_DATE={}", date);
}

fn env_commit(name: &str) -> Option<String> {
    let value = env::var(name).ok().filter(|v| !v.trim().is_empty())?;
    Some(value.trim().chars().take(7).collect())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
