use std::process::Command;

// Prefer `git describe` so development builds can be told apart from releases.
fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .filter(|rev| !rev.is_empty());
    let version = described.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned());
    println!("cargo::rustc-env=BILINGUAL_PO_VERSION={version}");
}
