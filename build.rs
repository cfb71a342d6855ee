fn main() {
    // Bundled datasets and static files are compiled in with include_str!.
    println!("cargo:rerun-if-changed=data/articles.toml");
    println!("cargo:rerun-if-changed=data/case-studies.toml");
    println!("cargo:rerun-if-changed=static/");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_default();

    let on_tag = std::process::Command::new("git")
        .args(["describe", "--exact-match", "--tags", "HEAD"])
        .output()
        .ok()
        .is_some_and(|o| o.status.success());

    println!("cargo:rustc-env=PRESS_GIT_HASH={hash}");
    println!("cargo:rustc-env=PRESS_ON_RELEASE_TAG={on_tag}");
}
