//! Runs the compiled binary against temp directories.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_insights-press"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run insights-press")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn build_writes_site_and_lists_pages() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("dist");
    let output = run(
        &["build", "--source", "content", "--output", out.to_str().unwrap()],
        tmp.path(),
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains("Insights \u{2192} insights/index.html"));
    assert!(text.contains("==> Build complete"));
    assert!(out.join("site-manifest.json").is_file());
    assert!(out.join("case-study-alternatives/interactive.html").is_file());
}

#[test]
fn check_prints_inventory() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["check"], tmp.path());
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Insights (6 articles)"));
    assert!(text.contains("001 Workflow Automation"));
    assert!(text.contains("==> Content is valid"));
}

#[test]
fn check_rejects_invalid_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir_all(tmp.path().join("content")).unwrap();
    std::fs::write(
        tmp.path().join("content/config.toml"),
        "[site]\nbase_url = \"ftp://example.com\"\n",
    )
    .unwrap();
    let output = run(&["check"], tmp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("base_url"));
}

#[test]
fn article_prints_fragment() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["article", "how-to-pick-your-first-ai-workflow"], tmp.path());
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("<h2>"));
    assert!(!text.contains("<html"));
}

#[test]
fn unknown_article_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["article", "no-such-article"], tmp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-article"));
}

#[test]
fn gen_config_prints_parseable_defaults() {
    let tmp = TempDir::new().unwrap();
    let output = run(&["gen-config"], tmp.path());
    assert!(output.status.success());
    let config: insights_press::config::SiteConfig = toml::from_str(&stdout(&output)).unwrap();
    assert_eq!(config.site.name, "Insights");
}
