//! End-to-end site build through the library API.

use insights_press::articles::ArticleStore;
use insights_press::case_study::{self, Layout};
use insights_press::config::{self, SiteConfig};
use insights_press::generate::{self, Content, PageKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn build(config: &SiteConfig, source: &Path) -> (TempDir, generate::SiteReport) {
    let out = TempDir::new().unwrap();
    let report = generate::generate(config, Content::bundled(), source, out.path()).unwrap();
    (out, report)
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("reading {rel}: {e}"))
}

#[test]
fn every_article_gets_a_page() {
    let source = TempDir::new().unwrap();
    let (out, report) = build(&SiteConfig::default(), source.path());

    let store = ArticleStore::bundled();
    assert_eq!(report.count(PageKind::Article), store.len());
    for article in store.all() {
        let html = read(out.path(), &format!("insights/{}/index.html", article.slug));
        assert!(html.contains("TL;DR"));
        assert!(html.contains(&format!(
            r#"<link rel="canonical" href="https://example.com/insights/{}/">"#,
            article.slug
        )));
    }
}

#[test]
fn category_pages_only_list_their_articles() {
    let source = TempDir::new().unwrap();
    let (out, _) = build(&SiteConfig::default(), source.path());

    let store = ArticleStore::bundled();
    for category in store.categories() {
        let html = read(
            out.path(),
            &format!("insights/category/{}/index.html", category.slug()),
        );
        for article in store.all() {
            let link = format!(r#"href="/insights/{}/""#, article.slug);
            assert_eq!(
                html.contains(&link),
                article.category == category,
                "{} on {} page",
                article.slug,
                category.slug()
            );
        }
    }
}

#[test]
fn case_study_pages_for_every_layout() {
    let source = TempDir::new().unwrap();
    let mut config = SiteConfig::default();
    config.case_studies.default_layout = Layout::Timeline;
    let (out, _) = build(&config, source.path());

    for record in case_study::bundled() {
        let index = read(out.path(), &format!("case-studies/{}/index.html", record.id));
        assert!(index.contains("layout-timeline"));
        for layout in Layout::ALL {
            let html = read(
                out.path(),
                &format!("case-studies/{}/{}.html", record.id, layout.id()),
            );
            assert!(html.contains(&format!("layout-{}", layout.id())));
            assert!(html.contains(&record.annual_impact));
        }
    }
}

#[test]
fn showcase_pages_select_each_layout() {
    let source = TempDir::new().unwrap();
    let (out, _) = build(&SiteConfig::default(), source.path());

    let index = read(out.path(), "case-study-alternatives/index.html");
    assert!(index.contains(r#"<a href="/case-study-alternatives/hero.html" class="active">"#));
    for layout in Layout::ALL {
        let html = read(out.path(), &format!("case-study-alternatives/{}.html", layout.id()));
        assert!(html.contains(layout.info().description));
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
    }
}

#[test]
fn manifest_lists_generated_pages() {
    let source = TempDir::new().unwrap();
    let (out, report) = build(&SiteConfig::default(), source.path());

    let manifest: serde_json::Value =
        serde_json::from_str(&read(out.path(), "site-manifest.json")).unwrap();
    let pages = manifest["pages"].as_array().unwrap();
    assert_eq!(pages.len(), report.pages.len());
    assert_eq!(manifest["site"], "Insights");
    assert!(
        pages
            .iter()
            .any(|p| p["kind"] == "article" && p["path"] == "insights/how-to-pick-your-first-ai-workflow/index.html")
    );
}

#[test]
fn config_colors_and_assets_reach_output() {
    let source = TempDir::new().unwrap();
    fs::write(
        source.path().join("config.toml"),
        r##"
[site]
name = "Field Notes"

[insights]
show_tldr = false

[colors.light]
primary = "#ff00aa"
"##,
    )
    .unwrap();
    fs::create_dir_all(source.path().join("assets")).unwrap();
    fs::write(source.path().join("assets/favicon.ico"), [0u8; 4]).unwrap();

    let config = config::load_config(source.path()).unwrap();
    let (out, report) = build(&config, source.path());

    assert_eq!(report.assets_copied, 1);
    assert!(out.path().join("assets/favicon.ico").is_file());

    let index = read(out.path(), "insights/index.html");
    assert!(index.contains("--color-primary: #ff00aa"));
    assert!(index.contains("Field Notes"));

    let slug = &ArticleStore::bundled().all()[0].slug;
    let article = read(out.path(), &format!("insights/{slug}/index.html"));
    assert!(!article.contains("TL;DR"));
}
