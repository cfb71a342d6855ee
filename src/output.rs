//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (article, category, case study, page) is its semantic
//! identity: positional index and title. Supporting facts and output paths
//! follow as indented context lines or after a `→`.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Insights (6 articles)
//!     Getting Started (2 articles)
//!         001 How to Pick Your First AI Workflow *
//!             5 min read · April 2025 · 812 words
//!
//! Case Studies
//! 001 Workflow Automation
//!     Category: Financial Services (info)
//!     Metrics: 89%, 40%, 15%
//!     Timeline: 6-week implementation
//!     Quote: Sarah Johnson, VP of Operations
//!
//! Config
//!     Site: Insights (https://example.com)
//!     Default layout: hero
//!     Showcase: workflow-automation-financial-services
//! ```
//!
//! ## Generate
//!
//! ```text
//! Insights → insights/index.html
//!     001 Getting Started → insights/category/getting-started/index.html
//! Articles
//!     001 How to Pick Your First AI Workflow → insights/how-to-pick-your-first-ai-workflow/index.html
//! Case Studies → case-studies/index.html
//!     001 Workflow Automation → case-studies/workflow-automation-financial-services/index.html
//! Layout Showcase
//!     001 Results-First Hero → case-study-alternatives/index.html
//!
//! Generated 6 articles, 4 categories, 14 case-study pages, 7 showcase pages, 0 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::articles::ArticleStore;
use crate::case_study::CaseStudy;
use crate::config::SiteConfig;
use crate::generate::{PageKind, SiteReport};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional marker.
///
/// ```text
/// 001 How to Pick Your First AI Workflow *
/// 002 Guardrails for Your First Deployment
/// ```
fn entity_header(index: usize, title: &str, featured: bool) -> String {
    if featured {
        format!("{} {} *", format_index(index), title)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

/// Pluralize a count: `1 article`, `2 articles`.
fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max).collect();
        format!("{}...", kept)
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the content inventory: articles grouped by category, case-study
/// records, then the resolved config values that shape the build.
pub fn format_check_output(
    store: &ArticleStore,
    case_studies: &[CaseStudy],
    config: &SiteConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Insights ({})", counted(store.len(), "article")));
    for category in store.categories() {
        let articles = store.by_category(category);
        lines.push(format!(
            "{}{} ({})",
            indent(1),
            category.label(),
            counted(articles.len(), "article")
        ));
        for (i, article) in articles.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(2),
                entity_header(i + 1, &article.title, article.featured)
            ));
            lines.push(format!(
                "{}{} · {} · {}",
                indent(3),
                article.read_time,
                article.publish_date,
                counted(article.word_count(), "word")
            ));
        }
    }

    lines.push(String::new());
    lines.push("Case Studies".to_string());
    for (i, record) in case_studies.iter().enumerate() {
        lines.push(entity_header(i + 1, &record.title, false));
        lines.push(format!(
            "{}Category: {} ({})",
            indent(1),
            record.category,
            record.tone().as_str()
        ));
        if !record.metrics.is_empty() {
            let values: Vec<&str> = record.metrics.iter().map(|m| m.value.as_str()).collect();
            lines.push(format!("{}Metrics: {}", indent(1), values.join(", ")));
        }
        if let Some(timeline) = &record.timeline {
            lines.push(format!("{}Timeline: {}", indent(1), timeline));
        }
        if let Some(quote) = &record.client_quote {
            lines.push(format!(
                "{}Quote: {}, {}",
                indent(1),
                quote.author,
                truncate_desc(&quote.role, 40)
            ));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!(
        "{}Site: {} ({})",
        indent(1),
        config.site.name,
        config.site.base_url
    ));
    lines.push(format!(
        "{}Default layout: {}",
        indent(1),
        config.case_studies.default_layout
    ));
    lines.push(format!("{}Showcase: {}", indent(1), config.case_studies.showcase));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(store: &ArticleStore, case_studies: &[CaseStudy], config: &SiteConfig) {
    for line in format_check_output(store, case_studies, config) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format generate output.
///
/// Information-first: each page leads with its positional index and title,
/// followed by `→` and the output path. Pages keep their generation order
/// within each group.
pub fn format_generate_output(report: &SiteReport) -> Vec<String> {
    let mut lines = Vec::new();
    let pages_of = |kind: PageKind| report.pages.iter().filter(move |p| p.kind == kind);

    for page in pages_of(PageKind::InsightsIndex) {
        lines.push(format!("Insights \u{2192} {}", page.path));
    }
    for (i, page) in pages_of(PageKind::Category).enumerate() {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            entity_header(i + 1, &page.title, false),
            page.path
        ));
    }

    lines.push("Articles".to_string());
    for (i, page) in pages_of(PageKind::Article).enumerate() {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            entity_header(i + 1, &page.title, false),
            page.path
        ));
    }

    match pages_of(PageKind::CaseStudyIndex).next() {
        Some(page) => lines.push(format!("Case Studies \u{2192} {}", page.path)),
        None => lines.push("Case Studies".to_string()),
    }
    for (i, page) in pages_of(PageKind::CaseStudy).enumerate() {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            entity_header(i + 1, &page.title, false),
            page.path
        ));
    }

    lines.push("Layout Showcase".to_string());
    for (i, page) in pages_of(PageKind::Showcase).enumerate() {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            entity_header(i + 1, &page.title, false),
            page.path
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}, {}, {}",
        counted(report.count(PageKind::Article), "article"),
        counted(report.count(PageKind::Category), "category page"),
        counted(report.count(PageKind::CaseStudy), "case-study page"),
        counted(report.count(PageKind::Showcase), "showcase page"),
        counted(report.assets_copied, "asset"),
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &SiteReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::Category;
    use crate::case_study;
    use crate::generate::PageEntry;
    use crate::test_helpers::{article, sample_record};

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn entity_header_marks_featured() {
        assert_eq!(entity_header(1, "Title", true), "001 Title *");
        assert_eq!(entity_header(2, "Title", false), "002 Title");
    }

    #[test]
    fn counted_pluralizes() {
        assert_eq!(counted(1, "article"), "1 article");
        assert_eq!(counted(0, "article"), "0 articles");
        assert_eq!(counted(3, "word"), "3 words");
    }

    #[test]
    fn truncate_desc_long() {
        let text = "é".repeat(50);
        let expected = format!("{}...", "é".repeat(40));
        assert_eq!(truncate_desc(&text, 40), expected);
        assert_eq!(truncate_desc("Short text", 40), "Short text");
    }

    // =========================================================================
    // Check output tests
    // =========================================================================

    #[test]
    fn check_output_groups_articles_by_category() {
        let store = ArticleStore::new(vec![
            article("a", Category::Strategy, true),
            article("b", Category::GettingStarted, false),
            article("c", Category::Strategy, false),
        ])
        .unwrap();
        let lines = format_check_output(&store, &[], &SiteConfig::default());

        assert_eq!(lines[0], "Insights (3 articles)");
        assert_eq!(lines[1], "    Strategy (2 articles)");
        assert_eq!(lines[2], "        001 Title of a *");
        assert!(lines[3].starts_with("            3 min read · May 2025 · "));
        assert_eq!(lines[4], "        002 Title of c");
        assert_eq!(lines[6], "    Getting Started (1 article)");
    }

    #[test]
    fn check_output_lists_case_study_facts() {
        let store = ArticleStore::default();
        let mut bare = sample_record();
        bare.timeline = None;
        bare.client_quote = None;
        bare.metrics.clear();
        let records = vec![sample_record(), bare];
        let lines = format_check_output(&store, &records, &SiteConfig::default());

        let start = lines.iter().position(|l| l == "Case Studies").unwrap();
        assert_eq!(lines[start + 1], "001 Workflow Automation");
        assert_eq!(lines[start + 2], "    Category: Financial Services (info)");
        assert_eq!(lines[start + 3], "    Metrics: 89%, 40%, 15%");
        assert_eq!(lines[start + 4], "    Timeline: 6-week implementation");
        assert!(lines[start + 5].starts_with("    Quote: Sarah Johnson, "));
        assert_eq!(lines[start + 6], "002 Workflow Automation");
        assert_eq!(lines[start + 7], "    Category: Financial Services (info)");
        assert_eq!(lines[start + 8], "");
    }

    #[test]
    fn check_output_shows_config() {
        let lines = format_check_output(
            ArticleStore::bundled(),
            case_study::bundled(),
            &SiteConfig::default(),
        );
        assert!(lines.contains(&"    Default layout: hero".to_string()));
        assert!(lines.contains(&"    Site: Insights (https://example.com)".to_string()));
    }

    // =========================================================================
    // Generate output tests
    // =========================================================================

    fn page(kind: PageKind, title: &str, path: &str) -> PageEntry {
        PageEntry {
            kind,
            title: title.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn generate_output_groups_pages() {
        let report = SiteReport {
            pages: vec![
                page(PageKind::InsightsIndex, "Insights", "insights/index.html"),
                page(PageKind::Category, "Strategy", "insights/category/strategy/index.html"),
                page(PageKind::Article, "First", "insights/first/index.html"),
                page(PageKind::Article, "Second", "insights/second/index.html"),
                page(PageKind::CaseStudyIndex, "Case Studies", "case-studies/index.html"),
                page(PageKind::CaseStudy, "Study", "case-studies/s/index.html"),
                page(PageKind::Showcase, "Results-First Hero", "case-study-alternatives/index.html"),
            ],
            assets_copied: 1,
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines,
            vec![
                "Insights \u{2192} insights/index.html",
                "    001 Strategy \u{2192} insights/category/strategy/index.html",
                "Articles",
                "    001 First \u{2192} insights/first/index.html",
                "    002 Second \u{2192} insights/second/index.html",
                "Case Studies \u{2192} case-studies/index.html",
                "    001 Study \u{2192} case-studies/s/index.html",
                "Layout Showcase",
                "    001 Results-First Hero \u{2192} case-study-alternatives/index.html",
                "",
                "Generated 2 articles, 1 category page, 1 case-study page, 1 showcase page, 1 asset",
            ]
        );
    }
}
