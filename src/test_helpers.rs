//! Shared test utilities.
//!
//! Record builders for articles and case studies, plus lookup helpers over
//! rendered views that panic with a clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let record = record_with_metrics(vec![metric("10%"), metric("2x")]);
//! let view = render(&record, Layout::Modular, &ViewState::default());
//! let results = find_section(&view, "results");
//! assert_eq!(results.title, "Key Results");
//! ```

use crate::articles::{Article, Category, Tldr};
use crate::case_study::view::{Node, Section, View};
use crate::case_study::{self, CaseStudy, Metric};

// =========================================================================
// Record builders
// =========================================================================

/// A minimal article with a two-paragraph body.
pub fn article(slug: &str, category: Category, featured: bool) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("Title of {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        category,
        read_time: "3 min read".to_string(),
        publish_date: "May 2025".to_string(),
        featured,
        tldr: Tldr {
            summary: format!("Summary of {slug}"),
            points: vec!["First point".to_string(), "Second point".to_string()],
        },
        body: format!("Opening paragraph for {slug}.\n\n## Section\n\nClosing **bold** paragraph."),
    }
}

/// The first bundled case study. Has a timeline, a quote and three metrics.
pub fn sample_record() -> CaseStudy {
    case_study::bundled()[0].clone()
}

pub fn metric(value: &str) -> Metric {
    Metric {
        value: value.to_string(),
        description: format!("Description for {value}"),
        subtitle: None,
        trend: None,
    }
}

/// The sample record with its metrics replaced.
pub fn record_with_metrics(metrics: Vec<Metric>) -> CaseStudy {
    CaseStudy {
        metrics,
        ..sample_record()
    }
}

// =========================================================================
// View lookups, panic with a clear message on miss
// =========================================================================

/// Find a section by id anywhere in the view. Panics if not found.
pub fn find_section<'a>(view: &'a View, id: &str) -> &'a Section {
    view.section(id).unwrap_or_else(|| {
        panic!(
            "section '{id}' not found in {} layout. Available: {:?}",
            view.layout,
            section_ids(view)
        )
    })
}

/// Ids of every section in the view, in tree order.
pub fn section_ids(view: &View) -> Vec<&'static str> {
    view.walk()
        .into_iter()
        .filter_map(|n| match n {
            Node::Section(s) => Some(s.id),
            _ => None,
        })
        .collect()
}
