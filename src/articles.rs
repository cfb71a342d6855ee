//! The article store: a fixed, read-only collection of insight articles.
//!
//! The bundled dataset lives in `data/articles.toml` and is compiled into the
//! binary. It is parsed once, on first use, into a process-wide store that is
//! never mutated afterwards, so any number of readers can share it.
//!
//! ## Queries
//!
//! | Query | Result order |
//! |-------|--------------|
//! | [`ArticleStore::get_by_slug`] | single article or `None` |
//! | [`ArticleStore::all`] | dataset order |
//! | [`ArticleStore::by_category`] | dataset order, filtered |
//! | [`ArticleStore::featured`] | dataset order, filtered |
//! | [`ArticleStore::categories`] | first appearance |
//!
//! Dataset order is display order. Slug uniqueness is checked at load time:
//! a duplicate slug is an authoring bug and the load fails rather than
//! silently shadowing one of the articles.

use crate::render;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

const BUNDLED_ARTICLES: &str = include_str!("../data/articles.toml");

static BUNDLED: LazyLock<ArticleStore> = LazyLock::new(|| {
    ArticleStore::from_toml(BUNDLED_ARTICLES).expect("bundled articles must load")
});

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate article slug: {0}")]
    DuplicateSlug(String),
    #[error("Invalid article {slug:?}: {reason}")]
    Invalid { slug: String, reason: String },
}

/// Article category. The set is closed; every article has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Getting Started")]
    GettingStarted,
    #[serde(rename = "Best Practices")]
    BestPractices,
    #[serde(rename = "Implementation")]
    Implementation,
    #[serde(rename = "Strategy")]
    Strategy,
    #[serde(rename = "Advanced Strategies")]
    AdvancedStrategies,
    #[serde(rename = "Business Value")]
    BusinessValue,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::GettingStarted,
        Category::BestPractices,
        Category::Implementation,
        Category::Strategy,
        Category::AdvancedStrategies,
        Category::BusinessValue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::GettingStarted => "Getting Started",
            Category::BestPractices => "Best Practices",
            Category::Implementation => "Implementation",
            Category::Strategy => "Strategy",
            Category::AdvancedStrategies => "Advanced Strategies",
            Category::BusinessValue => "Business Value",
        }
    }

    /// URL path segment for the category listing page.
    pub fn slug(self) -> &'static str {
        match self {
            Category::GettingStarted => "getting-started",
            Category::BestPractices => "best-practices",
            Category::Implementation => "implementation",
            Category::Strategy => "strategy",
            Category::AdvancedStrategies => "advanced-strategies",
            Category::BusinessValue => "business-value",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::GettingStarted => "First steps for picking and launching an AI workflow",
            Category::BestPractices => "Guardrails and habits that keep AI rollouts safe",
            Category::Implementation => "Moving from pilot to production without surprises",
            Category::Strategy => "Why adoption stalls and how to plan around it",
            Category::AdvancedStrategies => "Scaling AI across teams and departments",
            Category::BusinessValue => "Measuring the return on AI investments",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Short structured summary shown above the article body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tldr {
    pub summary: String,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Article {
    /// Unique identifier, also the URL path segment.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    /// Display label, e.g. "5 min read".
    pub read_time: String,
    /// Display label, e.g. "April 2025".
    pub publish_date: String,
    #[serde(default)]
    pub featured: bool,
    pub tldr: Tldr,
    /// Long-form text with lightweight markup, see [`crate::render`].
    pub body: String,
}

impl Article {
    /// First paragraph of the body as plain text, cut to `max_len` characters.
    ///
    /// Bold and link markup is removed. Longer paragraphs keep `max_len - 3`
    /// characters followed by `...`.
    pub fn description(&self, max_len: usize) -> String {
        let raw = self.body.split("\n\n").next().unwrap_or_default().trim();
        let first = render::spans_to_plain(&render::parse_inline(raw));
        if first.chars().count() <= max_len {
            return first;
        }
        let kept: String = first.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }

    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Dataset {
    #[serde(default, rename = "article")]
    articles: Vec<Article>,
}

/// Read-only article collection.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    /// The dataset compiled into the binary.
    pub fn bundled() -> &'static ArticleStore {
        &BUNDLED
    }

    /// Parse a dataset of `[[article]]` tables.
    pub fn from_toml(source: &str) -> Result<Self, StoreError> {
        let dataset: Dataset = toml::from_str(source)?;
        let store = Self::new(dataset.articles)?;
        tracing::debug!(count = store.articles.len(), "loaded article dataset");
        Ok(store)
    }

    /// Build a store, rejecting duplicate slugs and blank identifiers.
    pub fn new(articles: Vec<Article>) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        for article in &articles {
            if article.slug.trim().is_empty() {
                return Err(StoreError::Invalid {
                    slug: article.slug.clone(),
                    reason: "slug is empty".into(),
                });
            }
            if article.title.trim().is_empty() {
                return Err(StoreError::Invalid {
                    slug: article.slug.clone(),
                    reason: "title is empty".into(),
                });
            }
            if !seen.insert(article.slug.as_str()) {
                return Err(StoreError::DuplicateSlug(article.slug.clone()));
            }
        }
        Ok(Self { articles })
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn by_category(&self, category: Category) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn featured(&self) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.featured).collect()
    }

    pub fn article_count_by_category(&self, category: Category) -> usize {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .count()
    }

    /// Distinct categories present in the dataset, in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for article in &self.articles {
            if !out.contains(&article.category) {
                out.push(article.category);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::article;

    fn small_store() -> ArticleStore {
        ArticleStore::new(vec![
            article("first", Category::GettingStarted, true),
            article("second", Category::Strategy, false),
            article("third", Category::GettingStarted, false),
            article("fourth", Category::BusinessValue, true),
        ])
        .unwrap()
    }

    #[test]
    fn bundled_dataset_loads() {
        let store = ArticleStore::bundled();
        assert_eq!(store.len(), 6);
        assert_eq!(
            store.all()[0].slug,
            "how-to-pick-your-first-ai-workflow"
        );
    }

    #[test]
    fn bundled_slug_lookup_returns_same_article() {
        let store = ArticleStore::bundled();
        for a in store.all() {
            let found = store.get_by_slug(&a.slug).unwrap();
            assert!(std::ptr::eq(found, a));
        }
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(ArticleStore::bundled().get_by_slug("no-such-article").is_none());
    }

    #[test]
    fn categories_partition_all_articles() {
        let store = ArticleStore::bundled();
        let total: usize = store
            .categories()
            .into_iter()
            .map(|c| store.by_category(c).len())
            .sum();
        assert_eq!(total, store.len());
    }

    #[test]
    fn featured_is_ordered_subsequence() {
        let store = small_store();
        let featured: Vec<&str> = store.featured().iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(featured, vec!["first", "fourth"]);

        let bundled = ArticleStore::bundled();
        let mut cursor = 0;
        for f in bundled.featured() {
            assert!(f.featured);
            let pos = bundled.all()[cursor..]
                .iter()
                .position(|a| a.slug == f.slug)
                .expect("featured article out of order");
            cursor += pos + 1;
        }
    }

    #[test]
    fn by_category_preserves_order() {
        let store = small_store();
        let slugs: Vec<&str> = store
            .by_category(Category::GettingStarted)
            .iter()
            .map(|a| a.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["first", "third"]);
        assert!(store.by_category(Category::AdvancedStrategies).is_empty());
    }

    #[test]
    fn counts_and_categories() {
        let store = small_store();
        assert_eq!(store.article_count_by_category(Category::GettingStarted), 2);
        assert_eq!(store.article_count_by_category(Category::BestPractices), 0);
        assert_eq!(
            store.categories(),
            vec![
                Category::GettingStarted,
                Category::Strategy,
                Category::BusinessValue
            ]
        );
    }

    #[test]
    fn duplicate_slug_rejected() {
        let result = ArticleStore::new(vec![
            article("same", Category::Strategy, false),
            article("same", Category::BusinessValue, false),
        ]);
        assert!(matches!(result, Err(StoreError::DuplicateSlug(s)) if s == "same"));
    }

    #[test]
    fn empty_slug_rejected() {
        let result = ArticleStore::new(vec![article(" ", Category::Strategy, false)]);
        assert!(matches!(result, Err(StoreError::Invalid { .. })));
    }

    #[test]
    fn from_toml_parses_category_labels() {
        let source = r#"
[[article]]
slug = "a"
title = "A"
excerpt = "e"
category = "Advanced Strategies"
read_time = "2 min read"
publish_date = "May 2025"
body = "Hello"

[article.tldr]
summary = "s"
"#;
        let store = ArticleStore::from_toml(source).unwrap();
        let a = store.get_by_slug("a").unwrap();
        assert_eq!(a.category, Category::AdvancedStrategies);
        assert!(!a.featured);
        assert!(a.tldr.points.is_empty());
    }

    #[test]
    fn from_toml_rejects_unknown_category() {
        let source = r#"
[[article]]
slug = "a"
title = "A"
excerpt = "e"
category = "Gossip"
read_time = "2 min read"
publish_date = "May 2025"
body = "Hello"
tldr = { summary = "s" }
"#;
        assert!(matches!(
            ArticleStore::from_toml(source),
            Err(StoreError::Toml(_))
        ));
    }

    #[test]
    fn empty_dataset_is_empty_store() {
        let store = ArticleStore::from_toml("").unwrap();
        assert!(store.is_empty());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn category_slug_roundtrip() {
        for c in Category::ALL {
            assert_eq!(Category::from_slug(c.slug()), Some(c));
        }
        assert_eq!(Category::from_slug("nope"), None);
    }

    #[test]
    fn description_truncates_first_paragraph() {
        let mut a = article("x", Category::Strategy, false);
        a.body = format!("{}\n\nSecond paragraph.", "word ".repeat(50));
        let desc = a.description(160);
        assert_eq!(desc.chars().count(), 160);
        assert!(desc.ends_with("..."));

        a.body = "Short intro.\n\nMore.".to_string();
        assert_eq!(a.description(160), "Short intro.");
    }

    #[test]
    fn description_drops_inline_markup() {
        let mut a = article("x", Category::Strategy, false);
        a.body = "Start **small** and read [the guide](https://example.com).\n\nMore.".to_string();
        assert_eq!(a.description(160), "Start small and read the guide.");
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        let mut a = article("x", Category::Strategy, false);
        a.body = "one two\n\nthree".to_string();
        assert_eq!(a.word_count(), 3);
    }
}
