//! Case-study records and their presentation layouts.
//!
//! A [`CaseStudy`] is one normalized success story: narrative fields, an
//! ordered list of implementation steps, an ordered list of [`Metric`]s and
//! two optional fragments (timeline, client quote). The same record can be
//! presented by any of six [`Layout`]s; each layout is a pure function from
//! record + [`ViewState`] to a [`View`] tree.
//!
//! ```text
//! CaseStudy ──┐
//!             ├── layouts::render(layout) ──► View { nodes: [Node, ...] } ──► generate (HTML)
//! ViewState ──┘
//! ```
//!
//! Optional fields are never rendered as placeholders: when `timeline` or
//! `client_quote` is absent, the fragments that depend on it are left out of
//! the tree entirely.

pub mod layouts;
pub mod state;
pub mod view;

pub use layouts::{Layout, UnknownLayout, render};
pub use state::{AccordionSection, AccordionState, Card, CardState, InteractiveState, ShowcaseState, UnknownId, ViewState};
pub use view::{Node, View};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const BUNDLED_CASE_STUDIES: &str = include_str!("../../data/case-studies.toml");

static BUNDLED: LazyLock<Vec<CaseStudy>> = LazyLock::new(|| {
    from_toml(BUNDLED_CASE_STUDIES).expect("bundled case studies must load")
});

#[derive(Error, Debug)]
pub enum CaseStudyError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate case study id: {0}")]
    DuplicateId(String),
}

/// Badge color for the category label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Neutral,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
            Tone::Neutral => "neutral",
        }
    }
}

/// Direction tag on a metric. Only ever used to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    /// Short display string, e.g. `"89%"`.
    pub value: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl Metric {
    /// CSS class for the metric value.
    pub fn color_class(&self) -> &'static str {
        match self.trend {
            Some(Trend::Down) => "text-error",
            _ => "text-primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientQuote {
    pub text: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseStudy {
    pub id: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<Tone>,
    pub title: String,
    pub challenge: String,
    pub solution: String,
    #[serde(default)]
    pub implementation: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub annual_impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_quote: Option<ClientQuote>,
}

impl CaseStudy {
    pub fn tone(&self) -> Tone {
        self.category_color.unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Dataset {
    #[serde(default, rename = "case_study")]
    case_studies: Vec<CaseStudy>,
}

/// The records compiled into the binary.
pub fn bundled() -> &'static [CaseStudy] {
    &BUNDLED
}

/// Parse `[[case_study]]` tables, rejecting duplicate ids.
pub fn from_toml(source: &str) -> Result<Vec<CaseStudy>, CaseStudyError> {
    let dataset: Dataset = toml::from_str(source)?;
    let mut seen = HashSet::new();
    for record in &dataset.case_studies {
        if !seen.insert(record.id.as_str()) {
            return Err(CaseStudyError::DuplicateId(record.id.clone()));
        }
    }
    tracing::debug!(count = dataset.case_studies.len(), "loaded case studies");
    Ok(dataset.case_studies)
}
