//! The six case-study layouts and the dispatcher that selects between them.
//!
//! | Layout | Metrics shown | Interactive state |
//! |--------|---------------|-------------------|
//! | [`Layout::Hero`] | all, large | none |
//! | [`Layout::Accordion`] | all, inside the results section | one open section |
//! | [`Layout::Timeline`] | all, in the final step | none |
//! | [`Layout::Modular`] | first three, then the rest in a second module | none |
//! | [`Layout::Floating`] | all, in the sidebar | none |
//! | [`Layout::Interactive`] | all, inside the results card | expanded/hovered per card |
//!
//! Each layout lives in its own module and exposes
//! `fn build(&CaseStudy, &ViewState) -> Vec<Node>`. [`render`] matches on
//! the layout exhaustively, so a new variant does not compile until it has
//! a builder.

mod accordion;
mod floating;
mod hero;
mod interactive;
mod modular;
mod timeline;

use super::state::ViewState;
use super::view::{Header, Node, View};
use super::CaseStudy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown layout {id:?} (expected one of: {expected})")]
pub struct UnknownLayout {
    pub id: String,
    pub expected: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Hero,
    Accordion,
    Timeline,
    Modular,
    Floating,
    Interactive,
}

impl Layout {
    pub const ALL: [Layout; 6] = [
        Layout::Hero,
        Layout::Accordion,
        Layout::Timeline,
        Layout::Modular,
        Layout::Floating,
        Layout::Interactive,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Layout::Hero => "hero",
            Layout::Accordion => "accordion",
            Layout::Timeline => "timeline",
            Layout::Modular => "modular",
            Layout::Floating => "floating",
            Layout::Interactive => "interactive",
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Showcase copy for the layout switcher.
    pub fn info(self) -> &'static LayoutInfo {
        match self {
            Layout::Hero => &HERO_INFO,
            Layout::Accordion => &ACCORDION_INFO,
            Layout::Timeline => &TIMELINE_INFO,
            Layout::Modular => &MODULAR_INFO,
            Layout::Floating => &FLOATING_INFO,
            Layout::Interactive => &INTERACTIVE_INFO,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.id() == s)
            .ok_or_else(|| UnknownLayout {
                id: s.to_string(),
                expected: Self::ALL.map(Layout::id).join(", "),
            })
    }
}

#[derive(Debug)]
pub struct LayoutInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub pros: [&'static str; 3],
    pub best_for: &'static str,
    pub inspiration: &'static str,
}

static HERO_INFO: LayoutInfo = LayoutInfo {
    name: "Results-First Hero",
    description: "Lead with impact metrics in a prominent hero section, followed by story details",
    pros: ["Immediate impact visibility", "Executive-friendly", "Puts outcomes before process"],
    best_for: "Stakeholder presentations, high-impact metrics",
    inspiration: "Customer story pages",
};

static ACCORDION_INFO: LayoutInfo = LayoutInfo {
    name: "Progressive Disclosure",
    description: "Expandable sections that reveal details on demand",
    pros: ["Scannable overview", "Mobile-friendly", "Reduces cognitive load"],
    best_for: "Complex case studies, mobile users",
    inspiration: "Documentation-style layouts",
};

static TIMELINE_INFO: LayoutInfo = LayoutInfo {
    name: "Visual Timeline",
    description: "Step-by-step visual progression showing the transformation journey",
    pros: ["Strong narrative flow", "Process transparency", "Visual engagement"],
    best_for: "Process-focused stories, transformation narratives",
    inspiration: "Narrative storytelling",
};

static MODULAR_INFO: LayoutInfo = LayoutInfo {
    name: "Modular Grid",
    description: "Mix-and-match card components for different case study needs",
    pros: ["Flexible layouts", "Component reusability", "Visual variety"],
    best_for: "Varied content types, design system flexibility",
    inspiration: "Component-based design systems",
};

static FLOATING_INFO: LayoutInfo = LayoutInfo {
    name: "Floating Sidebar",
    description: "Sticky metrics panel with detailed story content",
    pros: ["Constant metric visibility", "Clean content separation", "Desktop-optimized"],
    best_for: "Long-form content, desktop users, detailed stories",
    inspiration: "Dashboard and documentation layouts",
};

static INTERACTIVE_INFO: LayoutInfo = LayoutInfo {
    name: "Interactive Hover States",
    description: "Subtle animations and expanded details on hover/click",
    pros: ["Modern feel", "Progressive disclosure", "Enhanced engagement"],
    best_for: "Interactive experiences, modern brands, tech-savvy users",
    inspiration: "Modern web interactions",
};

/// Render a record with the given layout.
pub fn render(record: &CaseStudy, layout: Layout, state: &ViewState) -> View {
    let nodes = match layout {
        Layout::Hero => hero::build(record, state),
        Layout::Accordion => accordion::build(record, state),
        Layout::Timeline => timeline::build(record, state),
        Layout::Modular => modular::build(record, state),
        Layout::Floating => floating::build(record, state),
        Layout::Interactive => interactive::build(record, state),
    };
    tracing::trace!(id = %record.id, %layout, nodes = nodes.len(), "rendered case study");
    View { layout, nodes }
}

// ============================================================================
// Shared fragments
// ============================================================================

fn header(record: &CaseStudy, tagline: Option<&'static str>) -> Node {
    Node::Header(Header {
        category: record.category.clone(),
        tone: record.tone(),
        title: record.title.clone(),
        tagline,
    })
}

fn annual_impact(record: &CaseStudy) -> Node {
    Node::Callout {
        label: "Annual Impact",
        text: record.annual_impact.clone(),
    }
}

fn timeline_callout(record: &CaseStudy, label: &'static str) -> Option<Node> {
    record.timeline.as_ref().map(|t| Node::Callout {
        label,
        text: t.clone(),
    })
}

fn quote(record: &CaseStudy) -> Option<Node> {
    record.client_quote.clone().map(Node::Quote)
}
