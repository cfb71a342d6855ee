//! Display tree produced by the case-study layouts.
//!
//! The tree describes *what* is shown and in which order; mapping nodes to
//! markup and CSS is left to [`crate::generate`]. Static boilerplate text
//! (taglines, section titles, call-to-action copy) is carried as
//! `&'static str`, record data as owned `String`s.

use super::layouts::Layout;
use super::{ClientQuote, Metric, Tone};

/// A rendered case study: the layout that produced it and its top-level nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub layout: Layout,
    pub nodes: Vec<Node>,
}

impl View {
    /// Every node in depth-first order, including nested ones and the
    /// expanded-detail content of interactive cards.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.nodes {
            collect(node, &mut out);
        }
        out
    }

    pub fn has_quote(&self) -> bool {
        self.walk().iter().any(|n| matches!(n, Node::Quote(_)))
    }

    /// Find a section by id anywhere in the tree.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.walk().into_iter().find_map(|n| match n {
            Node::Section(s) if s.id == id => Some(s),
            _ => None,
        })
    }
}

fn collect<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    out.push(node);
    match node {
        Node::Section(section) => {
            for child in &section.children {
                collect(child, out);
            }
            if let Disclosure::Expandable { details, .. } = &section.disclosure {
                for child in details {
                    collect(child, out);
                }
            }
        }
        Node::Grid(children) => {
            for child in children {
                collect(child, out);
            }
        }
        Node::Columns { main, sidebar } => {
            for child in main.iter().chain(sidebar) {
                collect(child, out);
            }
        }
        _ => {}
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Header(Header),
    Section(Section),
    /// Cards laid out side by side.
    Grid(Vec<Node>),
    /// Main content with a sticky sidebar.
    Columns { main: Vec<Node>, sidebar: Vec<Node> },
    Paragraph(String),
    Metrics { metrics: Vec<Metric>, density: Density },
    /// Metric values only, shown on a collapsed section header.
    MetricChips(Vec<String>),
    /// Highlighted `label: text` line, e.g. annual impact or timeline.
    Callout { label: &'static str, text: String },
    /// Small `label: text` detail line.
    Detail { label: &'static str, text: String },
    Steps { items: Vec<String>, numbered: bool },
    Facts(Vec<Fact>),
    /// A large centered value with a caption under it.
    Figure { value: String, caption: &'static str },
    Quote(ClientQuote),
    CallToAction(CallToAction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub category: String,
    pub tone: Tone,
    pub title: String,
    pub tagline: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable identifier, also used as the HTML anchor.
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub subtitle: Option<String>,
    /// Position in a numbered sequence (timeline layout).
    pub step: Option<u8>,
    pub style: SectionStyle,
    /// Grid columns spanned, out of three.
    pub span: Option<u8>,
    pub disclosure: Disclosure,
    pub children: Vec<Node>,
}

impl Section {
    pub fn new(id: &'static str, title: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            title,
            icon,
            subtitle: None,
            step: None,
            style: SectionStyle::Plain,
            span: None,
            disclosure: Disclosure::Always,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn styled(mut self, style: SectionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn spanning(mut self, columns: u8) -> Self {
        self.span = Some(columns);
        self
    }

    pub fn is_open(&self) -> bool {
        match &self.disclosure {
            Disclosure::Always => true,
            Disclosure::Accordion { open } => *open,
            Disclosure::Expandable { expanded, .. } => *expanded,
        }
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStyle {
    Plain,
    Highlight,
    Subtle,
    /// Timeline stages.
    Before,
    During,
    After,
}

impl SectionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionStyle::Plain => "plain",
            SectionStyle::Highlight => "highlight",
            SectionStyle::Subtle => "subtle",
            SectionStyle::Before => "before",
            SectionStyle::During => "during",
            SectionStyle::After => "after",
        }
    }
}

/// How a section's body is revealed.
#[derive(Debug, Clone, PartialEq)]
pub enum Disclosure {
    Always,
    Accordion { open: bool },
    /// Body always visible; `details` only when expanded.
    Expandable {
        expanded: bool,
        hovered: bool,
        details: Vec<Node>,
    },
}

/// How much room a metrics group gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    Hero,
    Compact,
    Floating,
}

impl Density {
    pub fn as_str(self) -> &'static str {
        match self {
            Density::Hero => "hero",
            Density::Compact => "compact",
            Density::Floating => "floating",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub actions: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_parents_before_children() {
        let section = Section::new("results", "Results", "📊")
            .with_children(vec![Node::Paragraph("inside".into())]);
        let view = View {
            layout: Layout::Hero,
            nodes: vec![
                Node::Columns {
                    main: vec![section.into()],
                    sidebar: vec![Node::Paragraph("side".into())],
                },
                Node::Paragraph("after".into()),
            ],
        };
        let order: Vec<&str> = view
            .walk()
            .into_iter()
            .map(|n| match n {
                Node::Columns { .. } => "columns",
                Node::Section(_) => "section",
                Node::Paragraph(text) => text.as_str(),
                _ => "other",
            })
            .collect();
        assert_eq!(order, ["columns", "section", "inside", "side", "after"]);
        assert!(view.section("results").is_some());
    }
}
