//! Progressive disclosure: collapsible sections, at most one open.
//!
//! Sections always carry their content; the `open` flag only decides what is
//! visible. A collapsed results section previews its first two metric values.

use super::{annual_impact, header, timeline_callout};
use crate::case_study::CaseStudy;
use crate::case_study::state::{AccordionSection, ViewState};
use crate::case_study::view::{Density, Disclosure, Node, Section};

pub(super) fn build(record: &CaseStudy, state: &ViewState) -> Vec<Node> {
    let accordion = &state.accordion;
    let mut nodes = vec![header(
        record,
        Some("Expand sections to explore the transformation journey"),
    )];

    let results_open = accordion.is_open(AccordionSection::Results);
    let mut results_body = Vec::new();
    if !results_open && !record.metrics.is_empty() {
        results_body.push(Node::MetricChips(
            record.metrics.iter().take(2).map(|m| m.value.clone()).collect(),
        ));
    }
    results_body.push(Node::Metrics {
        metrics: record.metrics.clone(),
        density: Density::Compact,
    });
    results_body.push(annual_impact(record));
    nodes.push(section(
        AccordionSection::Results,
        "Results & Impact",
        "✓",
        results_open,
        results_body,
    ));

    nodes.push(section(
        AccordionSection::Challenge,
        "Challenge",
        "⚠",
        accordion.is_open(AccordionSection::Challenge),
        vec![Node::Paragraph(record.challenge.clone())],
    ));

    nodes.push(section(
        AccordionSection::Solution,
        "Solution",
        "💡",
        accordion.is_open(AccordionSection::Solution),
        vec![Node::Paragraph(record.solution.clone())],
    ));

    let mut implementation = vec![Node::Steps {
        items: record.implementation.clone(),
        numbered: false,
    }];
    implementation.extend(timeline_callout(record, "Timeline"));
    nodes.push(section(
        AccordionSection::Implementation,
        "Implementation",
        "🔧",
        accordion.is_open(AccordionSection::Implementation),
        implementation,
    ));

    if let Some(quote) = &record.client_quote {
        nodes.push(section(
            AccordionSection::Testimonial,
            "Client Testimonial",
            "💬",
            accordion.is_open(AccordionSection::Testimonial),
            vec![Node::Quote(quote.clone())],
        ));
    }

    nodes
}

fn section(
    which: AccordionSection,
    title: &'static str,
    icon: &'static str,
    open: bool,
    children: Vec<Node>,
) -> Node {
    let mut section = Section::new(which.id(), title, icon).with_children(children);
    section.disclosure = Disclosure::Accordion { open };
    section.into()
}
