//! Visual timeline: four numbered steps from challenge to results.

use super::{annual_impact, header, quote, timeline_callout};
use crate::case_study::CaseStudy;
use crate::case_study::state::ViewState;
use crate::case_study::view::{Density, Node, Section, SectionStyle};

pub(super) fn build(record: &CaseStudy, _state: &ViewState) -> Vec<Node> {
    let mut nodes = vec![header(
        record,
        Some("Follow the transformation journey from challenge to measurable success"),
    )];

    nodes.push(step(
        1,
        Section::new("challenge", "The Challenge", "⚠️").styled(SectionStyle::Before),
        vec![Node::Paragraph(record.challenge.clone())],
    ));
    nodes.push(step(
        2,
        Section::new("solution", "Solution Implementation", "🔄").styled(SectionStyle::During),
        vec![Node::Paragraph(record.solution.clone())],
    ));
    nodes.push(step(
        3,
        Section::new("implementation", "Implementation Process", "🔄").styled(SectionStyle::During),
        vec![Node::Paragraph(record.implementation.join(" • "))],
    ));
    nodes.push(step(
        4,
        Section::new("results", "Results & Impact", "✅").styled(SectionStyle::After),
        vec![
            Node::Paragraph("Measurable outcomes achieved through the implementation".to_string()),
            Node::Metrics {
                metrics: record.metrics.clone(),
                density: Density::Compact,
            },
        ],
    ));

    let mut complete = vec![annual_impact(record)];
    complete.extend(timeline_callout(record, "Total Timeline"));
    nodes.push(
        Section::new("complete", "Transformation Complete", "🏁")
            .styled(SectionStyle::Highlight)
            .with_children(complete)
            .into(),
    );

    nodes.extend(quote(record));
    nodes
}

fn step(number: u8, mut section: Section, children: Vec<Node>) -> Node {
    section.step = Some(number);
    section.with_children(children).into()
}
