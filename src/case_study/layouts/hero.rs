//! Results-first hero: metrics and annual impact up front, then the story in
//! three columns, then the client quote.

use super::{annual_impact, header, quote, timeline_callout};
use crate::case_study::CaseStudy;
use crate::case_study::state::ViewState;
use crate::case_study::view::{Density, Node, Section};

pub(super) fn build(record: &CaseStudy, _state: &ViewState) -> Vec<Node> {
    let mut nodes = vec![
        header(
            record,
            Some("See the measurable impact achieved through intelligent automation"),
        ),
        Node::Metrics {
            metrics: record.metrics.clone(),
            density: Density::Hero,
        },
        annual_impact(record),
    ];

    let mut implementation = vec![Node::Steps {
        items: record.implementation.clone(),
        numbered: false,
    }];
    implementation.extend(timeline_callout(record, "Timeline"));

    nodes.push(Node::Grid(vec![
        Section::new("challenge", "Challenge", "⚠️")
            .with_children(vec![Node::Paragraph(record.challenge.clone())])
            .into(),
        Section::new("solution", "Solution", "💡")
            .with_children(vec![Node::Paragraph(record.solution.clone())])
            .into(),
        Section::new("implementation", "Implementation", "🔧")
            .with_children(implementation)
            .into(),
    ]));

    nodes.extend(quote(record));
    nodes
}
