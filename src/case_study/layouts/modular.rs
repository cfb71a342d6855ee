//! Modular grid: mix-and-match cards. Shows the first three metrics as key
//! results and moves any further metrics into a separate module.

use super::{header, quote};
use crate::case_study::CaseStudy;
use crate::case_study::state::ViewState;
use crate::case_study::view::{CallToAction, Density, Node, Section, SectionStyle};

const KEY_RESULTS: usize = 3;

pub(super) fn build(record: &CaseStudy, _state: &ViewState) -> Vec<Node> {
    let mut modules: Vec<Node> = vec![
        Section::new("challenge", "Challenge", "⚠️")
            .styled(SectionStyle::Subtle)
            .spanning(3)
            .with_children(vec![Node::Paragraph(record.challenge.clone())])
            .into(),
        Section::new("solution", "Solution", "💡")
            .spanning(3)
            .with_children(vec![Node::Paragraph(record.solution.clone())])
            .into(),
        Section::new("results", "Key Results", "📊")
            .styled(SectionStyle::Highlight)
            .spanning(3)
            .with_children(vec![Node::Metrics {
                metrics: record.metrics.iter().take(KEY_RESULTS).cloned().collect(),
                density: Density::Compact,
            }])
            .into(),
        Section::new("implementation", "Implementation", "🔧")
            .spanning(2)
            .with_children(vec![Node::Steps {
                items: record.implementation.clone(),
                numbered: false,
            }])
            .into(),
    ];

    if let Some(timeline) = &record.timeline {
        modules.push(
            Section::new("timeline", "Timeline", "⏱️")
                .spanning(1)
                .with_children(vec![Node::Figure {
                    value: timeline.clone(),
                    caption: "Implementation period",
                }])
                .into(),
        );
    }

    modules.push(
        Section::new("impact", "Annual Impact", "💰")
            .styled(SectionStyle::Highlight)
            .spanning(3)
            .with_children(vec![Node::Figure {
                value: record.annual_impact.clone(),
                caption: "Total value delivered annually",
            }])
            .into(),
    );

    if let Some(quote) = quote(record) {
        modules.push(
            Section::new("testimonial", "Client Testimonial", "💬")
                .styled(SectionStyle::Subtle)
                .spanning(3)
                .with_children(vec![quote])
                .into(),
        );
    }

    if record.metrics.len() > KEY_RESULTS {
        modules.push(
            Section::new("more-metrics", "Additional Metrics", "📈")
                .spanning(2)
                .with_children(vec![Node::Metrics {
                    metrics: record.metrics[KEY_RESULTS..].to_vec(),
                    density: Density::Floating,
                }])
                .into(),
        );
    }

    vec![
        header(record, None),
        Node::Grid(modules),
        Node::CallToAction(CallToAction {
            heading: "Similar Results for Your Business?",
            body: "Every business is different, but the principles remain the same. Let's explore what's possible for your specific workflows and challenges.",
            actions: vec!["Schedule a Discovery Call"],
        }),
    ]
}
