//! Floating sidebar: the story in a main column, metrics and quick facts in
//! a sticky sidebar.

use super::{header, quote, timeline_callout};
use crate::case_study::CaseStudy;
use crate::case_study::state::ViewState;
use crate::case_study::view::{CallToAction, Density, Fact, Node, Section, SectionStyle};

pub(super) fn build(record: &CaseStudy, _state: &ViewState) -> Vec<Node> {
    let mut implementation = vec![Node::Steps {
        items: record.implementation.clone(),
        numbered: true,
    }];
    implementation.extend(timeline_callout(record, "Timeline"));

    let mut main = vec![
        header(
            record,
            Some("A comprehensive transformation story with measurable results"),
        ),
        Section::new("challenge", "The Challenge", "⚠️")
            .with_children(vec![Node::Paragraph(record.challenge.clone())])
            .into(),
        Section::new("solution", "Our Solution", "💡")
            .with_children(vec![Node::Paragraph(record.solution.clone())])
            .into(),
        Section::new("implementation", "Implementation Process", "🔧")
            .with_children(implementation)
            .into(),
    ];
    main.extend(quote(record));

    let mut facts = vec![Fact {
        label: "Category",
        value: record.category.clone(),
    }];
    if let Some(timeline) = &record.timeline {
        facts.push(Fact {
            label: "Implementation",
            value: timeline.clone(),
        });
    }
    facts.push(Fact {
        label: "Key Metrics",
        value: record.metrics.len().to_string(),
    });

    let sidebar = vec![
        Section::new("results", "Key Results", "📊")
            .with_children(vec![Node::Metrics {
                metrics: record.metrics.clone(),
                density: Density::Floating,
            }])
            .into(),
        Section::new("impact", "Annual Impact", "💰")
            .styled(SectionStyle::Highlight)
            .with_children(vec![Node::Paragraph(record.annual_impact.clone())])
            .into(),
        Section::new("facts", "Quick Facts", "⚡")
            .styled(SectionStyle::Subtle)
            .with_children(vec![Node::Facts(facts)])
            .into(),
        Node::CallToAction(CallToAction {
            heading: "Similar Results?",
            body: "Let's discuss how we can achieve similar outcomes for your business",
            actions: vec!["Get Started"],
        }),
    ];

    vec![Node::Columns { main, sidebar }]
}
