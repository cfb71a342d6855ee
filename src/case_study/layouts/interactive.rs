//! Interactive cards: every card has a short body and an expandable detail
//! panel. Hover and expansion come from [`InteractiveState`](crate::case_study::InteractiveState).

use super::{annual_impact, header};
use crate::case_study::CaseStudy;
use crate::case_study::state::{Card, ViewState};
use crate::case_study::view::{CallToAction, Density, Disclosure, Fact, Node, Section, SectionStyle};

pub(super) fn build(record: &CaseStudy, state: &ViewState) -> Vec<Node> {
    let card = |kind: Card, section: Section, children: Vec<Node>, details: Vec<Node>| -> Node {
        let current = state.interactive.card(kind);
        let mut section = section.with_children(children);
        section.disclosure = Disclosure::Expandable {
            expanded: current.expanded,
            hovered: current.hovered,
            details,
        };
        section.into()
    };

    let challenge = card(
        Card::Challenge,
        subtitled(Section::new("challenge", "Challenge", "⚠️"), "What we were facing"),
        vec![Node::Paragraph(record.challenge.clone())],
        vec![
            Node::Detail {
                label: "Impact Areas",
                text: "Processing efficiency, compliance risk, team productivity".to_string(),
            },
            Node::Detail {
                label: "Business Impact",
                text: "Delayed approvals, increased operational costs, team burnout".to_string(),
            },
        ],
    );

    let solution = card(
        Card::Solution,
        subtitled(Section::new("solution", "Solution", "💡"), "How we transformed the process"),
        vec![Node::Paragraph(record.solution.clone())],
        vec![
            Node::Detail {
                label: "Technologies",
                text: "AI/ML, OCR, NLP, Automated Routing".to_string(),
            },
            Node::Detail {
                label: "Integration",
                text: "Seamless integration with existing systems and workflows".to_string(),
            },
        ],
    );

    let results = card(
        Card::Results,
        subtitled(Section::new("results", "Results", "📊"), "The impact achieved")
            .styled(SectionStyle::Highlight),
        vec![Node::Metrics {
            metrics: record.metrics.clone(),
            density: Density::Compact,
        }],
        vec![
            Node::Detail {
                label: "Measurement Period",
                text: "12 months post-implementation".to_string(),
            },
            Node::Detail {
                label: "ROI Timeline",
                text: "Results visible within 6 weeks, full ROI achieved in 4 months".to_string(),
            },
            annual_impact(record),
        ],
    );

    let completed = record.timeline.as_ref().map(|t| format!("Completed in {t}"));
    let implementation_subtitle = completed
        .clone()
        .unwrap_or_else(|| "Rapid deployment approach".to_string());
    let implementation = card(
        Card::Implementation,
        subtitled(Section::new("implementation", "Implementation", "🔧"), implementation_subtitle),
        vec![Node::Steps {
            items: record.implementation.clone(),
            numbered: true,
        }],
        vec![Node::Facts(vec![
            fact("Phase 1: Discovery", "Requirements analysis and system audit"),
            fact("Phase 2: Development", "Custom solution development and testing"),
            fact("Phase 3: Deployment", "Gradual rollout with team training"),
            fact("Phase 4: Optimization", "Performance monitoring and refinement"),
        ])],
    );

    let mut nodes = vec![
        header(
            record,
            Some("Hover over cards to see enhanced details • Click to expand"),
        ),
        Node::Grid(vec![challenge, solution]),
        results,
        implementation,
    ];

    if let Some(quote) = &record.client_quote {
        nodes.push(card(
            Card::Testimonial,
            subtitled(Section::new("testimonial", "Client Testimonial", "💬"), "What our client says")
                .styled(SectionStyle::Subtle),
            vec![Node::Quote(quote.clone())],
            vec![
                Node::Detail {
                    label: "Industry",
                    text: record.category.clone(),
                },
                Node::Detail {
                    label: "Implementation Date",
                    text: completed.unwrap_or_else(|| "Recent".to_string()),
                },
                Node::Detail {
                    label: "Follow-up",
                    text: "Continued partnership for additional automation initiatives".to_string(),
                },
            ],
        ));
    }

    nodes.push(Node::CallToAction(CallToAction {
        heading: "Ready for Similar Results?",
        body: "Let's explore how intelligent automation can transform your business processes",
        actions: vec!["Schedule Discovery Call", "Download Case Study"],
    }));
    nodes
}

fn subtitled(mut section: Section, subtitle: impl Into<String>) -> Section {
    section.subtitle = Some(subtitle.into());
    section
}

fn fact(label: &'static str, value: &str) -> Fact {
    Fact {
        label,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_study::{Layout, render};
    use crate::test_helpers::{find_section, sample_record};

    fn disclosure(view: &crate::case_study::View, id: &str) -> (bool, bool, usize) {
        match &find_section(view, id).disclosure {
            Disclosure::Expandable {
                expanded,
                hovered,
                details,
            } => (*expanded, *hovered, details.len()),
            other => panic!("expected expandable card, got {other:?}"),
        }
    }

    #[test]
    fn cards_follow_state() {
        let state = ViewState {
            interactive: ViewState::default()
                .interactive
                .toggle(Card::Solution)
                .hover(Card::Challenge, true),
            ..ViewState::default()
        };
        let view = render(&sample_record(), Layout::Interactive, &state);

        assert_eq!(disclosure(&view, "challenge"), (false, true, 2));
        assert_eq!(disclosure(&view, "solution"), (true, false, 2));
        assert!(!disclosure(&view, "results").0);
    }

    #[test]
    fn implementation_subtitle_uses_timeline() {
        let mut record = sample_record();
        let view = render(&record, Layout::Interactive, &ViewState::default());
        assert_eq!(
            find_section(&view, "implementation").subtitle.as_deref(),
            Some("Completed in 6-week implementation")
        );

        record.timeline = None;
        let view = render(&record, Layout::Interactive, &ViewState::default());
        assert_eq!(
            find_section(&view, "implementation").subtitle.as_deref(),
            Some("Rapid deployment approach")
        );
    }

    #[test]
    fn testimonial_card_only_with_quote() {
        let mut record = sample_record();
        record.client_quote = None;
        let view = render(&record, Layout::Interactive, &ViewState::default());
        assert!(view.section("testimonial").is_none());
        assert!(matches!(view.nodes.last(), Some(Node::CallToAction(_))));
    }

    fn testimonial_detail(view: &crate::case_study::View, label: &str) -> String {
        let Disclosure::Expandable { details, .. } = &find_section(view, "testimonial").disclosure else {
            panic!("testimonial is not an expandable card");
        };
        details
            .iter()
            .find_map(|n| match n {
                Node::Detail { label: l, text } if *l == label => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no {label:?} detail on the testimonial card"))
    }

    #[test]
    fn implementation_date_comes_from_timeline() {
        let mut record = sample_record();
        let view = render(&record, Layout::Interactive, &ViewState::default());
        assert_eq!(
            testimonial_detail(&view, "Implementation Date"),
            "Completed in 6-week implementation"
        );

        record.timeline = None;
        let view = render(&record, Layout::Interactive, &ViewState::default());
        assert_eq!(testimonial_detail(&view, "Implementation Date"), "Recent");
    }

    #[test]
    fn implementation_phases_are_listed() {
        let view = render(&sample_record(), Layout::Interactive, &ViewState::default());
        let Disclosure::Expandable { details, .. } = &find_section(&view, "implementation").disclosure else {
            panic!("implementation is not an expandable card");
        };
        let Some(Node::Facts(facts)) = details.first() else {
            panic!("expected phase facts, got {details:?}");
        };
        assert_eq!(facts.len(), 4);
        assert_eq!(facts[0].label, "Phase 1: Discovery");
        assert_eq!(facts[3].value, "Performance monitoring and refinement");
    }
}
