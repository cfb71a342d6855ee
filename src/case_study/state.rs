//! Interactive view state, as plain values.
//!
//! Layouts never hold state of their own. The caller owns a [`ViewState`],
//! passes it to [`super::render`], and moves it forward with the transition
//! methods here. Every transition takes `self` by value and returns the next
//! state, so a state can be tested without rendering anything.
//!
//! ## Accordion
//!
//! At most one section is open. Toggling the open section closes it;
//! toggling any other section opens it and closes the previous one. The
//! initial state has `results` open.
//!
//! ```text
//! results ──toggle(challenge)──► challenge ──toggle(challenge)──► (none)
//!    ▲                                                               │
//!    └──────────────────────────toggle(results)──────────────────────┘
//! ```
//!
//! ## Interactive cards
//!
//! Each card has its own `expanded` and `hovered` flags; changing one card
//! never touches another.

use super::layouts::Layout;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccordionSection {
    Results,
    Challenge,
    Solution,
    Implementation,
    Testimonial,
}

impl AccordionSection {
    pub const ALL: [AccordionSection; 5] = [
        AccordionSection::Results,
        AccordionSection::Challenge,
        AccordionSection::Solution,
        AccordionSection::Implementation,
        AccordionSection::Testimonial,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AccordionSection::Results => "results",
            AccordionSection::Challenge => "challenge",
            AccordionSection::Solution => "solution",
            AccordionSection::Implementation => "implementation",
            AccordionSection::Testimonial => "testimonial",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown id: {0}")]
pub struct UnknownId(pub String);

impl FromStr for AccordionSection {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<AccordionSection>,
}

impl Default for AccordionState {
    fn default() -> Self {
        Self {
            open: Some(AccordionSection::Results),
        }
    }
}

impl AccordionState {
    /// Everything collapsed.
    pub fn closed() -> Self {
        Self { open: None }
    }

    pub fn open(&self) -> Option<AccordionSection> {
        self.open
    }

    pub fn is_open(&self, section: AccordionSection) -> bool {
        self.open == Some(section)
    }

    #[must_use]
    pub fn toggle(self, section: AccordionSection) -> Self {
        if self.open == Some(section) {
            Self { open: None }
        } else {
            Self {
                open: Some(section),
            }
        }
    }
}

/// The cards of the interactive layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Challenge,
    Solution,
    Results,
    Implementation,
    Testimonial,
}

impl Card {
    pub const ALL: [Card; 5] = [
        Card::Challenge,
        Card::Solution,
        Card::Results,
        Card::Implementation,
        Card::Testimonial,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Card::Challenge => "challenge",
            Card::Solution => "solution",
            Card::Results => "results",
            Card::Implementation => "implementation",
            Card::Testimonial => "testimonial",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Card {
    type Err = UnknownId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|card| card.id() == s)
            .ok_or_else(|| UnknownId(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    pub expanded: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveState {
    cards: [CardState; 5],
}

impl InteractiveState {
    pub fn card(&self, card: Card) -> CardState {
        self.cards[card.index()]
    }

    /// Click: flip the card's expanded flag.
    #[must_use]
    pub fn toggle(mut self, card: Card) -> Self {
        let state = &mut self.cards[card.index()];
        state.expanded = !state.expanded;
        self
    }

    /// Pointer enter (`true`) or leave (`false`).
    #[must_use]
    pub fn hover(mut self, card: Card, hovered: bool) -> Self {
        self.cards[card.index()].hovered = hovered;
        self
    }
}

/// Which layout the showcase page is presenting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    pub selected: Layout,
}

impl ShowcaseState {
    #[must_use]
    pub fn select(self, layout: Layout) -> Self {
        Self { selected: layout }
    }
}

/// Everything a layout may read when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub accordion: AccordionState,
    pub interactive: InteractiveState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_starts_with_results_open() {
        let state = AccordionState::default();
        assert_eq!(state.open(), Some(AccordionSection::Results));
    }

    #[test]
    fn accordion_toggle_opens_then_closes() {
        let challenge: AccordionSection = "challenge".parse().unwrap();
        let state = AccordionState::default().toggle(challenge);
        assert_eq!(state.open(), Some(AccordionSection::Challenge));
        assert!(!state.is_open(AccordionSection::Results));

        let state = state.toggle(challenge);
        assert_eq!(state.open(), None);
    }

    #[test]
    fn accordion_at_most_one_open() {
        let mut state = AccordionState::closed();
        for section in AccordionSection::ALL {
            state = state.toggle(section);
            let open: Vec<_> = AccordionSection::ALL
                .into_iter()
                .filter(|s| state.is_open(*s))
                .collect();
            assert_eq!(open, vec![section]);
        }
    }

    #[test]
    fn accordion_reopen_from_nothing() {
        let state = AccordionState::default()
            .toggle(AccordionSection::Results)
            .toggle(AccordionSection::Results);
        assert_eq!(state, AccordionState::default());
    }

    #[test]
    fn unknown_section_id() {
        assert_eq!(
            "timeline".parse::<AccordionSection>(),
            Err(UnknownId("timeline".to_string()))
        );
    }

    #[test]
    fn unknown_id_message_names_the_id() {
        let err = "sidebar".parse::<Card>().unwrap_err();
        assert_eq!(err.to_string(), "unknown id: sidebar");
    }

    #[test]
    fn cards_are_independent() {
        let state = InteractiveState::default()
            .toggle(Card::Solution)
            .hover(Card::Results, true);

        assert!(state.card(Card::Solution).expanded);
        assert!(!state.card(Card::Solution).hovered);
        assert!(state.card(Card::Results).hovered);
        assert!(!state.card(Card::Results).expanded);
        assert_eq!(state.card(Card::Challenge), CardState::default());

        let state = state.toggle(Card::Solution).hover(Card::Results, false);
        assert_eq!(state, InteractiveState::default());
    }

    #[test]
    fn card_ids_parse() {
        for card in Card::ALL {
            assert_eq!(card.id().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn showcase_defaults_to_hero() {
        let state = ShowcaseState::default();
        assert_eq!(state.selected, Layout::Hero);
        assert_eq!(state.select(Layout::Modular).selected, Layout::Modular);
    }
}
