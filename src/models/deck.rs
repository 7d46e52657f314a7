use log::{debug, warn};
use serde::Serialize;
use std::fmt;

use crate::analysis::{CardTypeAnalyzer, ManaAnalyzer};
use crate::config::MAX_DECK_SIZE;
use crate::error::{DeckError, Result};
use crate::models::card::{Card, CardFields};
use crate::simulator::HandSimulator;

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// An ordered collection of validated cards, capped at [`MAX_DECK_SIZE`].
///
/// Insertion order is preserved and duplicates are allowed — a deck normally
/// holds multiple copies of the same card. The deck name is an opaque label.
///
/// There is no derived `Deserialize`: reconstructing a deck from raw data
/// would bypass the capacity check. Decks are built through [`Deck::add_card`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    name: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Construct `quantity` independent copies from the same field set and
    /// append them.
    ///
    /// Capacity is checked before anything else, and every copy is validated
    /// before any of them lands in the deck: on any error the deck is exactly
    /// as it was before the call.
    pub fn add_card(&mut self, fields: &CardFields, quantity: usize) -> Result<()> {
        if self.cards.len() + quantity > MAX_DECK_SIZE {
            warn!(
                "rejected adding {} copies of \"{}\": deck \"{}\" holds {} of {}",
                quantity,
                fields.name,
                self.name,
                self.cards.len(),
                MAX_DECK_SIZE
            );
            return Err(DeckError::CapacityExceeded {
                deck: self.name.clone(),
                current: self.cards.len(),
                requested: quantity,
                max: MAX_DECK_SIZE,
            });
        }

        // Each copy is validated on its own, mirroring single-card
        // construction; the batch is staged so a failure appends nothing.
        let mut batch = Vec::with_capacity(quantity);
        for _ in 0..quantity {
            batch.push(Card::new(fields)?);
        }

        debug!(
            "added {} copies of \"{}\" to deck \"{}\"",
            quantity, fields.name, self.name
        );
        self.cards.extend(batch);
        Ok(())
    }

    /// Remove every copy whose normalized name matches, case-insensitively.
    ///
    /// A name with no match is a no-op. Returns the deck for chaining.
    pub fn remove_card_by_name(&mut self, name: &str) -> &mut Self {
        let before = self.cards.len();
        self.cards
            .retain(|card| !card.name().eq_ignore_ascii_case(name));

        let removed = before - self.cards.len();
        if removed > 0 {
            debug!(
                "removed {} copies of \"{}\" from deck \"{}\"",
                removed, name, self.name
            );
        }
        self
    }

    /// Remove all cards unconditionally.
    pub fn clear(&mut self) {
        debug!("cleared deck \"{}\"", self.name);
        self.cards.clear();
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// All cards in insertion order, as a read-only borrow. Mutation goes
    /// through [`Deck::add_card`] and friends so the size cap holds.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // -- Analysis accessors ------------------------------------------------

    /// Access type-distribution statistics over the deck's live contents.
    ///
    /// Returns a lightweight wrapper that borrows the deck and recomputes on
    /// every call, so results always reflect the current card list.
    pub fn card_types(&self) -> CardTypeAnalyzer<'_> {
        CardTypeAnalyzer::new(self)
    }

    /// Access mana-curve and color statistics over the deck's live contents.
    pub fn mana(&self) -> ManaAnalyzer<'_> {
        ManaAnalyzer::new(self)
    }

    /// Access the opening-hand simulator.
    pub fn hands(&self) -> HandSimulator<'_> {
        HandSimulator::new(self)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deck(name={}, cards={}/{})",
            self.name,
            self.cards.len(),
            MAX_DECK_SIZE
        )
    }
}
