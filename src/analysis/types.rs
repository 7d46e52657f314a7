//! Card type distribution and archetype classification.
//!
//! The analyzer counts how the deck splits across the seven card types and
//! derives an archetype from the balance of creatures against one-shot
//! spells (instants and sorceries).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::config::{AGGRESSIVE_RATIO_THRESHOLD, CONTROL_RATIO_THRESHOLD};
use crate::models::card::CardType;
use crate::models::deck::Deck;

// ---------------------------------------------------------------------------
// CardTypeAnalyzer
// ---------------------------------------------------------------------------

/// Type-distribution statistics over a deck.
///
/// Holds only a borrow of the deck and recomputes from `deck.cards()` on
/// every call, so results always reflect the deck's current contents.
pub struct CardTypeAnalyzer<'a> {
    deck: &'a Deck,
}

impl<'a> CardTypeAnalyzer<'a> {
    /// Create a new `CardTypeAnalyzer` bound to the given deck.
    pub fn new(deck: &'a Deck) -> Self {
        Self { deck }
    }

    /// Count of cards per type, in a single pass.
    ///
    /// Only types actually present appear as keys; an absent type is an
    /// implicit zero, not an explicit entry.
    pub fn type_distribution(&self) -> HashMap<CardType, usize> {
        let mut distribution = HashMap::new();
        for card in self.deck.cards() {
            *distribution.entry(card.card_type()).or_insert(0) += 1;
        }
        distribution
    }

    pub fn land_count(&self) -> usize {
        self.count_of(CardType::Land)
    }

    pub fn creature_count(&self) -> usize {
        self.count_of(CardType::Creature)
    }

    pub fn instant_count(&self) -> usize {
        self.count_of(CardType::Instant)
    }

    pub fn sorcery_count(&self) -> usize {
        self.count_of(CardType::Sorcery)
    }

    pub fn artifact_count(&self) -> usize {
        self.count_of(CardType::Artifact)
    }

    pub fn enchantment_count(&self) -> usize {
        self.count_of(CardType::Enchantment)
    }

    pub fn planeswalker_count(&self) -> usize {
        self.count_of(CardType::Planeswalker)
    }

    /// Count of cards that stay on the battlefield when played: creatures,
    /// enchantments, lands, artifacts and planeswalkers.
    pub fn permanent_count(&self) -> usize {
        self.deck
            .cards()
            .iter()
            .filter(|card| card.card_type().is_permanent())
            .count()
    }

    /// Count of one-shot spells: instants and sorceries.
    pub fn temporary_spell_count(&self) -> usize {
        self.deck
            .cards()
            .iter()
            .filter(|card| !card.card_type().is_permanent())
            .count()
    }

    /// Ratio of creatures to one-shot spells.
    ///
    /// With no instants or sorceries in the deck there is no finite ratio;
    /// that case is reported as [`SpellRatio::NoSpells`] rather than a
    /// sentinel value.
    pub fn creature_to_spell_ratio(&self) -> SpellRatio {
        let creatures = self.creature_count();
        let spells = self.temporary_spell_count();

        if spells == 0 {
            return SpellRatio::NoSpells { creatures };
        }

        let ratio = creatures as f64 / spells as f64;
        SpellRatio::Finite((ratio * 100.0).round() / 100.0)
    }

    fn count_of(&self, card_type: CardType) -> usize {
        self.deck
            .cards()
            .iter()
            .filter(|card| card.card_type() == card_type)
            .count()
    }
}

// ---------------------------------------------------------------------------
// SpellRatio
// ---------------------------------------------------------------------------

/// Outcome of the creature-to-spell division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpellRatio {
    /// `creatures / (instants + sorceries)`, rounded to two decimal places.
    Finite(f64),
    /// The deck has no instants or sorceries, so no finite ratio exists.
    NoSpells { creatures: usize },
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// Deck archetype derived from the creature-to-spell balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Aggressive,
    Control,
    Midrange,
    Undecided,
}

impl Archetype {
    /// Classify a ratio into an archetype. Pure: reads no deck state.
    ///
    /// A deck with creatures but no spells is aggressive; with neither it
    /// classifies as control, the same as any ratio below the control
    /// threshold. `Undecided` covers NaN and negative inputs, which cannot
    /// arise from valid card counts.
    pub fn from_ratio(ratio: SpellRatio) -> Self {
        match ratio {
            SpellRatio::NoSpells { creatures } => {
                if creatures > 0 {
                    Archetype::Aggressive
                } else {
                    Archetype::Control
                }
            }
            SpellRatio::Finite(r) if r.is_nan() || r < 0.0 => Archetype::Undecided,
            SpellRatio::Finite(r) if r > AGGRESSIVE_RATIO_THRESHOLD => Archetype::Aggressive,
            SpellRatio::Finite(r) if r < CONTROL_RATIO_THRESHOLD => Archetype::Control,
            SpellRatio::Finite(_) => Archetype::Midrange,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Archetype::Aggressive => "aggressive",
            Archetype::Control => "control",
            Archetype::Midrange => "midrange",
            Archetype::Undecided => "undecided",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
