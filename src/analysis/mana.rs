//! Mana curve and color statistics.
//!
//! Buckets cards by converted mana value (see [`Card::mana_value`]) and
//! tallies color symbols across the deck. Ordered maps keep curve output
//! stable for display.
//!
//! [`Card::mana_value`]: crate::models::Card::mana_value

use std::collections::BTreeMap;

use crate::models::card::Color;
use crate::models::deck::Deck;

// ---------------------------------------------------------------------------
// ManaAnalyzer
// ---------------------------------------------------------------------------

/// Mana statistics over a deck.
///
/// Holds only a borrow of the deck and recomputes from `deck.cards()` on
/// every call, so results always reflect the deck's current contents.
pub struct ManaAnalyzer<'a> {
    deck: &'a Deck,
}

impl<'a> ManaAnalyzer<'a> {
    /// Create a new `ManaAnalyzer` bound to the given deck.
    pub fn new(deck: &'a Deck) -> Self {
        Self { deck }
    }

    /// Card count per converted mana value.
    pub fn mana_curve(&self) -> BTreeMap<u32, usize> {
        let mut curve = BTreeMap::new();
        for card in self.deck.cards() {
            *curve.entry(card.mana_value()).or_insert(0) += 1;
        }
        curve
    }

    /// Weighted mean of mana values across the curve.
    ///
    /// An empty deck averages to `0.0` — a defined value, never NaN.
    pub fn average_mana_cost(&self) -> f64 {
        let curve = self.mana_curve();
        let count: usize = curve.values().sum();
        if count == 0 {
            return 0.0;
        }

        let sum: u64 = curve
            .iter()
            .map(|(value, occurrences)| u64::from(*value) * *occurrences as u64)
            .sum();
        sum as f64 / count as f64
    }

    /// Color-token tally across the deck, with all six colors always present.
    ///
    /// Every color token on a card counts once, so a multicolor card
    /// increments several buckets.
    pub fn color_distribution(&self) -> BTreeMap<Color, usize> {
        let mut distribution: BTreeMap<Color, usize> =
            Color::ALL.iter().map(|color| (*color, 0)).collect();

        for card in self.deck.cards() {
            for color in card.colors() {
                *distribution.entry(*color).or_insert(0) += 1;
            }
        }

        distribution
    }

    /// Share of the deck per mana-value bucket, rounded to whole percent.
    ///
    /// An empty deck yields an empty map — the divide-by-zero case is
    /// defined away rather than surfaced as NaN.
    pub fn mana_curve_percentages(&self) -> BTreeMap<u32, u32> {
        let total = self.deck.total_cards();
        if total == 0 {
            return BTreeMap::new();
        }

        self.mana_curve()
            .into_iter()
            .map(|(value, count)| {
                let percent = (count as f64 / total as f64 * 100.0).round() as u32;
                (value, percent)
            })
            .collect()
    }
}
