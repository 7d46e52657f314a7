//! Shared test fixtures for the deck analyzer integration tests.
//!
//! Provides `fields()` for ad-hoc card input plus a handful of named cards
//! and a pre-filled sample deck used across the test files.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use mtg_deck_analyzer::{CardFields, Deck};

/// Build a raw field set from string literals.
pub fn fields(
    name: &str,
    mana_cost: &str,
    card_type: &str,
    colors: &str,
    power_toughness: &str,
) -> CardFields {
    CardFields {
        name: name.to_string(),
        mana_cost: mana_cost.to_string(),
        card_type: card_type.to_string(),
        colors: colors.to_string(),
        power_toughness: power_toughness.to_string(),
    }
}

pub fn counterspell() -> CardFields {
    fields("counterspell", "UU", "instant", "blue", "")
}

pub fn lightning_bolt() -> CardFields {
    fields("lightning bolt", "R", "instant", "red", "")
}

pub fn ghalta() -> CardFields {
    fields("ghalta, primal hunger", "GG10", "creature", "green", "12/12")
}

pub fn grizzly_bears() -> CardFields {
    fields("grizzly bears", "1G", "creature", "green", "2/2")
}

pub fn forest() -> CardFields {
    fields("forest", "", "land", "colorless", "")
}

/// Deck with the three-card mix used by the statistics tests:
/// counterspell (mana value 2), lightning bolt (1), ghalta (12).
pub fn three_card_deck() -> Deck {
    let mut deck = Deck::new("sample");
    deck.add_card(&counterspell(), 1).unwrap();
    deck.add_card(&lightning_bolt(), 1).unwrap();
    deck.add_card(&ghalta(), 1).unwrap();
    deck
}
