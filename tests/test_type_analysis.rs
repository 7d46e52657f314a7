//! Type distribution, creature-to-spell ratio, and archetype classification.

mod common;

use common::fields;
use mtg_deck_analyzer::{Archetype, CardType, Deck, SpellRatio};

/// Deck with 2 instants and 1 creature: creature-to-spell ratio 0.5.
fn two_instants_one_creature() -> Deck {
    let mut deck = Deck::new("tempo");
    deck.add_card(&common::counterspell(), 1).unwrap();
    deck.add_card(&common::lightning_bolt(), 1).unwrap();
    deck.add_card(&common::grizzly_bears(), 1).unwrap();
    deck
}

// ---------------------------------------------------------------------------
// type_distribution
// ---------------------------------------------------------------------------

#[test]
fn distribution_counts_each_present_type() {
    let deck = two_instants_one_creature();
    let distribution = deck.card_types().type_distribution();

    assert_eq!(distribution.get(&CardType::Instant), Some(&2));
    assert_eq!(distribution.get(&CardType::Creature), Some(&1));
}

#[test]
fn distribution_omits_absent_types() {
    let deck = two_instants_one_creature();
    let distribution = deck.card_types().type_distribution();

    assert_eq!(distribution.len(), 2);
    assert!(!distribution.contains_key(&CardType::Land));
}

#[test]
fn distribution_of_empty_deck_is_empty() {
    let deck = Deck::new("empty");
    assert!(deck.card_types().type_distribution().is_empty());
}

// ---------------------------------------------------------------------------
// Convenience counters
// ---------------------------------------------------------------------------

#[test]
fn counters_report_present_types() {
    let deck = two_instants_one_creature();
    let types = deck.card_types();

    assert_eq!(types.instant_count(), 2);
    assert_eq!(types.creature_count(), 1);
}

#[test]
fn counters_are_zero_for_absent_types() {
    let deck = two_instants_one_creature();
    let types = deck.card_types();

    assert_eq!(types.land_count(), 0);
    assert_eq!(types.sorcery_count(), 0);
    assert_eq!(types.artifact_count(), 0);
    assert_eq!(types.enchantment_count(), 0);
    assert_eq!(types.planeswalker_count(), 0);
}

#[test]
fn counts_reflect_the_live_deck() {
    let mut deck = Deck::new("growing");
    assert_eq!(deck.card_types().creature_count(), 0);

    deck.add_card(&common::grizzly_bears(), 4).unwrap();
    assert_eq!(deck.card_types().creature_count(), 4);

    deck.remove_card_by_name("grizzly bears");
    assert_eq!(deck.card_types().creature_count(), 0);
}

// ---------------------------------------------------------------------------
// Permanent vs temporary split
// ---------------------------------------------------------------------------

#[test]
fn splits_permanents_from_temporary_spells() {
    let deck = two_instants_one_creature();
    let types = deck.card_types();

    assert_eq!(types.permanent_count(), 1);
    assert_eq!(types.temporary_spell_count(), 2);
}

#[test]
fn all_five_permanent_types_count_as_permanents() {
    let mut deck = Deck::new("permanents");
    deck.add_card(&common::grizzly_bears(), 1).unwrap();
    deck.add_card(&common::forest(), 1).unwrap();
    deck.add_card(&fields("sol ring", "1", "artifact", "colorless", ""), 1)
        .unwrap();
    deck.add_card(&fields("rancor", "G", "enchantment", "green", ""), 1)
        .unwrap();
    deck.add_card(&fields("karn liberated", "7", "planeswalker", "colorless", ""), 1)
        .unwrap();

    let types = deck.card_types();
    assert_eq!(types.permanent_count(), 5);
    assert_eq!(types.temporary_spell_count(), 0);
}

// ---------------------------------------------------------------------------
// creature_to_spell_ratio
// ---------------------------------------------------------------------------

#[test]
fn ratio_divides_creatures_by_spells() {
    let deck = two_instants_one_creature();
    assert_eq!(
        deck.card_types().creature_to_spell_ratio(),
        SpellRatio::Finite(0.5)
    );
}

#[test]
fn ratio_rounds_to_two_decimal_places() {
    let mut deck = Deck::new("rounding");
    deck.add_card(&common::grizzly_bears(), 1).unwrap();
    deck.add_card(&common::lightning_bolt(), 3).unwrap();

    // 1 / 3 rounds to 0.33.
    assert_eq!(
        deck.card_types().creature_to_spell_ratio(),
        SpellRatio::Finite(0.33)
    );
}

#[test]
fn ratio_with_no_spells_is_tagged_not_a_sentinel() {
    let mut deck = Deck::new("creatures only");
    deck.add_card(&common::grizzly_bears(), 2).unwrap();

    assert_eq!(
        deck.card_types().creature_to_spell_ratio(),
        SpellRatio::NoSpells { creatures: 2 }
    );
}

#[test]
fn ratio_of_empty_deck_reports_zero_creatures() {
    let deck = Deck::new("empty");
    assert_eq!(
        deck.card_types().creature_to_spell_ratio(),
        SpellRatio::NoSpells { creatures: 0 }
    );
}

// ---------------------------------------------------------------------------
// Archetype classification
// ---------------------------------------------------------------------------

#[test]
fn classifies_control_and_aggressive_decks() {
    // 2 instants + 1 creature -> 0.5 -> control.
    let deck = two_instants_one_creature();
    let ratio = deck.card_types().creature_to_spell_ratio();
    assert_eq!(Archetype::from_ratio(ratio), Archetype::Control);

    // Two creatures and no spells classify aggressive, deterministically.
    let mut deck = Deck::new("stompy");
    deck.add_card(&common::grizzly_bears(), 2).unwrap();
    let ratio = deck.card_types().creature_to_spell_ratio();
    assert_eq!(Archetype::from_ratio(ratio), Archetype::Aggressive);
}

#[test]
fn empty_deck_classifies_as_control() {
    let deck = Deck::new("empty");
    let ratio = deck.card_types().creature_to_spell_ratio();
    assert_eq!(Archetype::from_ratio(ratio), Archetype::Control);
}

#[test]
fn threshold_boundaries_are_midrange() {
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(0.8)),
        Archetype::Midrange
    );
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(1.5)),
        Archetype::Midrange
    );
}

#[test]
fn values_past_the_thresholds_flip_the_archetype() {
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(1.51)),
        Archetype::Aggressive
    );
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(0.79)),
        Archetype::Control
    );
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(1.0)),
        Archetype::Midrange
    );
}

#[test]
fn nan_and_negative_ratios_are_undecided() {
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(f64::NAN)),
        Archetype::Undecided
    );
    assert_eq!(
        Archetype::from_ratio(SpellRatio::Finite(-1.0)),
        Archetype::Undecided
    );
}

#[test]
fn archetypes_display_as_lowercase_labels() {
    assert_eq!(Archetype::Aggressive.to_string(), "aggressive");
    assert_eq!(Archetype::Control.as_str(), "control");
    assert_eq!(Archetype::Midrange.to_string(), "midrange");
    assert_eq!(Archetype::Undecided.as_str(), "undecided");
}
