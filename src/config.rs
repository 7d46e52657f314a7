//! Deck-building rule constants shared across the crate.

/// Maximum number of cards a deck may hold.
pub const MAX_DECK_SIZE: usize = 60;

/// Creature-to-spell ratio above which a deck classifies as aggressive.
pub const AGGRESSIVE_RATIO_THRESHOLD: f64 = 1.5;

/// Creature-to-spell ratio below which a deck classifies as control.
pub const CONTROL_RATIO_THRESHOLD: f64 = 0.8;

/// Number of cards in a standard opening hand.
pub const OPENING_HAND_SIZE: usize = 7;
