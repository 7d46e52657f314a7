//! Magic: The Gathering deck modelling and analysis.
//!
//! Validates individual cards, collects them into a 60-card deck, and derives
//! statistics over the deck's live contents: card type distribution and
//! archetype classification, mana curve and color breakdown, and randomized
//! opening-hand draws.
//!
//! All state is in-memory and synchronous. Analyzers are lightweight
//! borrowing wrappers that recompute on every call, so their results always
//! reflect the deck at call time.
//!
//! # Quick start
//!
//! ```
//! use mtg_deck_analyzer::{Archetype, CardFields, Deck};
//!
//! let mut deck = Deck::new("gruul stompy");
//! deck.add_card(
//!     &CardFields {
//!         name: "Ghalta, Primal Hunger".into(),
//!         mana_cost: "10GG".into(),
//!         card_type: "creature".into(),
//!         colors: "green".into(),
//!         power_toughness: "12/12".into(),
//!     },
//!     4,
//! )
//! .unwrap();
//!
//! let types = deck.card_types();
//! assert_eq!(types.creature_count(), 4);
//! assert_eq!(
//!     Archetype::from_ratio(types.creature_to_spell_ratio()),
//!     Archetype::Aggressive
//! );
//!
//! let curve = deck.mana().mana_curve();
//! assert_eq!(curve.get(&12), Some(&4));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod simulator;

pub use analysis::{Archetype, CardTypeAnalyzer, ManaAnalyzer, SpellRatio};
pub use error::{DeckError, Result, ValidationError};
pub use models::{Card, CardFields, CardType, Color, Deck};
pub use simulator::HandSimulator;
