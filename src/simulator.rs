//! Opening-hand simulator.
//!
//! Draws randomized sample hands from a deck to eyeball how openers play
//! out, alongside the aggregate statistics from the analysis layer.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::config::OPENING_HAND_SIZE;
use crate::models::card::Card;
use crate::models::deck::Deck;

/// Draws sample opening hands from a deck.
///
/// Cards are sampled without replacement, as if drawing from a shuffled
/// deck. Draws clone the sampled cards; the deck itself is never mutated.
pub struct HandSimulator<'a> {
    deck: &'a Deck,
}

impl<'a> HandSimulator<'a> {
    /// Create a new `HandSimulator` bound to the given deck.
    pub fn new(deck: &'a Deck) -> Self {
        Self { deck }
    }

    /// Draw a standard seven-card opening hand.
    ///
    /// A deck holding fewer than seven cards yields the whole deck, in
    /// random order.
    pub fn draw_hand(&self) -> Vec<Card> {
        self.draw_hand_of(OPENING_HAND_SIZE)
    }

    /// Draw a hand of an explicit size, e.g. after mulligans.
    pub fn draw_hand_of(&self, size: usize) -> Vec<Card> {
        let mut rng = thread_rng();
        self.deck
            .cards()
            .choose_multiple(&mut rng, size)
            .cloned()
            .collect()
    }

    /// Draw `count` independent opening hands.
    pub fn draw_hands(&self, count: usize) -> Vec<Vec<Card>> {
        (0..count).map(|_| self.draw_hand()).collect()
    }
}
