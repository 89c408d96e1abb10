//! The 52-card deck with front-draw semantics.
//!
//! The deck is built once per game, shuffled once at the initial deal, and
//! only ever shrinks. It is never refilled within a game.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::GameRng;

/// Remaining undealt cards, drawn from the front.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a standard 52-card deck: every (rank, suit) combination once,
    /// no jokers, in fixed enumeration order (suits outer, ranks inner).
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Uniformly shuffle the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the front card, or `None` if the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
