//! Turn results and recoverable errors.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// What a successfully resolved turn did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Human-readable summary for the presentation layer.
    pub message: String,
    /// Whether the play captured the table pile.
    pub captured: bool,
    /// Whether the capture was a Bastra.
    pub is_bastra: bool,
    /// Bonus points awarded by this play: 0, 10, or 20.
    pub bastra_points: u32,
    /// Every card that moved into the captured pile, empty if placed.
    pub captured_cards: Vec<Card>,
}

/// A rejected play. Nothing was mutated; the caller may retry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayError {
    /// The card index is outside the current player's hand.
    InvalidCardIndex {
        /// Index that was requested.
        index: usize,
        /// Size of the hand at the time.
        hand_size: usize,
    },
    /// `play_ai_turn` was called while the current seat is human.
    NotAnAiPlayer,
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::InvalidCardIndex { index, hand_size } => {
                write!(f, "invalid card index {index} (hand has {hand_size} cards)")
            }
            PlayError::NotAnAiPlayer => write!(f, "current player is not AI"),
        }
    }
}

impl std::error::Error for PlayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlayError::InvalidCardIndex {
            index: 5,
            hand_size: 3,
        };
        assert_eq!(err.to_string(), "invalid card index 5 (hand has 3 cards)");
        assert_eq!(PlayError::NotAnAiPlayer.to_string(), "current player is not AI");
    }

    #[test]
    fn test_outcome_serde_round_trip() {
        let outcome = PlayOutcome {
            message: "Placed A of ♥ on the table".to_string(),
            captured: false,
            is_bastra: false,
            bastra_points: 0,
            captured_cards: vec![],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: PlayOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
