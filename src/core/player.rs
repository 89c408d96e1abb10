//! Players: identity, hand, captured pile, and Bastra bonus points.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::team::TeamId;

/// A seat at the table.
///
/// Identity (`name`, `team`, `is_human`) is fixed at creation. The hand is
/// ordered because plays address it by index; the captured pile is a plain
/// bag whose order never matters. Bastra bonus points accumulate separately
/// from captured-card value and are only combined in [`Player::score`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    name: String,
    team: TeamId,
    is_human: bool,
    /// Hands never exceed 4 cards, so they stay inline.
    hand: SmallVec<[Card; 4]>,
    captured: Vec<Card>,
    bastra_points: u32,
}

impl Player {
    /// Create a new player with an empty hand and captured pile.
    #[must_use]
    pub fn new(name: impl Into<String>, team: TeamId, is_human: bool) -> Self {
        Self {
            name: name.into(),
            team,
            is_human,
            hand: SmallVec::new(),
            captured: Vec::new(),
            bastra_points: 0,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Team this player belongs to.
    #[must_use]
    pub fn team(&self) -> TeamId {
        self.team
    }

    /// Whether this seat is controlled by a human.
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.is_human
    }

    /// Cards currently held, in play-index order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards captured so far.
    #[must_use]
    pub fn captured_cards(&self) -> &[Card] {
        &self.captured
    }

    /// Accumulated Bastra bonus points.
    #[must_use]
    pub fn bastra_points(&self) -> u32 {
        self.bastra_points
    }

    /// Score: point value of the captured pile plus Bastra bonus points.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.captured.iter().map(|c| c.points()).sum::<u32>() + self.bastra_points
    }

    /// Remove and return the card at `index`.
    ///
    /// The caller validates the index; the controller turns an out-of-range
    /// index into a recoverable error before ever reaching this point.
    pub(crate) fn play_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub(crate) fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn capture_cards(&mut self, cards: &[Card]) {
        self.captured.extend_from_slice(cards);
    }

    pub(crate) fn add_bastra_points(&mut self, points: u32) {
        self.bastra_points += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_new_player_is_empty() {
        let player = Player::new("Ali", TeamId::new(0), true);
        assert_eq!(player.name(), "Ali");
        assert_eq!(player.team(), TeamId::new(0));
        assert!(player.is_human());
        assert!(player.hand().is_empty());
        assert!(player.captured_cards().is_empty());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_play_card_removes_by_index() {
        let mut player = Player::new("Bot", TeamId::new(1), false);
        player.add_to_hand(card(Rank::Two, Suit::Clubs));
        player.add_to_hand(card(Rank::Five, Suit::Hearts));
        player.add_to_hand(card(Rank::King, Suit::Spades));

        let played = player.play_card(1);
        assert_eq!(played, card(Rank::Five, Suit::Hearts));
        assert_eq!(
            player.hand(),
            &[card(Rank::Two, Suit::Clubs), card(Rank::King, Suit::Spades)]
        );
    }

    #[test]
    fn test_score_sums_captured_points_and_bonus() {
        let mut player = Player::new("Bot", TeamId::new(0), false);
        player.capture_cards(&[
            card(Rank::Ace, Suit::Spades),     // 1
            card(Rank::Ten, Suit::Diamonds),   // 3
            card(Rank::Two, Suit::Clubs),      // 2
            card(Rank::Seven, Suit::Hearts),   // 0
        ]);
        assert_eq!(player.score(), 6);

        player.add_bastra_points(10);
        assert_eq!(player.bastra_points(), 10);
        assert_eq!(player.score(), 16);
    }
}
