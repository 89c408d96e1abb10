//! Card value types: rank, suit, and the card itself.
//!
//! `Card` is a plain `Copy` value. A card lives in exactly one container at
//! a time (deck, a hand, the table pile, or a captured pile) and moves
//! between them by value transfer, never duplication. The only exception is
//! the three synthetic Ace-of-Hearts cards minted at end-of-game settlement.

use serde::{Deserialize, Serialize};

/// Card rank, Ace through King.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks in deck-building order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Display symbol for this rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit. No jokers in this game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Display symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An immutable (rank, suit) pair.
///
/// ## Example
///
/// ```
/// use bastra_engine::cards::{Card, Rank, Suit};
///
/// let ten = Card::new(Rank::Ten, Suit::Diamonds);
/// assert_eq!(ten.points(), 3);
/// assert!(ten.matches(Card::new(Rank::Ten, Suit::Spades)));
/// assert_eq!(ten.to_string(), "10 of ♦");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank of the card.
    pub rank: Rank,
    /// Suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Point value of this card when it sits in a captured pile.
    ///
    /// Aces and Jacks are worth 1, the Ten of Diamonds 3, the Two of
    /// Clubs 2, everything else 0.
    #[must_use]
    pub const fn points(self) -> u32 {
        match (self.rank, self.suit) {
            (Rank::Ace, _) | (Rank::Jack, _) => 1,
            (Rank::Ten, Suit::Diamonds) => 3,
            (Rank::Two, Suit::Clubs) => 2,
            _ => 0,
        }
    }

    /// Same-rank predicate used by the capture rules. Suit never matters.
    #[must_use]
    pub const fn matches(self, other: Card) -> bool {
        self.rank as u8 == other.rank as u8
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).points(), 1);
        assert_eq!(Card::new(Rank::Jack, Suit::Hearts).points(), 1);
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).points(), 3);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).points(), 0);
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).points(), 2);
        assert_eq!(Card::new(Rank::Two, Suit::Hearts).points(), 0);
        assert_eq!(Card::new(Rank::King, Suit::Spades).points(), 0);
    }

    #[test]
    fn test_total_deck_points() {
        // 4 aces + 4 jacks + 10♦ (3) + 2♣ (2) = 13 points in the deck.
        let total: u32 = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .map(Card::points)
            .sum();
        assert_eq!(total, 13);
    }

    #[test]
    fn test_matches_ignores_suit() {
        let seven_c = Card::new(Rank::Seven, Suit::Clubs);
        let seven_h = Card::new(Rank::Seven, Suit::Hearts);
        let eight_c = Card::new(Rank::Eight, Suit::Clubs);

        assert!(seven_c.matches(seven_h));
        assert!(seven_c.matches(seven_c));
        assert!(!seven_c.matches(eight_c));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "A of ♥");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10 of ♦");
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).to_string(), "Q of ♣");
    }

    #[test]
    fn test_serde_round_trip() {
        let card = Card::new(Rank::Jack, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
