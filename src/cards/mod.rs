//! Card model.
//!
//! ## Key Types
//!
//! - `Rank`: Ace through King, with display symbols
//! - `Suit`: the four French suits, no jokers
//! - `Card`: immutable (rank, suit) value carrying the point rule and the
//!   same-rank matching predicate the capture engine is built on

pub mod card;

pub use card::{Card, Rank, Suit};
