//! # bastra-engine
//!
//! Rules engine for Bastra, a four-player, team-based trick-capture card
//! game played with a standard 52-card deck.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: deck and turn management, the capture/bonus
//!    algorithm, scoring, settlement, and a shallow AI. No rendering,
//!    input handling, animation, or sound — the presentation layer calls
//!    the engine's synchronous API and reads its accessors after each
//!    call.
//!
//! 2. **One aggregate, no globals**: `BastraGame` owns the whole per-game
//!    state and is explicitly constructed per game.
//!
//! 3. **Errors are values**: a rejected play comes back as a `PlayError`
//!    with zero state mutation. The engine has no fatal error class.
//!
//! 4. **Deterministic**: all randomness flows through a seeded RNG, so
//!    the same seed replays the same game.
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, and the card value type
//! - `core`: players, teams, RNG
//! - `deck`: the 52-card deck with front-draw semantics
//! - `rules`: the capture/match/Bastra decision
//! - `ai`: fixed-priority heuristic card selection
//! - `game`: the turn-by-turn game controller

pub mod ai;
pub mod cards;
pub mod core;
pub mod deck;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, Rank, Suit};
pub use crate::core::{GameRng, Player, Team, TeamId};
pub use crate::deck::Deck;
pub use crate::game::{BastraGame, PlayError, PlayOutcome};
pub use crate::rules::{resolve_play, Disposition};
