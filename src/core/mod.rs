//! Core engine types: players, teams, RNG.

pub mod player;
pub mod rng;
pub mod team;

pub use player::Player;
pub use rng::GameRng;
pub use team::{Team, TeamId};
