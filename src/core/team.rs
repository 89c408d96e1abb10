//! Teams: fixed pairs of players scored as a unit.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;

/// Team identifier. The game always has exactly two teams, `0` and `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0 + 1)
    }
}

/// A team of players, fixed at setup.
///
/// Members are stored as indices into the game's player list; the game owns
/// the players, teams only reference them. Aggregates (score, captured-card
/// count) are computed against that list on demand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    members: Vec<usize>,
}

impl Team {
    /// Create an empty team.
    #[must_use]
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Team identifier.
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Team display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member player indices, in the order they were added.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Team score: sum of each member's score.
    #[must_use]
    pub fn score(&self, players: &[Player]) -> u32 {
        self.members.iter().map(|&i| players[i].score()).sum()
    }

    /// Total number of cards captured by this team.
    #[must_use]
    pub fn captured_count(&self, players: &[Player]) -> usize {
        self.members
            .iter()
            .map(|&i| players[i].captured_cards().len())
            .sum()
    }

    pub(crate) fn add_member(&mut self, player_index: usize) {
        self.members.push(player_index);
    }
}
