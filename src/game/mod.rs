//! Game controller: turn order, dealing, settlement, and the event log.
//!
//! `BastraGame` owns the whole per-game state (deck, table pile, players,
//! teams, log, turn pointer). One instance per game, explicitly
//! constructed and held by the caller; there are no globals. All public
//! operations are synchronous and run to completion, so a caller that
//! serializes its calls needs no locking.
//!
//! The presentation layer drives the game by calling `play_turn` /
//! `play_ai_turn` and re-reading the accessors after each call. It never
//! mutates engine state directly.

mod result;

pub use result::{PlayError, PlayOutcome};

use rustc_hash::FxHashMap;

use crate::ai;
use crate::cards::{Card, Rank, Suit};
use crate::core::{GameRng, Player, Team, TeamId};
use crate::deck::Deck;
use crate::rules::{resolve_play, Disposition};

/// Cards dealt per player per round, and to the table at the initial deal.
const DEAL_BATCH: usize = 4;

/// A single game of Bastra.
///
/// ## Example
///
/// ```
/// use bastra_engine::game::BastraGame;
/// use bastra_engine::core::TeamId;
///
/// let mut game = BastraGame::new(42);
/// game.add_player("Ali", TeamId::new(0), true);
/// game.add_player("Bot 1", TeamId::new(1), false);
/// game.add_player("Veli", TeamId::new(0), false);
/// game.add_player("Bot 2", TeamId::new(1), false);
/// game.deal_cards();
///
/// assert_eq!(game.current_player().hand().len(), 4);
/// assert_eq!(game.table_cards().len(), 4);
/// assert_eq!(game.remaining_cards(), 32);
/// ```
#[derive(Clone, Debug)]
pub struct BastraGame {
    deck: Deck,
    table: Vec<Card>,
    players: Vec<Player>,
    teams: [Team; 2],
    current_player_index: usize,
    last_captor: Option<usize>,
    last_played_card: Option<Card>,
    log: Vec<String>,
    finalized: bool,
    rng: GameRng,
}

impl BastraGame {
    /// Create a new game with a full unshuffled deck and the two fixed
    /// teams. Players are added afterwards, before dealing.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::standard(),
            table: Vec::new(),
            players: Vec::new(),
            teams: [
                Team::new(TeamId::new(0), "Team 1"),
                Team::new(TeamId::new(1), "Team 2"),
            ],
            current_player_index: 0,
            last_captor: None,
            last_played_card: None,
            log: Vec::new(),
            finalized: false,
            rng: GameRng::new(seed),
        }
    }

    /// Register a player and seat them on `team`. Setup only, before
    /// dealing. Returns the player's seat index.
    pub fn add_player(&mut self, name: impl Into<String>, team: TeamId, is_human: bool) -> usize {
        let index = self.players.len();
        self.players.push(Player::new(name, team, is_human));
        self.teams[team.index()].add_member(index);
        index
    }

    /// One-time initial deal: uniform shuffle, then four cards to each
    /// player in seating order, then four face-up to the table.
    pub fn deal_cards(&mut self) {
        self.deck.shuffle(&mut self.rng);

        for i in 0..self.players.len() {
            for _ in 0..DEAL_BATCH {
                if let Some(card) = self.deck.draw() {
                    self.players[i].add_to_hand(card);
                }
            }
        }

        for _ in 0..DEAL_BATCH {
            if let Some(card) = self.deck.draw() {
                self.table.push(card);
            }
        }

        self.log.push(
            "Game started. 4 cards dealt to each player and 4 cards placed on the table."
                .to_string(),
        );
    }

    /// Deal four more cards to each player in seating order. Skips
    /// players once the deck empties and never touches the table. No-op
    /// on an empty deck.
    pub fn deal_next_round(&mut self) {
        if self.deck.is_empty() {
            return;
        }

        for i in 0..self.players.len() {
            for _ in 0..DEAL_BATCH {
                if let Some(card) = self.deck.draw() {
                    self.players[i].add_to_hand(card);
                }
            }
        }

        self.log.push("Next round: 4 new cards dealt to each player.".to_string());
    }

    /// Play the current player's card at `card_index`.
    ///
    /// Rejects an out-of-range index with no state change. Otherwise the
    /// card is resolved against the table (see [`resolve_play`]), the
    /// turn pointer advances by one, and, if the round just ended with
    /// cards still in the deck, the next round is dealt automatically.
    pub fn play_turn(&mut self, card_index: usize) -> Result<PlayOutcome, PlayError> {
        let hand_size = self.players[self.current_player_index].hand().len();
        if card_index >= hand_size {
            return Err(PlayError::InvalidCardIndex {
                index: card_index,
                hand_size,
            });
        }

        let actor = self.current_player_index;
        let name = self.players[actor].name().to_string();
        let played = self.players[actor].play_card(card_index);
        self.last_played_card = Some(played);
        self.log.push(format!("{name} plays {played}"));

        let outcome = match resolve_play(played, &self.table) {
            Disposition::Placed => {
                self.table.push(played);
                self.log.push(format!("{name} placed {played} on the table"));
                PlayOutcome {
                    message: format!("Placed {played} on the table"),
                    captured: false,
                    is_bastra: false,
                    bastra_points: 0,
                    captured_cards: Vec::new(),
                }
            }
            Disposition::Captured {
                is_bastra,
                bastra_points,
            } => {
                let mut moved = std::mem::take(&mut self.table);
                moved.push(played);

                if is_bastra {
                    self.players[actor].add_bastra_points(bastra_points);
                    if played.rank == Rank::Jack {
                        self.log.push(format!(
                            "BASTRA with Jack! {name} gets {bastra_points} extra points!"
                        ));
                    } else {
                        self.log
                            .push(format!("BASTRA! {name} gets {bastra_points} extra points!"));
                    }
                }

                self.players[actor].capture_cards(&moved);
                self.last_captor = Some(actor);

                // A Jack can only ever capture via the Jack rule, so the
                // rank alone tells us which log line applies.
                if played.rank == Rank::Jack {
                    self.log.push(format!("{name} captured all cards with a Jack!"));
                } else {
                    self.log.push(format!("{name} captured {} cards", moved.len()));
                }

                PlayOutcome {
                    message: if is_bastra {
                        format!("Bastra! Captured cards with {played}")
                    } else {
                        format!("Captured cards with {played}")
                    },
                    captured: true,
                    is_bastra,
                    bastra_points,
                    captured_cards: moved,
                }
            }
        };

        self.current_player_index = (self.current_player_index + 1) % self.players.len();

        if self.is_round_complete() && !self.deck.is_empty() {
            self.deal_next_round();
        }

        Ok(outcome)
    }

    /// Select a card for the current AI player (see [`ai::choose_card`])
    /// and play it through the ordinary turn path.
    ///
    /// Rejects the call with no state change if the current seat is
    /// human.
    pub fn play_ai_turn(&mut self) -> Result<PlayOutcome, PlayError> {
        let player = &self.players[self.current_player_index];
        if player.is_human() {
            return Err(PlayError::NotAnAiPlayer);
        }

        match ai::choose_card(player.hand(), &self.table, &mut self.rng) {
            Some(index) => self.play_turn(index),
            None => Err(PlayError::InvalidCardIndex {
                index: 0,
                hand_size: 0,
            }),
        }
    }

    /// Every player's hand is empty.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.players.iter().all(|p| p.hand().is_empty())
    }

    /// The deck is exhausted and the round is complete.
    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.deck.is_empty() && self.is_round_complete()
    }

    /// One-time end-of-game settlement.
    ///
    /// Leftover table cards go to the last capturing player (skipped if
    /// no capture ever happened). Then the team holding strictly more
    /// captured cards gets a 3-point bonus, granted as three synthetic
    /// Ace-of-Hearts cards (1 point each) to that team's first-added
    /// player. Calling this a second time is a no-op.
    pub fn finalize_game(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;

        if !self.table.is_empty() {
            if let Some(captor) = self.last_captor {
                let remaining = std::mem::take(&mut self.table);
                self.log.push(format!(
                    "Remaining {} table cards given to {}",
                    remaining.len(),
                    self.players[captor].name()
                ));
                self.players[captor].capture_cards(&remaining);
            }
        }

        let count0 = self.teams[0].captured_count(&self.players);
        let count1 = self.teams[1].captured_count(&self.players);

        let leader = match count0.cmp(&count1) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        };

        match leader {
            Some(t) => {
                self.log.push(format!(
                    "{} has the most cards and gets 3 extra points",
                    self.teams[t].name()
                ));
                // Bookkeeping shortcut inherited from the rules: three
                // 1-point cards instead of a separate bonus counter, and
                // they go to the team's first-added player.
                if let Some(&first) = self.teams[t].members().first() {
                    for _ in 0..3 {
                        self.players[first].capture_cards(&[Card::new(Rank::Ace, Suit::Hearts)]);
                    }
                }
            }
            None => {
                self.log.push(
                    "Both teams have the same number of cards, no extra points awarded"
                        .to_string(),
                );
            }
        }
    }

    // === Read accessors for the presentation layer ===

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Seat index of the current player.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The two teams.
    #[must_use]
    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    /// The table pile, in placement order.
    #[must_use]
    pub fn table_cards(&self) -> &[Card] {
        &self.table
    }

    /// Number of undealt cards left in the deck.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.len()
    }

    /// The most recently played card, if any. The animation layer reads
    /// this after each turn.
    #[must_use]
    pub fn last_played_card(&self) -> Option<Card> {
        self.last_played_card
    }

    /// Current score per team id.
    #[must_use]
    pub fn team_scores(&self) -> FxHashMap<TeamId, u32> {
        self.teams
            .iter()
            .map(|t| (t.id(), t.score(&self.players)))
            .collect()
    }

    /// The team with the strictly higher score, or `None` on a tie.
    #[must_use]
    pub fn winning_team(&self) -> Option<&Team> {
        let score0 = self.teams[0].score(&self.players);
        let score1 = self.teams[1].score(&self.players);
        match score0.cmp(&score1) {
            std::cmp::Ordering::Greater => Some(&self.teams[0]),
            std::cmp::Ordering::Less => Some(&self.teams[1]),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The append-only event log, oldest first.
    #[must_use]
    pub fn log_messages(&self) -> &[String] {
        &self.log
    }
}
