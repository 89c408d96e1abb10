//! Heuristic card selection for AI seats.
//!
//! A shallow fixed-priority heuristic, no lookahead. The chosen index is
//! fed through the same turn path a human play takes; the AI has no
//! special-cased capture logic.

use crate::cards::{Card, Rank};
use crate::core::GameRng;

/// Pick a hand index for an AI player, or `None` if the hand is empty.
///
/// Priority order, first hit wins:
///
/// 1. the lowest-index hand card whose rank matches *any* card on the
///    table (the heuristic scans the whole pile, deliberately broader
///    than the capture match rule, which only checks the last card);
/// 2. the lowest-index Jack, provided the table is non-empty;
/// 3. a uniformly random hand card.
#[must_use]
pub fn choose_card(hand: &[Card], table: &[Card], rng: &mut GameRng) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }

    if let Some(i) = hand
        .iter()
        .position(|card| table.iter().any(|t| card.matches(*t)))
    {
        return Some(i);
    }

    if !table.is_empty() {
        if let Some(i) = hand.iter().position(|card| card.rank == Rank::Jack) {
            return Some(i);
        }
    }

    Some(rng.gen_range_usize(0..hand.len()))
}
