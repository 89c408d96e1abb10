//! The capture decision: what happens when a card hits the table.
//!
//! `resolve_play` is a pure function over the played card and the table
//! pile. It decides the disposition; the game controller performs the
//! actual card movement and bookkeeping. Keeping the decision pure makes
//! the whole rule matrix directly testable.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Outcome of playing one card against the table pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// No capture: the card is appended to the table pile.
    Placed,
    /// The card captures the entire table pile plus itself.
    Captured {
        /// Whether this capture is a Bastra.
        is_bastra: bool,
        /// Bonus points awarded: 0, 10, or 20.
        bastra_points: u32,
    },
}

impl Disposition {
    /// Plain capture with no bonus.
    const CAPTURE: Disposition = Disposition::Captured {
        is_bastra: false,
        bastra_points: 0,
    };

    fn bastra(points: u32) -> Disposition {
        Disposition::Captured {
            is_bastra: true,
            bastra_points: points,
        }
    }
}

/// Decide what playing `played` against `table` does.
///
/// Decision order, first rule that applies wins:
///
/// 1. **Jack rule**: a Jack captures any non-empty pile. It is a Bastra
///    worth 20 only if the pile held exactly one card and that card was
///    itself a Jack. A Jack on an empty table is placed.
/// 2. **Match rule**: if the played card has the same rank as the *last*
///    card placed on the table, it captures the pile. Worth a 10-point
///    Bastra iff the pile held exactly one card. Only the last card is
///    consulted, never the rest of the pile; this variant does not scan.
/// 3. Otherwise the card is placed.
#[must_use]
pub fn resolve_play(played: Card, table: &[Card]) -> Disposition {
    if played.rank == Rank::Jack {
        return match table {
            [] => Disposition::Placed,
            [only] if only.rank == Rank::Jack => Disposition::bastra(20),
            _ => Disposition::CAPTURE,
        };
    }

    match table.last() {
        Some(&last) if played.matches(last) => {
            if table.len() == 1 {
                Disposition::bastra(10)
            } else {
                Disposition::CAPTURE
            }
        }
        _ => Disposition::Placed,
    }
}
