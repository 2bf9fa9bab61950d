//! Static position evaluation.
//!
//! [`score`] is the leaf value of the search: a signed number where positive
//! favors side A regardless of whose turn it is. Symmetric material terms
//! (kazan difference, pit stones, pit mobility) are computed in side A's
//! frame directly; turn-dependent terms (replay chances, capture exposure,
//! opponent mobility pressure) are computed for the side to move and signed
//! toward it. The exact weights are tuning knobs living in
//! [`crate::constants`], not rule constants.

use crate::constants::*;
use crate::game::{Game, Side, landing_slot, legal_moves, mirror_pit};

fn pit_stones(game: &Game, side: Side) -> f64 {
    side.pits().map(|i| game.board[i] as f64).sum()
}

/// Number of a side's pits holding more than one stone, i.e. pits that will
/// still be sowable next turn.
fn good_pits(game: &Game, side: Side) -> usize {
    side.pits().filter(|&i| game.board[i] > 1).count()
}

/// Evaluate a position. Positive favors side A; callers wanting the value
/// from the mover's perspective negate when side B is to move.
pub fn score(game: &Game) -> f64 {
    let kazan_diff = game.board[KAZAN_A] as f64 - game.board[KAZAN_B] as f64;
    let pit_diff = pit_stones(game, Side::A) - pit_stones(game, Side::B);
    let mobility = good_pits(game, Side::A) as f64 - good_pits(game, Side::B) as f64;

    let mut score = kazan_diff * SCORE_KAZAN_WEIGHT
        + pit_diff * SCORE_PIT_WEIGHT
        + mobility * SCORE_MOBILITY_WEIGHT;

    let mover = game.turn;
    let sign = match mover {
        Side::A => 1.0,
        Side::B => -1.0,
    };

    // Replay opportunities: mover pits whose sow ends exactly on the kazan.
    for i in mover.pits() {
        if landing_slot(game, i) == Some(mover.kazan()) {
            score += sign * SCORE_REPLAY_BONUS;
        }
    }

    // Capture exposure on the opponent's side of the board: every mirror
    // pair sitting at equal, capturable counts.
    for i in mover.opponent().pits() {
        let count = game.board[i];
        if count > 0 && count == game.board[mirror_pit(i)] && count != EQUALITY_EXCLUDED_COUNT {
            score -= sign * SCORE_CAPTURE_RISK_PENALTY;
        }
    }

    // Zugzwang pressure: reward leaving the opponent with almost no moves.
    let mut flipped = game.clone();
    flipped.turn = mover.opponent();
    if legal_moves(&flipped).len() <= LOW_MOBILITY_THRESHOLD {
        score += sign * SCORE_PRESSURE_BONUS;
    }

    score
}
