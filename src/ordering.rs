//! Cheap move-ordering heuristic and the greedy baseline policy.
//!
//! [`order_key`] ranks a mover's candidate pits without any lookahead so the
//! alpha-beta search can expand promising moves first: equality captures
//! outrank everything, kazan landings (replays) come next, then bigger pits.
//! The same key drives the greedy playouts used by the rollout tie-breaker
//! and the lookahead-free baseline opponent.

use crate::constants::*;
use crate::game::{Game, can_capture_equal, landing_slot, legal_moves};

/// Heuristic ranking of playing `pit` for the side to move. Higher is
/// better for the mover. Runs once per candidate per search node, so it
/// stays recursion-free.
pub fn order_key(game: &Game, pit: usize) -> f64 {
    let mut key = game.board[pit] as f64 * ORDER_STONE_WEIGHT;
    if can_capture_equal(game, pit) {
        key += ORDER_CAPTURE_BONUS;
    }
    if landing_slot(game, pit) == Some(game.turn.kazan()) {
        key += ORDER_REPLAY_BONUS;
    }
    key
}

/// The baseline policy: the legal move with the highest [`order_key`], or
/// `None` when the side to move is stuck. Exact key ties resolve to the
/// lowest pit index, so the baseline is fully deterministic.
pub fn greedy_move(game: &Game) -> Option<usize> {
    legal_moves(game)
        .into_iter()
        .max_by(|&a, &b| {
            order_key(game, a)
                .partial_cmp(&order_key(game, b))
                .unwrap_or(std::cmp::Ordering::Equal)
                // max_by keeps the later element on ties; prefer the earlier
                .then(b.cmp(&a))
        })
}
