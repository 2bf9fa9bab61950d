//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Side A always maximizes and side B always minimizes, over the
//! A-referenced static evaluation from [`crate::eval`]. Depth is budgeted in
//! passed turns: a move that retains the turn costs no depth, so extra-turn
//! chains are bounded by the opponent's reachable replies rather than
//! explored for free. Computed values are memoized per (state, residual
//! depth) within one top-level decision; the table is cleared on every
//! [`Engine::best_move`] call because depth-indexed entries from an earlier
//! decision are not comparable.
//!
//! The root scores every legal move against the full window, collects the
//! set of moves tied at the best value, and resolves multi-way ties with
//! greedy rollouts ([`crate::rollout`]).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::constants::{DEFAULT_MAX_DEPTH, ROLLOUT_LOSS_CUTOFF, ROLLOUT_SIMULATIONS};
use crate::eval::score;
use crate::game::{Game, Side, TurnOutcome, apply_move, is_terminal, legal_moves};
use crate::ordering::order_key;
use crate::rollout::rollout_score;

/// Caller misuse: asking for a best move on a position with no legal moves.
/// Callers must check terminality and `legal_moves` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreconditionViolation;

impl fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no legal moves for the side to move")
    }
}

impl std::error::Error for PreconditionViolation {}

/// The search engine. One instance is constructed per player and reused for
/// every decision in a match; the transposition table is scoped to a single
/// decision and reset internally.
pub struct Engine {
    max_depth: i32,
    table: HashMap<(Game, i32), f64>,
    rng: fastrand::Rng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Engine {
    /// Create an engine searching to `max_depth` passed turns, with an
    /// entropy-seeded rollout RNG.
    pub fn new(max_depth: i32) -> Self {
        Self {
            max_depth,
            table: HashMap::new(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Like [`Engine::new`] but with a fixed rollout seed, for reproducible
    /// tie-breaking.
    pub fn with_seed(max_depth: i32, seed: u64) -> Self {
        Self {
            max_depth,
            table: HashMap::new(),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Pick the strongest move for the side to move.
    ///
    /// Every legal root move is searched against the full window; if several
    /// tie at the top value the rollout tie-breaker decides among them
    /// (falling back to the lowest pit index when even the rollouts tie).
    ///
    /// # Errors
    ///
    /// [`PreconditionViolation`] when the side to move has no legal move.
    pub fn best_move(&mut self, game: &Game) -> Result<usize, PreconditionViolation> {
        let values = self.root_values(game);

        let mut best_value = f64::NEG_INFINITY;
        let mut tied: Vec<usize> = Vec::new();
        for &(pit, value) in &values {
            if value > best_value {
                best_value = value;
                tied.clear();
                tied.push(pit);
            } else if value == best_value {
                tied.push(pit);
            }
        }

        let Some(&first) = tied.first() else {
            return Err(PreconditionViolation);
        };
        if tied.len() == 1 {
            return Ok(first);
        }

        let mut best_pit = first;
        let mut best_rollout = f64::NEG_INFINITY;
        for &pit in &tied {
            let rollout = rollout_score(
                game,
                pit,
                ROLLOUT_SIMULATIONS,
                ROLLOUT_LOSS_CUTOFF,
                &mut self.rng,
            );
            if rollout > best_rollout {
                best_rollout = rollout;
                best_pit = pit;
            }
        }
        Ok(best_pit)
    }

    /// Search every legal root move and return (pit, value) pairs from the
    /// mover's perspective. Resets the transposition table: this is the
    /// start of a fresh top-level decision.
    pub fn root_values(&mut self, game: &Game) -> Vec<(usize, f64)> {
        self.table.clear();
        let mover = game.turn;

        legal_moves(game)
            .into_iter()
            .filter_map(|pit| {
                let mut child = game.clone();
                let outcome = apply_move(&mut child, pit).ok()?;
                let next_depth = self.depth_after(outcome, self.max_depth);
                let value = self.minimax(&child, next_depth, f64::NEG_INFINITY, f64::INFINITY);
                let value = match mover {
                    Side::A => value,
                    Side::B => -value,
                };
                Some((pit, value))
            })
            .collect()
    }

    /// Retained turns consume no depth budget; passed turns consume one.
    #[inline]
    fn depth_after(&self, outcome: TurnOutcome, depth: i32) -> i32 {
        match outcome {
            TurnOutcome::Retained => depth,
            TurnOutcome::Passed => depth - 1,
        }
    }

    fn minimax(&mut self, game: &Game, depth: i32, mut alpha: f64, mut beta: f64) -> f64 {
        let key = (game.clone(), depth);
        if let Some(&cached) = self.table.get(&key) {
            return cached;
        }

        let moves = ordered_moves(game);
        if depth <= 0 || moves.is_empty() || is_terminal(game) {
            let value = score(game);
            self.table.insert(key, value);
            return value;
        }

        let (alpha0, beta0) = (alpha, beta);
        let maximizing = game.turn == Side::A;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for pit in moves {
            let mut child = game.clone();
            let Ok(outcome) = apply_move(&mut child, pit) else {
                continue;
            };
            let value = self.minimax(&child, self.depth_after(outcome, depth), alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        // Memoize only window-exact values. A value clamped by the incoming
        // window is a bound, and replaying a bound from the table under a
        // wider window later in the same decision would corrupt the root
        // ranking.
        if best > alpha0 && best < beta0 {
            self.table.insert(key, best);
        }
        best
    }
}

/// Legal moves sorted by the ordering key: strongest-for-the-mover first at
/// maximizing nodes, last at minimizing nodes. The sort is stable, so key
/// ties keep ascending pit order.
fn ordered_moves(game: &Game) -> Vec<usize> {
    let mut moves = legal_moves(game);
    moves.sort_by(|&a, &b| {
        let ord = order_key(game, a)
            .partial_cmp(&order_key(game, b))
            .unwrap_or(Ordering::Equal);
        match game.turn {
            Side::A => ord.reverse(),
            Side::B => ord,
        }
    });
    moves
}
