//! Greedy playouts for breaking root-level evaluation ties.
//!
//! When several root moves come out of the search with the same value, each
//! candidate is resolved by fast heuristic games: apply the candidate, then
//! repeatedly play the move with the highest ordering key until the game
//! ends, and average the final kazan difference over the trials. Playouts
//! that end in a severe loss are discarded; a candidate whose every trial is
//! discarded scores negative infinity so any alternative beats it.
//!
//! The only randomness is the choice among exactly tied ordering keys, drawn
//! from the caller's seeded RNG, so results are reproducible per seed.

use crate::constants::{KAZAN_A, KAZAN_B, MAX_PLAYOUT_MOVES};
use crate::game::{Game, Side, apply_move, is_terminal, legal_moves, sweep};
use crate::ordering::order_key;

/// Pick the greedy move, choosing uniformly among moves whose keys tie
/// exactly. Returns `None` when the side to move is stuck.
fn greedy_choice(game: &Game, rng: &mut fastrand::Rng) -> Option<usize> {
    let moves = legal_moves(game);
    let mut best_key = f64::NEG_INFINITY;
    let mut best: Vec<usize> = Vec::new();
    for pit in moves {
        let key = order_key(game, pit);
        if key > best_key {
            best_key = key;
            best.clear();
            best.push(pit);
        } else if key == best_key {
            best.push(pit);
        }
    }
    if best.is_empty() {
        None
    } else {
        Some(best[rng.usize(..best.len())])
    }
}

/// Play greedy moves in place until the game is terminal, the side to move
/// is stuck, or the move cap is hit.
pub fn greedy_playout(game: &mut Game, rng: &mut fastrand::Rng) {
    for _ in 0..MAX_PLAYOUT_MOVES {
        if is_terminal(game) {
            return;
        }
        let Some(pit) = greedy_choice(game, rng) else {
            return;
        };
        if apply_move(game, pit).is_err() {
            return;
        }
    }
}

/// Score a candidate root move by greedy playouts.
///
/// Each trial clones `game`, applies `pit`, plays out greedily, sweeps, and
/// reads the kazan difference signed for the original mover. Trials below
/// `loss_cutoff` are dropped; the result is the mean of the survivors, or
/// `f64::NEG_INFINITY` when nothing survives.
pub fn rollout_score(
    game: &Game,
    pit: usize,
    num_simulations: usize,
    loss_cutoff: f64,
    rng: &mut fastrand::Rng,
) -> f64 {
    let mover = game.turn;
    let mut total = 0.0;
    let mut kept = 0usize;

    for _ in 0..num_simulations {
        let mut sim = game.clone();
        if apply_move(&mut sim, pit).is_err() {
            continue;
        }
        greedy_playout(&mut sim, rng);
        sweep(&mut sim);

        let diff = sim.board[KAZAN_A] as f64 - sim.board[KAZAN_B] as f64;
        let signed = match mover {
            Side::A => diff,
            Side::B => -diff,
        };
        if signed < loss_cutoff {
            continue;
        }
        total += signed;
        kept += 1;
    }

    if kept == 0 {
        f64::NEG_INFINITY
    } else {
        total / kept as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NUM_SLOTS, ROLLOUT_LOSS_CUTOFF, TOTAL_STONES};

    fn game_with(board: [u8; NUM_SLOTS], turn: Side) -> Game {
        Game { board, turn }
    }

    #[test]
    fn test_playout_finishes_and_conserves() {
        let mut game = Game::new();
        let mut rng = fastrand::Rng::with_seed(7);
        greedy_playout(&mut game, &mut rng);
        sweep(&mut game);
        assert_eq!(game.total_stones(), TOTAL_STONES);
        assert!(is_terminal(&game) || legal_moves(&game).is_empty());
    }

    #[test]
    fn test_rollout_score_is_deterministic_per_seed() {
        let game = Game::new();
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        let sa = rollout_score(&game, 0, 5, ROLLOUT_LOSS_CUTOFF, &mut a);
        let sb = rollout_score(&game, 0, 5, ROLLOUT_LOSS_CUTOFF, &mut b);
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_hopeless_candidate_scores_negative_infinity() {
        // B already banked 32 of the 36 stones; A can reach at most 4.
        let game = game_with([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 32], Side::A);
        let mut rng = fastrand::Rng::with_seed(1);
        let score = rollout_score(&game, 0, 5, ROLLOUT_LOSS_CUTOFF, &mut rng);
        assert_eq!(score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_winning_position_scores_positive() {
        // A already banked 32 stones.
        let game = game_with([2, 0, 0, 0, 0, 0, 32, 2, 0, 0, 0, 0, 0, 0], Side::A);
        let mut rng = fastrand::Rng::with_seed(1);
        let score = rollout_score(&game, 0, 5, ROLLOUT_LOSS_CUTOFF, &mut rng);
        assert!(score > 0.0);
    }
}
