//! Integration tests for kazan-rust
//!
//! Cross-module properties that the unit tests cannot cover on their own:
//! stone conservation across whole games, illegal-move atomicity against
//! every non-legal index, search determinism, and equivalence of the pruned
//! search with a plain unpruned minimax.

use kazan_rust::constants::{KAZAN_A, KAZAN_B, NUM_SLOTS, TOTAL_STONES};
use kazan_rust::eval::score;
use kazan_rust::game::{
    Game, Side, TurnOutcome, apply_move, is_terminal, legal_moves, sweep,
};
use kazan_rust::ordering::greedy_move;
use kazan_rust::search::Engine;

// =============================================================================
// Helpers
// =============================================================================

/// Play a fixed sequence of pits from a fresh game. Every move in the
/// sequence must be legal.
fn after_moves(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for &pit in moves {
        apply_move(&mut game, pit).expect("setup move must be legal");
    }
    game
}

/// Plain depth-limited minimax: no pruning, no memoization, same depth
/// policy as the engine (retained turns are free). Side A maximizes.
fn plain_minimax(game: &Game, depth: i32) -> f64 {
    let moves = legal_moves(game);
    if depth <= 0 || moves.is_empty() || is_terminal(game) {
        return score(game);
    }
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
        let next_depth = match outcome {
            TurnOutcome::Retained => depth,
            TurnOutcome::Passed => depth - 1,
        };
        let value = plain_minimax(&child, next_depth);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Root move values under the plain minimax, from the mover's perspective.
fn plain_root_values(game: &Game, depth: i32) -> Vec<(usize, f64)> {
    legal_moves(game)
        .into_iter()
        .map(|pit| {
            let mut child = game.clone();
            let outcome = apply_move(&mut child, pit).expect("legal move");
            let next_depth = match outcome {
                TurnOutcome::Retained => depth,
                TurnOutcome::Passed => depth - 1,
            };
            let value = plain_minimax(&child, next_depth);
            let value = match game.turn {
                Side::A => value,
                Side::B => -value,
            };
            (pit, value)
        })
        .collect()
}

/// A handful of reachable positions, opening through midgame.
fn sample_positions() -> Vec<Game> {
    vec![
        Game::new(),
        after_moves(&[0]),
        after_moves(&[0, 7]),
        after_moves(&[0, 7, 1, 8]),
        after_moves(&[2, 9]),
    ]
}

// =============================================================================
// Conservation and legality
// =============================================================================

#[test]
fn test_conservation_over_full_games() {
    for seed in 0..3u64 {
        let mut game = Game::new();
        let mut engine = Engine::with_seed(3, seed);
        let mut plies = 0;

        while !is_terminal(&game) && plies < 1000 {
            let pit = match game.turn {
                Side::A => match engine.best_move(&game) {
                    Ok(pit) => pit,
                    Err(_) => break,
                },
                Side::B => match greedy_move(&game) {
                    Some(pit) => pit,
                    None => break,
                },
            };
            apply_move(&mut game, pit).expect("chosen move must be legal");
            assert_eq!(game.total_stones(), TOTAL_STONES);
            plies += 1;
        }

        // A game can also end stuck: non-terminal, but the side to move has
        // no legal pit. The sweep only fires on terminal boards, so the
        // kazans hold everything only in that case; conservation holds in
        // both.
        let ended_terminal = is_terminal(&game);
        sweep(&mut game);
        assert_eq!(game.total_stones(), TOTAL_STONES);
        if ended_terminal {
            assert_eq!(
                u32::from(game.board[KAZAN_A]) + u32::from(game.board[KAZAN_B]),
                TOTAL_STONES,
                "after the final sweep every stone sits in a kazan"
            );
        } else {
            assert!(
                legal_moves(&game).is_empty(),
                "a non-terminal ending must be a stuck position"
            );
        }
    }
}

#[test]
fn test_non_legal_indices_never_mutate() {
    for game in sample_positions() {
        let legal = legal_moves(&game);
        for pit in 0..NUM_SLOTS + 2 {
            if legal.contains(&pit) {
                continue;
            }
            let mut probe = game.clone();
            assert!(
                apply_move(&mut probe, pit).is_err(),
                "pit {pit} is not legal and must be rejected"
            );
            assert_eq!(probe, game, "rejected move must not touch the board");
        }
    }
}

// =============================================================================
// Search behavior
// =============================================================================

#[test]
fn test_best_move_deterministic_across_engines() {
    for game in sample_positions() {
        let mut first = Engine::with_seed(4, 123);
        let mut second = Engine::with_seed(4, 123);
        assert_eq!(
            first.best_move(&game).unwrap(),
            second.best_move(&game).unwrap()
        );
    }
}

#[test]
fn test_pruned_search_matches_plain_minimax() {
    for depth in [1, 2, 3] {
        for game in sample_positions() {
            let mut engine = Engine::with_seed(depth, 0);
            let pruned = engine.root_values(&game);
            let plain = plain_root_values(&game, depth);
            assert_eq!(
                pruned, plain,
                "root values diverge at depth {depth} on:\n{game}"
            );
        }
    }
}

#[test]
fn test_chosen_move_is_in_plain_argmax_set() {
    for game in sample_positions() {
        let depth = 2;
        let plain = plain_root_values(&game, depth);
        let best = plain
            .iter()
            .map(|&(_, v)| v)
            .fold(f64::NEG_INFINITY, f64::max);
        let argmax: Vec<usize> = plain
            .iter()
            .filter(|&&(_, v)| v == best)
            .map(|&(p, _)| p)
            .collect();

        let mut engine = Engine::with_seed(depth, 7);
        let chosen = engine.best_move(&game).unwrap();
        assert!(
            argmax.contains(&chosen),
            "engine chose {chosen}, optimal set is {argmax:?}"
        );
    }
}

#[test]
fn test_depth_zero_still_moves() {
    // With no depth budget the engine degrades to one-ply evaluation but
    // must still produce a legal move.
    let game = Game::new();
    let mut engine = Engine::with_seed(0, 0);
    let pit = engine.best_move(&game).unwrap();
    assert!(legal_moves(&game).contains(&pit));
}

// =============================================================================
// Whole-game scenarios
// =============================================================================

#[test]
fn test_engine_finishes_a_game_against_greedy() {
    let mut game = Game::new();
    let mut engine = Engine::with_seed(3, 99);
    let mut plies = 0;

    while !is_terminal(&game) && plies < 1000 {
        let pit = match game.turn {
            Side::A => match engine.best_move(&game) {
                Ok(pit) => pit,
                Err(_) => break,
            },
            Side::B => match greedy_move(&game) {
                Some(pit) => pit,
                None => break,
            },
        };
        apply_move(&mut game, pit).expect("chosen move must be legal");
        plies += 1;
    }

    assert!(plies < 1000, "game must end in a bounded number of plies");
    let ended_terminal = is_terminal(&game);
    sweep(&mut game);
    assert_eq!(game.total_stones(), TOTAL_STONES);
    if ended_terminal {
        for side in [Side::A, Side::B] {
            for i in side.pits() {
                assert_eq!(game.board[i], 0, "all pits empty after the sweep");
            }
        }
    } else {
        // Stuck ending: the board keeps its stranded stones and the sweep
        // must not have moved them.
        assert!(legal_moves(&game).is_empty());
        assert!(
            u32::from(game.board[KAZAN_A]) + u32::from(game.board[KAZAN_B]) < TOTAL_STONES,
            "a stuck board leaves stones outside the kazans"
        );
    }
}

#[test]
fn test_greedy_against_greedy_terminates() {
    let mut game = Game::new();
    let mut plies = 0;
    while !is_terminal(&game) && plies < 1000 {
        let Some(pit) = greedy_move(&game) else { break };
        apply_move(&mut game, pit).expect("greedy move must be legal");
        plies += 1;
    }
    assert!(plies < 1000);
    sweep(&mut game);
    assert_eq!(game.total_stones(), TOTAL_STONES);
}
