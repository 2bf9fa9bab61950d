//! Kazan-Rust: a Mangala (kazan) engine.
//!
//! This crate implements the two-player seed-sowing game Mangala and an
//! adversarial search engine that picks strong moves: depth-limited minimax
//! with alpha-beta pruning, per-decision transposition memoization,
//! heuristic move ordering, and greedy-rollout tie-breaking at the root.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, rule thresholds, and engine weights
//! - [`game`] - Core game logic (board state, sowing, captures, sweep)
//! - [`eval`] - Static position evaluation
//! - [`ordering`] - Move-ordering heuristic and the greedy baseline policy
//! - [`search`] - Alpha-beta search with a transposition table
//! - [`rollout`] - Greedy playouts for root tie-breaking
//!
//! ## Example
//!
//! ```
//! use kazan_rust::game::{Game, apply_move, legal_moves};
//! use kazan_rust::search::Engine;
//!
//! // Create a new game
//! let mut game = Game::new();
//!
//! // Ask the engine for a move and play it
//! let mut engine = Engine::with_seed(3, 42);
//! let pit = engine.best_move(&game).unwrap();
//! assert!(legal_moves(&game).contains(&pit));
//! apply_move(&mut game, pit).unwrap();
//! ```

pub mod constants;
pub mod eval;
pub mod game;
pub mod ordering;
pub mod rollout;
pub mod search;
