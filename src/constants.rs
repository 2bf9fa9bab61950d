//! Constants for board geometry, rule thresholds, and engine parameters.
//!
//! This module contains all the configuration constants for the Mangala
//! engine. The board is a fixed 14-slot layout: six pits and one kazan
//! (store) per side. Evaluation and ordering weights are tuning knobs, not
//! rule constants; the rules themselves live in [`crate::game`] and only
//! read the thresholds defined here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Total number of slots on the board (12 pits + 2 kazans).
pub const NUM_SLOTS: usize = 14;

/// Number of playable pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Index of side A's kazan (store).
pub const KAZAN_A: usize = 6;

/// Index of side B's kazan (store).
pub const KAZAN_B: usize = 13;

/// Seeds placed in every pit at the start of a game.
pub const INITIAL_SEEDS: u8 = 3;

/// Total stones on the board; invariant across the whole game.
pub const TOTAL_STONES: u32 = 2 * PITS_PER_SIDE as u32 * INITIAL_SEEDS as u32;

// =============================================================================
// Rule Thresholds
// =============================================================================

/// A pit needs at least this many stones to be sowable.
/// A single-stone pit can only be played through an equality capture.
pub const MIN_SOW_STONES: u8 = 2;

/// Mirror pits holding exactly this count are exempt from equality capture.
pub const EQUALITY_EXCLUDED_COUNT: u8 = 3;

/// Landing in an own pit that reaches one of these counts captures the pit.
pub const CAPTURE_LANDING_COUNTS: [u8; 2] = [1, 3];

// =============================================================================
// Search Parameters
// =============================================================================

/// Default maximum search depth (in passed turns, not plies).
pub const DEFAULT_MAX_DEPTH: i32 = 5;

/// Number of greedy playouts per tied root candidate.
pub const ROLLOUT_SIMULATIONS: usize = 5;

/// Playouts ending below this signed kazan difference are discarded.
pub const ROLLOUT_LOSS_CUTOFF: f64 = -15.0;

/// Hard cap on moves per playout, against pathological shuffling lines.
pub const MAX_PLAYOUT_MOVES: usize = 1000;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of the kazan (store) difference.
pub const SCORE_KAZAN_WEIGHT: f64 = 2.0;

/// Weight of the pit stone-sum difference.
pub const SCORE_PIT_WEIGHT: f64 = 0.5;

/// Weight of the difference in pits holding more than one stone.
pub const SCORE_MOBILITY_WEIGHT: f64 = 0.2;

/// Bonus per side-to-move pit whose sow lands exactly on its own kazan.
pub const SCORE_REPLAY_BONUS: f64 = 3.0;

/// Penalty per opponent pit sitting in a capturable mirror-equality pair.
pub const SCORE_CAPTURE_RISK_PENALTY: f64 = 3.0;

/// Bonus when the opponent would be left with very few legal moves.
pub const SCORE_PRESSURE_BONUS: f64 = 2.0;

/// Opponent legal-move count at or below which the pressure bonus applies.
pub const LOW_MOBILITY_THRESHOLD: usize = 2;

// =============================================================================
// Move Ordering Weights
// =============================================================================

/// Ordering bonus for moves that trigger an equality capture.
pub const ORDER_CAPTURE_BONUS: f64 = 10.0;

/// Ordering bonus for moves whose last stone lands in the mover's kazan.
pub const ORDER_REPLAY_BONUS: f64 = 5.0;

/// Ordering weight per stone in the source pit.
pub const ORDER_STONE_WEIGHT: f64 = 0.1;
