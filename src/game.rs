//! Mangala game state and rules.
//!
//! This module provides the core game logic, including:
//! - Board state representation as a flat 14-slot array
//! - Move legality, sowing, and both capture rules
//! - Retained-turn (replay) detection
//! - Terminal detection and the end-of-game sweep
//!
//! The board layout follows the canonical indexing: slots 0-5 are side A's
//! pits, slot 6 is side A's kazan, slots 7-12 are side B's pits, slot 13 is
//! side B's kazan. Sowing runs counter-clockwise (increasing index, wrapping
//! at 14) and never drops a stone into the opponent's kazan.

use std::fmt;
use std::ops::Range;

use crate::constants::*;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Index range of this side's own pits.
    #[inline]
    pub fn pits(self) -> Range<usize> {
        match self {
            Side::A => 0..PITS_PER_SIDE,
            Side::B => KAZAN_A + 1..KAZAN_B,
        }
    }

    /// Index of this side's kazan (store).
    #[inline]
    pub fn kazan(self) -> usize {
        match self {
            Side::A => KAZAN_A,
            Side::B => KAZAN_B,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Reason a move was rejected. The board is never mutated when one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// Index is a kazan or outside the board
    OutOfRange,
    /// Pit belongs to the opponent
    WrongSide,
    /// Pit holds no stones
    EmptyPit,
    /// Pit holds a single stone and no equality capture applies
    TooFewStones,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfRange => write!(f, "illegal move: not a pit index"),
            IllegalMove::WrongSide => write!(f, "illegal move: not your pit"),
            IllegalMove::EmptyPit => write!(f, "illegal move: pit is empty"),
            IllegalMove::TooFewStones => {
                write!(f, "illegal move: at least {MIN_SOW_STONES} stones needed to sow")
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Whether the mover keeps the turn after a move resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The mover plays again
    Retained,
    /// The turn flips to the opponent
    Passed,
}

impl TurnOutcome {
    #[inline]
    pub fn retained(self) -> bool {
        matches!(self, TurnOutcome::Retained)
    }
}

/// A complete game state: the board plus the side to move.
///
/// Cloning is cheap (14 bytes plus a tag), which the search relies on: every
/// explored node operates on an independent copy. `Hash`/`Eq` make the state
/// directly usable as a transposition-table key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    /// Stone count per slot, kazans included
    pub board: [u8; NUM_SLOTS],
    /// Side to move
    pub turn: Side,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a fresh game: every pit seeded, both kazans empty, side A to
    /// move.
    pub fn new() -> Self {
        let mut board = [INITIAL_SEEDS; NUM_SLOTS];
        board[KAZAN_A] = 0;
        board[KAZAN_B] = 0;
        Game {
            board,
            turn: Side::A,
        }
    }

    /// Sum of all stones on the board. Constant for the lifetime of a game.
    pub fn total_stones(&self) -> u32 {
        self.board.iter().map(|&c| c as u32).sum()
    }
}

/// The pit opposite `pit`, i.e. the one it shares an equality capture with.
///
/// Only defined for playable pit indices (0-5 and 7-12).
#[inline]
pub fn mirror_pit(pit: usize) -> usize {
    2 * PITS_PER_SIDE - pit
}

/// Check whether selecting `pit` triggers an immediate equality capture for
/// the side to move: the pit and its mirror hold the same nonzero count and
/// that count is not the excluded value.
pub fn can_capture_equal(game: &Game, pit: usize) -> bool {
    game.turn.pits().contains(&pit)
        && game.board[pit] > 0
        && game.board[pit] == game.board[mirror_pit(pit)]
        && game.board[pit] != EQUALITY_EXCLUDED_COUNT
}

/// Slot the last sown stone would land in if the side to move sowed `pit`,
/// or `None` if the pit cannot be sowed.
///
/// Walks the same path as [`apply_move`]: one stone stays behind, the rest
/// are dropped counter-clockwise, skipping the opponent's kazan.
pub fn landing_slot(game: &Game, pit: usize) -> Option<usize> {
    if !game.turn.pits().contains(&pit) || game.board[pit] < MIN_SOW_STONES {
        return None;
    }
    let skip = game.turn.opponent().kazan();
    let mut stones = game.board[pit] - 1;
    let mut idx = pit;
    while stones > 0 {
        idx = (idx + 1) % NUM_SLOTS;
        if idx == skip {
            continue;
        }
        stones -= 1;
    }
    Some(idx)
}

/// List the pits the side to move may play: own pits that are either
/// sowable (at least [`MIN_SOW_STONES`] stones) or equality-capturable.
///
/// An empty result on a non-terminal board means the side to move is stuck;
/// callers treat that as the end of play.
pub fn legal_moves(game: &Game) -> Vec<usize> {
    game.turn
        .pits()
        .filter(|&i| game.board[i] >= MIN_SOW_STONES || can_capture_equal(game, i))
        .collect()
}

/// Play `pit` for the side to move, mutating the game in place.
///
/// Resolution order matches the rules: equality capture first (no sowing),
/// then sowing with the landing checks (own kazan grants a replay; an own
/// pit reaching exactly 1 or 3 is captured and also grants a replay).
/// Returns whether the turn was retained.
///
/// # Errors
///
/// Fails with [`IllegalMove`] before any mutation if `pit` is not a playable
/// pit of the side to move.
pub fn apply_move(game: &mut Game, pit: usize) -> Result<TurnOutcome, IllegalMove> {
    if pit >= NUM_SLOTS || pit == KAZAN_A || pit == KAZAN_B {
        return Err(IllegalMove::OutOfRange);
    }
    if !game.turn.pits().contains(&pit) {
        return Err(IllegalMove::WrongSide);
    }
    if game.board[pit] == 0 {
        return Err(IllegalMove::EmptyPit);
    }

    let total_before = game.total_stones();
    let kazan = game.turn.kazan();

    if can_capture_equal(game, pit) {
        let mirror = mirror_pit(pit);
        game.board[kazan] += game.board[pit] + game.board[mirror];
        game.board[pit] = 0;
        game.board[mirror] = 0;
        debug_assert_eq!(game.total_stones(), total_before);
        return Ok(TurnOutcome::Retained);
    }

    if game.board[pit] < MIN_SOW_STONES {
        return Err(IllegalMove::TooFewStones);
    }

    // Leave one stone behind and sow the rest.
    let skip = game.turn.opponent().kazan();
    let mut stones = game.board[pit] - 1;
    game.board[pit] = 1;
    let mut idx = pit;
    while stones > 0 {
        idx = (idx + 1) % NUM_SLOTS;
        if idx == skip {
            continue;
        }
        game.board[idx] += 1;
        stones -= 1;
    }
    debug_assert_eq!(game.total_stones(), total_before);

    if idx == kazan {
        return Ok(TurnOutcome::Retained);
    }

    if game.turn.pits().contains(&idx) && CAPTURE_LANDING_COUNTS.contains(&game.board[idx]) {
        game.board[kazan] += game.board[idx];
        game.board[idx] = 0;
        return Ok(TurnOutcome::Retained);
    }

    game.turn = game.turn.opponent();
    Ok(TurnOutcome::Passed)
}

/// True iff either side's six pits are all empty.
pub fn is_terminal(game: &Game) -> bool {
    Side::A.pits().all(|i| game.board[i] == 0) || Side::B.pits().all(|i| game.board[i] == 0)
}

/// Sweep each side's remaining pit stones into its own kazan.
///
/// Only fires on a terminal board; calling it again (or on a non-terminal
/// board) is a no-op.
pub fn sweep(game: &mut Game) {
    if !is_terminal(game) {
        return;
    }
    for side in [Side::A, Side::B] {
        let kazan = side.kazan();
        for i in side.pits() {
            game.board[kazan] += game.board[i];
            game.board[i] = 0;
        }
    }
}

impl fmt::Display for Game {
    /// Render the board with side B's pits on top (indices 12 down to 7),
    /// kazans on the flanks, and side A's pits on the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for i in Side::B.pits().rev() {
            write!(f, " {:2}", self.board[i])?;
        }
        writeln!(f)?;
        writeln!(
            f,
            " {:2} {:width$} {:2}",
            self.board[KAZAN_B],
            "",
            self.board[KAZAN_A],
            width = 3 * PITS_PER_SIDE - 1
        )?;
        write!(f, "    ")?;
        for i in Side::A.pits() {
            write!(f, " {:2}", self.board[i])?;
        }
        writeln!(f)?;
        write!(f, "to move: {}", self.turn)
    }
}
