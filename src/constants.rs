//! Default game parameters and turn limits.
//!
//! Board size, player count, and stones per player are chosen at runtime
//! through [`GameConfig`](crate::config::GameConfig); the values here are the
//! defaults it falls back to.

// =============================================================================
// Game Defaults
// =============================================================================

/// Default board size (NxN).
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Default number of players.
pub const DEFAULT_PLAYERS: usize = 2;

/// Default number of stones each player places.
pub const DEFAULT_STONES_PER_PLAYER: usize = 2;

/// Largest board size a game accepts.
pub const MAX_BOARD_SIZE: usize = 32;

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 2;

// =============================================================================
// Turn Limits
// =============================================================================

/// Single steps a player may spend moving a stone before placing a wall.
pub const STEPS_PER_TURN: usize = 2;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets to orthogonal neighbors as (dx, dy).
/// Order: Left, Right, Up, Down
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Rendering
// =============================================================================

/// Empty cell in text renderings.
pub const EMPTY: char = '.';

/// Glyph for an occupied horizontal wall slot.
pub const WALL_HORIZONTAL: &str = "---";

/// Glyph for an occupied vertical wall slot.
pub const WALL_VERTICAL: char = '|';
