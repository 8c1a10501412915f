//! Rule violations reported by game commands.

use derive_more::{Display, Error};

use crate::board::{PlayerId, StoneId, Wall};

/// Result of attempting a command against a [`Game`](crate::game::Game).
///
/// Every variant is a local rejection: the game is left exactly as it was
/// before the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Wrong phase, out of bounds, or cell occupied.
    #[display("cannot place a stone at ({x}, {y})")]
    InvalidPlacement { x: usize, y: usize },
    /// The acting stone belongs to someone other than the current player.
    #[display("it is player {current}'s turn, not player {player}'s")]
    WrongTurn { player: PlayerId, current: PlayerId },
    /// Wrong phase, no steps left, or destination not reachable in one step.
    #[display("stone {stone} cannot move to ({x}, {y})")]
    IllegalMove { stone: StoneId, x: usize, y: usize },
    /// Wall is not one of the placable walls for the stone.
    #[display("wall {wall} cannot be placed for stone {stone}")]
    IllegalWall { stone: StoneId, wall: Wall },
    /// The game is already over.
    #[display("game is already over")]
    GameOver,
}
