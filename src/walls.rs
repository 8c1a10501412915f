//! Wall placement.
//!
//! Each turn in the moving phase ends with the current player putting a wall
//! on one of the four edges of the stone they acted with. Walls never move
//! and never disappear.

use tracing::{debug, instrument};

use crate::board::{Board, Orientation, Stone, StoneId, Wall};
use crate::error::GameError;
use crate::game::{Command, Game};
use crate::result::GameResult;

impl Board {
    /// Free wall slots on the four edges of `stone`'s cell, as walls owned by
    /// the stone's player. Order: above, below, left, right.
    pub fn placable_walls(&self, stone: &Stone) -> Vec<Wall> {
        let (x, y) = stone.position;
        [
            (Orientation::Horizontal, x, y),
            (Orientation::Horizontal, x, y + 1),
            (Orientation::Vertical, x, y),
            (Orientation::Vertical, x + 1, y),
        ]
        .into_iter()
        .filter(|&(orientation, wx, wy)| self.is_wall_slot_free(orientation, wx, wy))
        .map(|(orientation, wx, wy)| Wall::new(stone.player, orientation, wx, wy))
        .collect()
    }
}

impl Game {
    /// Walls that could go next to `stone` right now. Empty for an unknown
    /// stone.
    pub fn placable_walls_for_stone(&self, stone: StoneId) -> Vec<Wall> {
        self.board
            .stone(stone)
            .map(|s| self.board.placable_walls(s))
            .unwrap_or_default()
    }

    /// Place a wall next to `stone`, ending the current player's turn.
    ///
    /// Returns the final result if the wall separates every player's
    /// territory; the game is then over.
    ///
    /// # Errors
    /// - `GameOver` if the game has ended
    /// - `WrongTurn` if the stone is not the current player's
    /// - `IllegalWall` if the wall is not one of
    ///   [`placable_walls_for_stone`](Self::placable_walls_for_stone), the game
    ///   is not in the moving phase, or a different stone moved this turn
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn place_wall_for_stone(
        &mut self,
        stone: StoneId,
        wall: Wall,
    ) -> Result<Option<GameResult>, GameError> {
        self.guard(Command::Wall { stone, wall })?;
        if !self.placable_walls_for_stone(stone).contains(&wall) {
            return Err(GameError::IllegalWall { stone, wall });
        }

        self.board.set_wall(wall);
        debug!(%wall, "wall placed");
        self.start_next_player();

        let result = self.board.check_for_game_completion();
        match &result {
            Some(result) => self.finish(result.clone()),
            None => self.skip_stuck_players(),
        }
        Ok(result)
    }
}
