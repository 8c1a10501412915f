//! Stone movement under wall and occupancy constraints.
//!
//! [`Board::reachable_in_one_step`] is the single adjacency rule of the game:
//! stones step along it and region flood fills expand along it.

use tracing::{debug, instrument};

use crate::board::{Board, Point, StoneId, Wall, edge_between};
use crate::constants::DELTA;
use crate::error::GameError;
use crate::game::{Command, Game, Phase, TurnStage};

impl Board {
    /// Orthogonal neighbors of `from` that are on the board, not cut off by a
    /// wall on the shared edge, and empty.
    ///
    /// Returns an empty list for an off-board `from`.
    pub fn reachable_in_one_step(&self, from: Point) -> Vec<Point> {
        let (x, y) = from;
        if !self.in_bounds(x, y) {
            return Vec::new();
        }
        DELTA
            .iter()
            .filter_map(|&(dx, dy)| {
                let to = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
                if !self.is_empty(to.0, to.1) {
                    return None;
                }
                let (orientation, wx, wy) = edge_between(from, to)?;
                self.is_wall_slot_free(orientation, wx, wy).then_some(to)
            })
            .collect()
    }
}

impl Game {
    /// Whether `move_stone(stone, x, y)` passes the movement rules.
    ///
    /// Ownership is not checked here; `move_stone` reports it separately as
    /// `WrongTurn`.
    pub fn can_move_stone_to(&self, stone: StoneId, x: usize, y: usize) -> bool {
        if self.guard(Command::Step { stone, x, y }).is_err() {
            return false;
        }
        self.board
            .stone(stone)
            .is_some_and(|s| self.board.reachable_in_one_step(s.position).contains(&(x, y)))
    }

    /// Step a stone of the current player one cell, spending one step.
    ///
    /// Returns the walls that may now be placed next to the stone. The turn
    /// does not end until one of them (or another wall for this stone, after
    /// a further step) is placed.
    ///
    /// # Errors
    /// - `GameOver` if the game has ended
    /// - `IllegalMove` if the destination is not one step away, no steps are
    ///   left, another stone already moved this turn, or not in the moving phase
    /// - `WrongTurn` if the stone is not the current player's
    #[instrument(skip(self), fields(player = self.current_player))]
    pub fn move_stone(&mut self, stone: StoneId, x: usize, y: usize) -> Result<Vec<Wall>, GameError> {
        if self.phase == Phase::Over {
            return Err(GameError::GameOver);
        }
        if !self.can_move_stone_to(stone, x, y) {
            return Err(GameError::IllegalMove { stone, x, y });
        }
        if stone.player != self.current_player {
            return Err(GameError::WrongTurn {
                player: stone.player,
                current: self.current_player,
            });
        }

        self.board.relocate_stone(stone, (x, y));
        self.remaining_steps -= 1;
        self.stage = TurnStage::Stepped(stone);
        debug!(remaining = self.remaining_steps, "stone moved");

        Ok(self.placable_walls_for_stone(stone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Orientation;
    use crate::config::GameConfig;

    fn sorted(mut v: Vec<Point>) -> Vec<Point> {
        v.sort();
        v
    }

    fn moving_game() -> Game {
        let mut game = Game::new(GameConfig::default()).unwrap();
        for (x, y) in [(3, 3), (0, 0), (5, 5), (6, 0)] {
            game.place_stone(x, y).unwrap();
        }
        game
    }

    #[test]
    fn test_reachable_center() {
        let board = Board::new(5, 2);
        assert_eq!(
            sorted(board.reachable_in_one_step((2, 2))),
            vec![(1, 2), (2, 1), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn test_reachable_corners_stay_in_bounds() {
        let board = Board::new(5, 2);
        assert_eq!(sorted(board.reachable_in_one_step((0, 0))), vec![(0, 1), (1, 0)]);
        assert_eq!(sorted(board.reachable_in_one_step((4, 4))), vec![(3, 4), (4, 3)]);
        assert!(board.reachable_in_one_step((5, 0)).is_empty());
    }

    #[test]
    fn test_reachable_single_cell_board() {
        let board = Board::new(1, 2);
        assert!(board.reachable_in_one_step((0, 0)).is_empty());
    }

    #[test]
    fn test_walls_block_each_direction() {
        let mut board = Board::new(5, 2);
        board.set_wall(Wall::new(0, Orientation::Vertical, 2, 2)); // left
        board.set_wall(Wall::new(0, Orientation::Horizontal, 2, 3)); // below
        assert_eq!(sorted(board.reachable_in_one_step((2, 2))), vec![(2, 1), (3, 2)]);

        board.set_wall(Wall::new(1, Orientation::Vertical, 3, 2)); // right
        board.set_wall(Wall::new(1, Orientation::Horizontal, 2, 2)); // above
        assert!(board.reachable_in_one_step((2, 2)).is_empty());
    }

    #[test]
    fn test_walls_block_from_both_sides() {
        let mut board = Board::new(5, 2);
        board.set_wall(Wall::new(0, Orientation::Vertical, 3, 2));
        assert!(!board.reachable_in_one_step((2, 2)).contains(&(3, 2)));
        assert!(!board.reachable_in_one_step((3, 2)).contains(&(2, 2)));
    }

    #[test]
    fn test_stones_block() {
        let mut board = Board::new(5, 2);
        board.add_stone(0, (2, 1));
        board.add_stone(1, (1, 2));
        assert_eq!(sorted(board.reachable_in_one_step((2, 2))), vec![(2, 3), (3, 2)]);
    }

    #[test]
    fn test_move_stone() {
        let mut game = moving_game();
        let stone = StoneId::new(0, 0);
        assert!(game.can_move_stone_to(stone, 3, 4));
        assert!(!game.can_move_stone_to(stone, 4, 4));

        let walls = game.move_stone(stone, 3, 4).unwrap();
        assert_eq!(walls.len(), 4);
        assert_eq!(game.remaining_steps(), 1);
        assert_eq!(game.current_player(), 0);
        assert_eq!(game.turn_stage(), TurnStage::Stepped(stone));
        assert_eq!(game.board().cells().get(3, 3), None);
        assert_eq!(game.board().cells().get(3, 4), Some(stone));
        assert_eq!(game.stone(stone).map(|s| s.position), Some((3, 4)));
    }

    #[test]
    fn test_step_budget_runs_out() {
        let mut game = moving_game();
        let stone = StoneId::new(0, 0);
        game.move_stone(stone, 3, 4).unwrap();
        game.move_stone(stone, 3, 5).unwrap();
        assert_eq!(game.remaining_steps(), 0);
        assert!(!game.can_move_stone_to(stone, 3, 6));
        assert_eq!(
            game.move_stone(stone, 3, 6),
            Err(GameError::IllegalMove { stone, x: 3, y: 6 })
        );
    }

    #[test]
    fn test_only_one_stone_moves_per_turn() {
        let mut game = moving_game();
        game.move_stone(StoneId::new(0, 0), 3, 4).unwrap();
        let other = StoneId::new(0, 1);
        let before = game.clone();
        assert_eq!(
            game.move_stone(other, 5, 4),
            Err(GameError::IllegalMove { stone: other, x: 5, y: 4 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_wrong_turn() {
        let mut game = moving_game();
        let theirs = StoneId::new(1, 0);
        let before = game.clone();
        assert_eq!(
            game.move_stone(theirs, 1, 0),
            Err(GameError::WrongTurn { player: 1, current: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_into_occupied_or_far_cell() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        for (x, y) in [(3, 3), (3, 4), (0, 0), (6, 6)] {
            game.place_stone(x, y).unwrap();
        }
        let stone = StoneId::new(0, 0);
        let before = game.clone();
        assert_eq!(
            game.move_stone(stone, 3, 4),
            Err(GameError::IllegalMove { stone, x: 3, y: 4 })
        );
        assert_eq!(
            game.move_stone(stone, 3, 5),
            Err(GameError::IllegalMove { stone, x: 3, y: 5 })
        );
        assert_eq!(
            game.move_stone(stone, 3, 3),
            Err(GameError::IllegalMove { stone, x: 3, y: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_during_placement() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.place_stone(0, 0).unwrap();
        game.place_stone(6, 6).unwrap();
        let stone = StoneId::new(0, 0);
        assert_eq!(
            game.move_stone(stone, 1, 0),
            Err(GameError::IllegalMove { stone, x: 1, y: 0 })
        );
    }

    #[test]
    fn test_unknown_stone() {
        let mut game = moving_game();
        let ghost = StoneId::new(0, 9);
        assert!(!game.can_move_stone_to(ghost, 0, 1));
        assert_eq!(
            game.move_stone(ghost, 0, 1),
            Err(GameError::IllegalMove { stone: ghost, x: 0, y: 1 })
        );
    }
}
