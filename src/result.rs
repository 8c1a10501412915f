//! Game completion and scoring.
//!
//! The game ends once no cell can be reached by two different players: walls
//! (and stones) have split the board into private territories. The largest
//! territory wins; equal largest territories draw.

use std::fmt;

use crate::board::{Board, PlayerId};
use crate::region::Region;

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    winners: Vec<PlayerId>,
    regions: Vec<Region>,
}

impl GameResult {
    /// Players tied for the largest region, in ascending order.
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// The sole winner, or `None` on a draw.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.winners.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winners.len() > 1
    }

    /// Final region of every player, indexed by player id.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, player: PlayerId) -> Option<&Region> {
        self.regions.get(player)
    }

    /// Region size (score) of every player.
    pub fn sizes(&self) -> Vec<usize> {
        self.regions.iter().map(Region::len).collect()
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let players = self
            .winners
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let sizes = self
            .sizes()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if self.is_draw() {
            write!(f, "draw between players {players}; regions {sizes}")
        } else {
            write!(f, "player {players} wins; regions {sizes}")
        }
    }
}

/// Score a set of regions, one per player.
///
/// Returns `None` while some cell is still shared by two or more regions.
pub fn evaluate(regions: Vec<Region>) -> Option<GameResult> {
    if regions.is_empty() {
        return None;
    }
    for (i, region) in regions.iter().enumerate() {
        for (x, y) in region.points() {
            if regions[i + 1..].iter().any(|other| other.contains(x, y)) {
                return None;
            }
        }
    }

    let best = regions.iter().map(Region::len).max().unwrap_or(0);
    let winners = regions
        .iter()
        .enumerate()
        .filter(|(_, r)| r.len() == best)
        .map(|(player, _)| player)
        .collect();
    Some(GameResult { winners, regions })
}

impl Board {
    /// Compute every player's region and score them. Leaves the board
    /// untouched, so it is safe to call at any time.
    pub fn check_for_game_completion(&self) -> Option<GameResult> {
        evaluate((0..self.players()).map(|p| self.reachable_region(p)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Orientation, Wall};

    fn wall_column(board: &mut Board, x: usize) {
        for y in 0..board.size() {
            board.set_wall(Wall::new(0, Orientation::Vertical, x, y));
        }
    }

    #[test]
    fn test_open_board_is_not_complete() {
        let mut board = Board::new(7, 2);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (6, 6));
        assert_eq!(board.check_for_game_completion(), None);
    }

    #[test]
    fn test_one_shared_cell_keeps_game_open() {
        let mut board = Board::new(7, 2);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (6, 6));
        // Wall off the column boundary except for row 6
        for y in 0..6 {
            board.set_wall(Wall::new(0, Orientation::Vertical, 3, y));
        }
        assert_eq!(board.check_for_game_completion(), None);
    }

    #[test]
    fn test_halves_larger_side_wins() {
        let mut board = Board::new(7, 2);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (6, 6));
        wall_column(&mut board, 3);

        let result = board.check_for_game_completion().unwrap();
        assert_eq!(result.sizes(), vec![21, 28]);
        assert_eq!(result.winners(), &[1]);
        assert_eq!(result.winner(), Some(1));
        assert!(!result.is_draw());
        assert!(result.region(0).unwrap().contains(2, 5));
        assert!(!result.region(0).unwrap().contains(3, 5));
    }

    #[test]
    fn test_equal_regions_draw() {
        let mut board = Board::new(4, 2);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (3, 3));
        wall_column(&mut board, 2);

        let result = board.check_for_game_completion().unwrap();
        assert_eq!(result.winners(), &[0, 1]);
        assert_eq!(result.winner(), None);
        assert!(result.is_draw());
        assert_eq!(result.to_string(), "draw between players 0 1; regions 8 8");
    }

    #[test]
    fn test_three_players() {
        let mut board = Board::new(6, 3);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (2, 0));
        board.add_stone(2, (5, 5));
        wall_column(&mut board, 1);
        wall_column(&mut board, 3);

        let result = board.check_for_game_completion().unwrap();
        assert_eq!(result.sizes(), vec![6, 12, 18]);
        assert_eq!(result.winners(), &[2]);
        assert_eq!(result.to_string(), "player 2 wins; regions 6 12 18");
    }

    #[test]
    fn test_completion_is_idempotent() {
        let mut board = Board::new(4, 2);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (3, 3));
        wall_column(&mut board, 1);
        let first = board.check_for_game_completion();
        let second = board.check_for_game_completion();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn test_stones_alone_can_separate() {
        // A full board: every region is the stone's own cell
        let mut board = Board::new(2, 2);
        board.add_stone(0, (0, 0));
        board.add_stone(1, (1, 0));
        board.add_stone(0, (0, 1));
        board.add_stone(1, (1, 1));
        let result = board.check_for_game_completion().unwrap();
        assert_eq!(result.sizes(), vec![2, 2]);
        assert!(result.is_draw());
    }

    #[test]
    fn test_evaluate_no_regions() {
        assert_eq!(evaluate(Vec::new()), None);
    }
}
