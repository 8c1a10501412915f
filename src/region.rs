//! Territory analysis by flood fill.
//!
//! A player's region is every cell their stones could walk to, one step at a
//! time, through [`Board::reachable_in_one_step`]. Walls and stones of any
//! player stop the fill; the player's own stone cells are the seeds.

use crate::board::{Board, PlayerId, Point};

/// Cells reachable by one player, plus their count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    size: usize,
    cells: Vec<bool>,
    len: usize,
}

impl Region {
    /// An empty region on a `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
            len: 0,
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[self.idx(x, y)]
    }

    /// Number of cells in the region. This is the player's score.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cells in the region, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, inside)| **inside)
            .map(move |(i, _)| (i % size, i / size))
    }

    /// Mark a cell; returns false if it was already marked.
    fn insert(&mut self, (x, y): Point) -> bool {
        let i = self.idx(x, y);
        if self.cells[i] {
            return false;
        }
        self.cells[i] = true;
        self.len += 1;
        true
    }
}

impl Board {
    /// Flood fill from every stone of `player`.
    ///
    /// Unknown players get an empty region.
    pub fn reachable_region(&self, player: PlayerId) -> Region {
        let mut region = Region::new(self.size());
        let mut stack: Vec<Point> = Vec::new();

        for stone in self.stones(player) {
            if region.insert(stone.position) {
                stack.push(stone.position);
            }
        }

        while let Some(pt) = stack.pop() {
            for next in self.reachable_in_one_step(pt) {
                if region.insert(next) {
                    stack.push(next);
                }
            }
        }
        region
    }
}
