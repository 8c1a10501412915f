//! Board data model: stones, walls, and the grids that hold them.
//!
//! Stones live in per-player arenas and cells refer to them by [`StoneId`],
//! so a stone's position and the cell that holds it are updated together.
//! Coordinates are `(x, y)` with `x` the column and `y` the row, row 0 on top.

use std::fmt;

use derive_more::Display;

use crate::constants::{EMPTY, WALL_HORIZONTAL, WALL_VERTICAL};

/// Index of a player, `0..players`.
pub type PlayerId = usize;

/// A cell on the board as `(x, y)`.
pub type Point = (usize, usize);

/// Stable handle for a stone: its owner and its placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{player}.{index}")]
pub struct StoneId {
    pub player: PlayerId,
    pub index: usize,
}

impl StoneId {
    pub fn new(player: PlayerId, index: usize) -> Self {
        Self { player, index }
    }
}

/// A placed stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    pub player: PlayerId,
    pub index: usize,
    pub position: Point,
}

impl Stone {
    pub fn id(&self) -> StoneId {
        StoneId::new(self.player, self.index)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Orientation {
    /// Runs along the top or bottom edge of a cell.
    #[display("h")]
    Horizontal,
    /// Runs along the left or right edge of a cell.
    #[display("v")]
    Vertical,
}

/// A permanent wall segment.
///
/// `Horizontal (x, y)` is the segment above row `y` in column `x`, so it
/// separates `(x, y - 1)` from `(x, y)`. `Vertical (x, y)` is the segment left
/// of column `x` in row `y`, separating `(x - 1, y)` from `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{orientation} {x} {y}")]
pub struct Wall {
    pub player: PlayerId,
    pub orientation: Orientation,
    pub x: usize,
    pub y: usize,
}

impl Wall {
    pub fn new(player: PlayerId, orientation: Orientation, x: usize, y: usize) -> Self {
        Self {
            player,
            orientation,
            x,
            y,
        }
    }
}

/// A rectangular grid of optional entries, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Entry at `(x, y)`; `None` when empty or out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: Option<T>) {
        let i = self.idx(x, y);
        self.cells[i] = value;
    }
}

/// The wall slot on the edge shared by two orthogonally adjacent cells.
pub fn edge_between(a: Point, b: Point) -> Option<(Orientation, usize, usize)> {
    let (ax, ay) = a;
    let (bx, by) = b;
    if ay == by && ax.abs_diff(bx) == 1 {
        Some((Orientation::Vertical, ax.max(bx), ay))
    } else if ax == bx && ay.abs_diff(by) == 1 {
        Some((Orientation::Horizontal, ax, ay.max(by)))
    } else {
        None
    }
}

/// Stones and walls on an NxN board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Grid<StoneId>,
    horizontal_walls: Grid<Wall>,
    vertical_walls: Grid<Wall>,
    stones: Vec<Vec<Stone>>,
}

impl Board {
    pub fn new(size: usize, players: usize) -> Self {
        Self {
            size,
            cells: Grid::new(size, size),
            horizontal_walls: Grid::new(size, size + 1),
            vertical_walls: Grid::new(size + 1, size),
            stones: vec![Vec::new(); players],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn players(&self) -> usize {
        self.stones.len()
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// The NxN cell grid.
    pub fn cells(&self) -> &Grid<StoneId> {
        &self.cells
    }

    /// The (N+1)xN grid of horizontal wall slots (N wide, N+1 tall).
    pub fn horizontal_walls(&self) -> &Grid<Wall> {
        &self.horizontal_walls
    }

    /// The Nx(N+1) grid of vertical wall slots (N+1 wide, N tall).
    pub fn vertical_walls(&self) -> &Grid<Wall> {
        &self.vertical_walls
    }

    fn wall_grid(&self, orientation: Orientation) -> &Grid<Wall> {
        match orientation {
            Orientation::Horizontal => &self.horizontal_walls,
            Orientation::Vertical => &self.vertical_walls,
        }
    }

    pub fn wall_at(&self, orientation: Orientation, x: usize, y: usize) -> Option<Wall> {
        self.wall_grid(orientation).get(x, y)
    }

    /// True if the slot exists and holds no wall.
    pub fn is_wall_slot_free(&self, orientation: Orientation, x: usize, y: usize) -> bool {
        let grid = self.wall_grid(orientation);
        x < grid.width() && y < grid.height() && grid.get(x, y).is_none()
    }

    pub fn stones(&self, player: PlayerId) -> &[Stone] {
        self.stones.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stone lists for every player, indexed by player id.
    pub fn all_stones(&self) -> &[Vec<Stone>] {
        &self.stones
    }

    pub fn stone(&self, id: StoneId) -> Option<&Stone> {
        self.stones.get(id.player)?.get(id.index)
    }

    pub fn stone_at(&self, x: usize, y: usize) -> Option<&Stone> {
        self.cells.get(x, y).and_then(|id| self.stone(id))
    }

    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells.get(x, y).is_none()
    }

    /// Put a new stone for `player` on an empty cell. Unchecked.
    pub(crate) fn add_stone(&mut self, player: PlayerId, position: Point) -> StoneId {
        let list = &mut self.stones[player];
        let id = StoneId::new(player, list.len());
        list.push(Stone {
            player,
            index: id.index,
            position,
        });
        self.cells.set(position.0, position.1, Some(id));
        id
    }

    /// Move an existing stone to an empty cell. Unchecked.
    pub(crate) fn relocate_stone(&mut self, id: StoneId, to: Point) {
        let stone = &mut self.stones[id.player][id.index];
        let (fx, fy) = stone.position;
        stone.position = to;
        self.cells.set(fx, fy, None);
        self.cells.set(to.0, to.1, Some(id));
    }

    /// Write a wall into its slot. Unchecked.
    pub(crate) fn set_wall(&mut self, wall: Wall) {
        let grid = match wall.orientation {
            Orientation::Horizontal => &mut self.horizontal_walls,
            Orientation::Vertical => &mut self.vertical_walls,
        };
        grid.set(wall.x, wall.y, Some(wall));
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..=self.size {
            for x in 0..self.size {
                let seg = if self.horizontal_walls.get(x, y).is_some() {
                    WALL_HORIZONTAL
                } else {
                    "   "
                };
                write!(f, "+{seg}")?;
            }
            writeln!(f, "+")?;
            if y == self.size {
                break;
            }
            for x in 0..=self.size {
                let ch = if self.vertical_walls.get(x, y).is_some() {
                    WALL_VERTICAL
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
                if x < self.size {
                    match self.cells.get(x, y) {
                        Some(id) => write!(f, " {} ", id.player)?,
                        None => write!(f, " {EMPTY} ")?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
