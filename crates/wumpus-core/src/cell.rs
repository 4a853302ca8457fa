use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The square every game starts on, and the square the agent must return to with the gold.
pub const START: Cell = Cell::new(1, 1);

/// A map square. `y` grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Orthogonal neighbours in the fixed order west, east, north, south.
    ///
    /// Every neighbour scan in the agent uses this order, so tie-breaks are reproducible.
    pub fn neighbors(self) -> [(Direction, Cell); 4] {
        Direction::SCAN_ORDER.map(|d| (d, self.step(d)))
    }

    /// Diagonal offsets in the order NW, NE, SW, SE.
    pub const fn diagonal_offsets() -> [(i32, i32); 4] {
        [(-1, -1), (1, -1), (-1, 1), (1, 1)]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map extent. Cells with `0 <= x < width` and `0 <= y < height` exist; the outermost ring is
/// wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    pub const fn contains(self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub const fn is_perimeter(self, cell: Cell) -> bool {
        self.contains(cell)
            && (cell.x == 0 || cell.y == 0 || cell.x == self.width - 1 || cell.y == self.height - 1)
    }

    pub fn len(self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Row-major index, `None` outside the map.
    pub fn index(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    /// All cells, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    pub fn perimeter(self) -> impl Iterator<Item = Cell> {
        self.cells().filter(move |c| self.is_perimeter(*c))
    }
}
