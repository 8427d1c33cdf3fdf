//! Grid coordinates and movement directions

use std::fmt;

/// A cell coordinate on the square grid
///
/// `x` runs left to right across columns, `y` top to bottom across rows,
/// both in `0..size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from column and row indices
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction` on a grid of edge length `size`
    ///
    /// Returns `None` when the step would leave the board.
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.vector();
        let x = self.x.checked_add_signed(isize::from(dx))?;
        let y = self.y.checked_add_signed(isize::from(dy))?;
        (x < size && y < size).then_some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four directions tiles slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing `y`
    Up,
    /// Towards increasing `y`
    Down,
    /// Towards decreasing `x`
    Left,
    /// Towards increasing `x`
    Right,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit movement vector as `(dx, dy)`
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}
