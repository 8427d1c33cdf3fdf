//! Square grid state built on explicit optional cells
//!
//! Cells are `Option<Tile>` rather than sentinel values so an empty cell can
//! never be confused with a tile. The grid follows value semantics
//! throughout: every transforming operation takes `&self` and returns a
//! fresh `Grid`, leaving the input untouched.

use std::fmt;

use ndarray::Array2;

use crate::configuration::MAX_GRID_SIZE;
use crate::error::{EngineError, Result};
use crate::spatial::{Position, Tile, TileId};

/// A square board of optional tiles, indexed by [`Position`]
///
/// Storage is row-major: the underlying array is indexed `(y, x)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<Tile>>,
}

impl Grid {
    /// Create a grid with every cell empty
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when `size` is zero or exceeds
    /// the maximum supported dimension.
    pub fn empty(size: usize) -> Result<Self> {
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return Err(EngineError::InvalidSize { size });
        }

        Ok(Self {
            cells: Array2::from_elem((size, size), None),
        })
    }

    /// Build a grid from row-major cell rows
    ///
    /// Intended for callers reconstructing a board from external storage
    /// and for tests assembling fixed positions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when the rows are empty, exceed
    /// the maximum dimension, or do not form a square.
    pub fn from_rows(rows: Vec<Vec<Option<Tile>>>) -> Result<Self> {
        let size = rows.len();
        if !(1..=MAX_GRID_SIZE).contains(&size) || rows.iter().any(|row| row.len() != size) {
            return Err(EngineError::InvalidSize { size });
        }

        let mut cells = Array2::from_elem((size, size), None);
        for (y, row) in rows.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                if let Some(slot) = cells.get_mut((y, x)) {
                    *slot = cell;
                }
            }
        }

        Ok(Self { cells })
    }

    /// Edge length of the square grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile at the given position, if any
    ///
    /// Out-of-range positions read as empty.
    pub fn cell(&self, position: Position) -> Option<&Tile> {
        self.cells
            .get((position.y, position.x))
            .and_then(Option::as_ref)
    }

    /// Tile at the given position
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TileNotFound`] when the cell is empty or the
    /// position lies outside the grid.
    pub fn tile(&self, position: Position) -> Result<&Tile> {
        self.cell(position)
            .ok_or_else(|| EngineError::tile_not_found_at(position))
    }

    /// Position currently occupied by the tile with the given id
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TileNotFound`] when no tile on the board
    /// carries the id.
    pub fn position_of(&self, id: TileId) -> Result<Position> {
        self.positions()
            .find(|&position| self.cell(position).is_some_and(|tile| tile.id == id))
            .ok_or_else(|| EngineError::tile_not_found_with(id))
    }

    /// Whether the cell at the position is on the board and holds no tile
    pub fn is_empty_cell(&self, position: Position) -> bool {
        position.x < self.size() && position.y < self.size() && self.cell(position).is_none()
    }

    /// Every position in row-major order (`y` outer, `x` inner)
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size();
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Every empty position in row-major order (`y` outer, `x` inner)
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.cell(position).is_none())
            .collect()
    }

    /// Iterate over every tile with its position in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.positions()
            .filter_map(|position| self.cell(position).map(|tile| (position, tile)))
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Copy of this grid with `tile` placed at `position`
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the grid.
    #[must_use]
    pub fn with_tile(&self, position: Position, tile: Tile) -> Self {
        assert!(
            position.x < self.size() && position.y < self.size(),
            "Position {position} outside {0}x{0} grid",
            self.size()
        );

        let mut next = self.clone();
        next.set(position, Some(tile));
        next
    }

    /// Copy of this grid with every tile's merge provenance cleared
    pub(crate) fn with_cleared_parents(&self) -> Self {
        Self {
            cells: self.cells.mapv(|cell| cell.map(Tile::without_parents)),
        }
    }

    /// Overwrite a cell in place; out-of-range positions are unreachable
    /// for the crate-internal callers that hold validated positions
    pub(crate) fn set(&mut self, position: Position, cell: Option<Tile>) {
        if let Some(slot) = self.cells.get_mut((position.y, position.x)) {
            *slot = cell;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size() {
            for x in 0..self.size() {
                match self.cell(Position::new(x, y)) {
                    Some(tile) => write!(f, "{:>6}", tile.value)?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
