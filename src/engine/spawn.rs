//! Random tile insertion and board population
//!
//! The engine is agnostic about its randomness source: every function here
//! takes any [`Rng`], so callers seed a deterministic generator in tests and
//! a thread-local one in production.

use rand::Rng;

use crate::error::{EngineError, Result};
use crate::spatial::{Grid, Tile};

/// Insert a freshly spawned tile into a uniformly chosen empty cell
///
/// The choice ranges over [`Grid::empty_positions`], so candidate ordering
/// is row-major and reproducible for a given RNG state.
///
/// # Errors
///
/// Returns [`EngineError::BoardFull`] when no empty cell remains.
pub fn insert_tile_in_random_empty_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Grid> {
    let empty = grid.empty_positions();
    if empty.is_empty() {
        return Err(EngineError::BoardFull { size: grid.size() });
    }

    let index = rng.random_range(0..empty.len());
    let Some(&position) = empty.get(index) else {
        return Err(EngineError::BoardFull { size: grid.size() });
    };

    Ok(grid.with_tile(position, Tile::spawn(rng)))
}

/// Create a square grid populated with `starting_tiles` fresh tiles at
/// distinct random positions
///
/// # Errors
///
/// Returns [`EngineError::InvalidSize`] for an unsupported size, or
/// [`EngineError::BoardFull`] when `starting_tiles` exceeds the cell count.
pub fn with_starting_tiles<R: Rng + ?Sized>(
    size: usize,
    starting_tiles: usize,
    rng: &mut R,
) -> Result<Grid> {
    let mut grid = Grid::empty(size)?;
    for _ in 0..starting_tiles {
        grid = insert_tile_in_random_empty_cell(&grid, rng)?;
    }

    Ok(grid)
}
