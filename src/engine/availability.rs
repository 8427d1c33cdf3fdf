//! Terminal-state detection

use crate::spatial::{Direction, Grid};

/// Whether at least one legal move remains
///
/// True when any cell is empty, or any pair of orthogonally adjacent tiles
/// shares a value. Callers evaluate this after every insertion that follows
/// a successful move; a `false` result ends the game.
pub fn has_available_moves(grid: &Grid) -> bool {
    // Adjacency is symmetric, so scanning right and down covers every pair
    grid.positions().any(|position| {
        grid.cell(position).is_none_or(|tile| {
            [Direction::Right, Direction::Down].into_iter().any(|dir| {
                position
                    .step(dir, grid.size())
                    .and_then(|neighbour| grid.cell(neighbour))
                    .is_some_and(|neighbour| neighbour.value == tile.value)
            })
        })
    })
}
