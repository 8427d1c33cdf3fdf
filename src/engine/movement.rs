//! The slide and merge algorithm at the heart of the engine
//!
//! A move processes positions wall-first: tiles already closest to the
//! destination wall settle before the tiles behind them, so a tile relocated
//! this move is never re-processed from its old slot. Merge provenance
//! (`Tile::parents`) doubles as the single-merge marker; it is cleared on the
//! working copy before traversal and set the moment a merge lands, which
//! limits every destination to one incoming merge per move.

use crate::spatial::{Direction, Grid, Position, Tile};

/// Result of sliding every tile in one direction
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    /// The rebuilt grid after all slides and merges
    pub grid: Grid,
    /// Whether any tile changed position or merged
    pub moved: bool,
    /// Sum of the values of tiles created by merges this move
    pub score: u64,
}

/// Furthest slot a tile at `start` can slide to, and the first position the
/// scan stopped at
///
/// Steps along the direction vector while the next cell is on the board and
/// empty. The second element is `None` when the scan ran off the board, and
/// otherwise names the occupied cell that blocked it, which is the candidate
/// merge destination.
pub fn next_tile_positions(
    grid: &Grid,
    start: Position,
    direction: Direction,
) -> (Position, Option<Position>) {
    let size = grid.size();
    let mut furthest = start;
    let mut next = start.step(direction, size);

    while let Some(position) = next {
        if !grid.is_empty_cell(position) {
            break;
        }
        furthest = position;
        next = position.step(direction, size);
    }

    (furthest, next)
}

/// Index sequences visiting tiles farthest in the travel direction first
///
/// The `x` sequence is reversed for Right and the `y` sequence for Down;
/// traversal iterates `x` in the outer loop and `y` in the inner loop.
fn traversal_order(size: usize, direction: Direction) -> (Vec<usize>, Vec<usize>) {
    let (dx, dy) = direction.vector();
    let mut xs: Vec<usize> = (0..size).collect();
    let mut ys: Vec<usize> = (0..size).collect();

    if dx == 1 {
        xs.reverse();
    }
    if dy == 1 {
        ys.reverse();
    }

    (xs, ys)
}

/// Slide every tile as far as it can travel in `direction`, merging equal
/// neighbours at most once per destination
///
/// Returns the rebuilt grid, whether anything moved, and the score delta:
/// the summed values of all tiles created by merges this move. The input
/// grid is never mutated, and the computation is fully deterministic.
pub fn move_tiles(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut working = grid.with_cleared_parents();
    let mut moved = false;
    let mut score: u64 = 0;

    let (xs, ys) = traversal_order(grid.size(), direction);
    for &x in &xs {
        for &y in &ys {
            let origin = Position::new(x, y);
            let Some(tile) = working.cell(origin).copied() else {
                continue;
            };

            let (furthest, next) = next_tile_positions(&working, origin, direction);

            // A destination that already absorbed a merge this move carries
            // parents and refuses a second one
            let merge_target = next
                .and_then(|position| working.cell(position).copied())
                .filter(|target| target.value == tile.value && target.parents.is_none());

            if let (Some(target), Some(destination)) = (merge_target, next) {
                let merged = Tile::merged(target, tile);
                working.set(destination, Some(merged));
                working.set(origin, None);
                moved = true;
                score += u64::from(merged.value);
            } else if furthest != origin {
                working.set(furthest, Some(tile));
                working.set(origin, None);
                moved = true;
            }
        }
    }

    MoveOutcome {
        grid: working,
        moved,
        score,
    }
}
