//! The engine algorithms
//!
//! This module contains the operations callers drive a game with:
//! - Sliding and merging every tile in a cardinal direction
//! - Spawning tiles into random empty cells
//! - Detecting when no move remains

/// Terminal-state detection
pub mod availability;
/// The slide and merge algorithm
pub mod movement;
/// Random tile insertion and board population
pub mod spawn;

pub use availability::has_available_moves;
pub use movement::{MoveOutcome, move_tiles, next_tile_positions};
pub use spawn::{insert_tile_in_random_empty_cell, with_starting_tiles};
