//! Sliding-tile grid engine for 2048-style puzzles
//!
//! Given a square grid of numbered tiles and a cardinal direction, the engine
//! computes the grid after every tile slides and merges, reports whether any
//! tile moved, and returns the score earned by the merges. Every operation is
//! a pure computation: the caller owns the grid value and passes it into each
//! call, together with a seedable randomness source wherever tile spawning is
//! involved.

#![forbid(unsafe_code)]

/// Engine constants and default game parameters
pub mod configuration;
/// Move computation, tile spawning, and terminal-state detection
pub mod engine;
/// Error types for engine operations
pub mod error;
/// Spatial value types: positions, directions, tiles, and the grid
pub mod spatial;

pub use error::{EngineError, Result};
pub use spatial::{Direction, Grid, Position, Tile, TileId};
