//! Spatial value types for the engine
//!
//! This module contains the data model the algorithms operate on:
//! - Grid coordinates and slide directions
//! - Tile identity, value, and merge provenance
//! - The square grid of optional cells

/// Square grid state built on explicit optional cells
pub mod grid;
/// Grid coordinates and movement directions
pub mod position;
/// Tile identity and value model
pub mod tile;

pub use grid::Grid;
pub use position::{Direction, Position};
pub use tile::{Tile, TileId};
