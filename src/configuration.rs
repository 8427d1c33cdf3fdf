//! Engine constants and default game parameters

// The classic 2048 board
/// Default edge length of the square grid
pub const DEFAULT_GRID_SIZE: usize = 4;
/// Default number of tiles placed when a game starts
pub const DEFAULT_STARTING_TILES: usize = 2;

// Spawn weighting
/// Probability that a freshly spawned tile carries the base value
pub const TWO_TILE_PROBABILITY: f64 = 0.9;
/// Face value of the common spawned tile
pub const BASE_TILE_VALUE: u32 = 2;
/// Face value of the rare spawned tile
pub const RARE_TILE_VALUE: u32 = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid edge length
pub const MAX_GRID_SIZE: usize = 1_024;
