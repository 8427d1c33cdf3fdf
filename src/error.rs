//! Error types for engine operations
//!
//! Every precondition violation surfaces immediately as an [`EngineError`];
//! the engine never retries internally and never produces a silently-wrong
//! grid.

use std::fmt;

use crate::spatial::{Position, TileId};

/// Main error type for all engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Requested grid size is outside the supported range
    ///
    /// Fatal to the creating call; the caller may retry with a valid size.
    InvalidSize {
        /// The rejected edge length
        size: usize,
    },

    /// Tile insertion was attempted with zero empty cells
    ///
    /// Indicates the caller invoked insertion without checking capacity.
    /// Treat as a logic error rather than retrying blindly.
    BoardFull {
        /// Edge length of the full grid
        size: usize,
    },

    /// A tile lookup by position or id found none
    ///
    /// Signals either an internal invariant violation or a caller-supplied
    /// stale position. Fatal to the current call, not retried.
    TileNotFound {
        /// The lookup that failed
        query: TileQuery,
    },
}

/// Identifies which kind of tile lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileQuery {
    /// Lookup of the tile occupying a grid position
    AtPosition(Position),
    /// Lookup of the position occupied by a tile id
    WithId(TileId),
}

impl EngineError {
    /// Create a not-found error for a position lookup
    pub const fn tile_not_found_at(position: Position) -> Self {
        Self::TileNotFound {
            query: TileQuery::AtPosition(position),
        }
    }

    /// Create a not-found error for an id lookup
    pub const fn tile_not_found_with(id: TileId) -> Self {
        Self::TileNotFound {
            query: TileQuery::WithId(id),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "Grid size {size} is outside the supported range")
            }
            Self::BoardFull { size } => {
                write!(f, "No empty cell remains on the {size}x{size} grid")
            }
            Self::TileNotFound { query } => match query {
                TileQuery::AtPosition(position) => {
                    write!(f, "No tile found at position {position}")
                }
                TileQuery::WithId(id) => {
                    write!(f, "No tile found with id {id}")
                }
            },
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failed_lookup() {
        let err = EngineError::tile_not_found_at(Position::new(2, 1));
        assert_eq!(err.to_string(), "No tile found at position (2, 1)");

        let err = EngineError::BoardFull { size: 4 };
        assert_eq!(err.to_string(), "No empty cell remains on the 4x4 grid");
    }

    #[test]
    fn test_errors_compare_by_content() {
        assert_eq!(
            EngineError::InvalidSize { size: 0 },
            EngineError::InvalidSize { size: 0 }
        );
        assert_ne!(
            EngineError::InvalidSize { size: 0 },
            EngineError::BoardFull { size: 0 }
        );
    }
}
