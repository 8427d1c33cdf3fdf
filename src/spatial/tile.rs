//! Tile identity and value model
//!
//! Tiles keep a stable identity while they slide so callers can animate and
//! track individual pieces. A merge consumes both participants and records
//! their ids as the provenance of the tile it creates.

use std::fmt;

use rand::Rng;

use crate::configuration::{BASE_TILE_VALUE, RARE_TILE_VALUE, TWO_TILE_PROBABILITY};

/// Opaque unique identifier for a tile
///
/// Spawned tiles draw a random id from the caller's RNG. Merged tiles derive
/// theirs deterministically from the two parent ids, so move computation
/// needs no randomness of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl TileId {
    /// Draw a fresh id from the provided RNG
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random::<u64>())
    }

    /// Derive the id of a merge result from its parents
    ///
    /// Runs the combined parent ids through the `SplitMix64` finalizer,
    /// keeping a collision as unlikely as two random ids colliding.
    pub const fn merged(a: Self, b: Self) -> Self {
        Self(mix64(a.0 ^ b.0.rotate_left(32)))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

// SplitMix64 finalizer
const fn mix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// A single numbered game piece occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Stable identity, preserved across slides and consumed by merges
    pub id: TileId,
    /// Face value, always a power of two of at least 2
    pub value: u32,
    /// Parent ids `(target, mover)` when this tile was produced by a merge
    /// in the immediately preceding move, `None` otherwise
    pub parents: Option<(TileId, TileId)>,
}

impl Tile {
    /// Spawn a fresh non-merged tile
    ///
    /// The value is 2 with probability 0.9 and 4 otherwise, drawn from the
    /// provided RNG along with the id.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = if rng.random::<f64>() < TWO_TILE_PROBABILITY {
            BASE_TILE_VALUE
        } else {
            RARE_TILE_VALUE
        };

        Self {
            id: TileId::random(rng),
            value,
            parents: None,
        }
    }

    /// Combine two equal-valued tiles into their merge result
    ///
    /// `target` is the tile already at the destination, `mover` the tile
    /// sliding into it. Callers must guarantee `target.value == mover.value`;
    /// the engine does not re-validate the precondition.
    pub const fn merged(target: Self, mover: Self) -> Self {
        Self {
            id: TileId::merged(target.id, mover.id),
            value: target.value * 2,
            parents: Some((target.id, mover.id)),
        }
    }

    /// Copy of this tile with merge provenance cleared
    ///
    /// Provenance is only valid for the move that produced it, so each move
    /// computation starts from cleared copies.
    #[must_use]
    pub const fn without_parents(self) -> Self {
        Self {
            id: self.id,
            value: self.value,
            parents: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_merged_doubles_the_target_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Tile {
            value: 8,
            ..Tile::spawn(&mut rng)
        };
        let b = Tile {
            value: 8,
            ..Tile::spawn(&mut rng)
        };

        let merged = Tile::merged(a, b);
        assert_eq!(merged.value, 16);
        assert_eq!(merged.parents, Some((a.id, b.id)));
    }

    #[test]
    fn test_merged_id_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Tile::spawn(&mut rng);
        let b = Tile::spawn(&mut rng);

        assert_eq!(Tile::merged(a, b).id, Tile::merged(a, b).id);
        assert_ne!(Tile::merged(a, b).id, a.id);
        assert_ne!(Tile::merged(a, b).id, b.id);
    }

    #[test]
    fn test_spawn_values_follow_the_weighting() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut twos = 0usize;
        let mut fours = 0usize;

        for _ in 0..1_000 {
            match Tile::spawn(&mut rng).value {
                2 => twos += 1,
                4 => fours += 1,
                other => unreachable!("Unexpected spawn value {other}"),
            }
        }

        // 0.9 weighting with generous slack for a 1000-draw sample
        assert!(twos > 850, "Expected ~900 twos, got {twos}");
        assert!(fours > 50, "Expected ~100 fours, got {fours}");
    }
}
