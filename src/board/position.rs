//! Base positions and distance.
//!
//! Bases sit on an integer lattice in 3D space. All travel costs and the
//! elapsed-round proxy used for population growth are derived from the
//! floor-truncated Euclidean distance between two positions.

use serde::{Deserialize, Serialize};

/// A point in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Position { x, y, z }
    }

    /// Returns the floor-truncated Euclidean distance to `other`.
    pub fn distance_to(self, other: Position) -> u32 {
        distance(self, other)
    }
}

/// Euclidean distance between two positions, rounded down.
///
/// Computed with an exact integer square root so that perfect squares such as
/// (3,4,0) always yield 5 and everything else floors, never rounds up.
pub fn distance(a: Position, b: Position) -> u32 {
    let dx = (i64::from(b.x) - i64::from(a.x)).unsigned_abs();
    let dy = (i64::from(b.y) - i64::from(a.y)).unsigned_abs();
    let dz = (i64::from(b.z) - i64::from(a.z)).unsigned_abs();
    // Each square fits in a u64 but the sum of three may not.
    let sq = dx
        .saturating_mul(dx)
        .saturating_add(dy.saturating_mul(dy))
        .saturating_add(dz.saturating_mul(dz));
    isqrt(sq).min(u64::from(u32::MAX)) as u32
}

/// Floor of the square root of `n`.
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // Float estimate, then correct by at most a few steps in either direction.
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}
