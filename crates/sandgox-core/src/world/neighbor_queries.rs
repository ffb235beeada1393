//! Neighbor cell collection utilities

use smallvec::SmallVec;

/// Offsets of the 8 surrounding cells
///
/// Order: NW, N, NE, W, E, SW, S, SE (y grows downward)
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), // NW
    (0, -1),  // N
    (1, -1),  // NE
    (-1, 0),  // W
    (1, 0),   // E
    (-1, 1),  // SW
    (0, 1),   // S
    (1, 1),   // SE
];

/// Neighbor collection utilities - stateless methods for querying neighboring cells
pub struct NeighborQueries;

impl NeighborQueries {
    /// Collect the up-to-8 neighbors of a cell on a `size × size` grid
    ///
    /// Positions outside the grid are dropped, so corner cells get 3 entries
    /// and edge cells get 5.
    pub fn neighbors8(size: usize, x: usize, y: usize) -> SmallVec<[(usize, usize); 8]> {
        let mut neighbors = SmallVec::new();

        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(pos) = Self::offset(size, x, y, dx, dy) {
                neighbors.push(pos);
            }
        }

        neighbors
    }

    /// Apply an offset, returning `None` when it leaves the grid
    pub fn offset(size: usize, x: usize, y: usize, dx: i32, dy: i32) -> Option<(usize, usize)> {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        let limit = size as i64;

        if nx < 0 || ny < 0 || nx >= limit || ny >= limit {
            return None;
        }

        Some((nx as usize, ny as usize))
    }
}
