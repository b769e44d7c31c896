//! Breadth-first walks over the live adjacency graph
//!
//! A visitor sees each reachable tile once, in order of increasing depth,
//! and decides whether the walk expands through it.

use crate::spatial::{Plane, Position, Tile, TileKey};
use std::collections::{HashSet, VecDeque};

/// Visitor verdict for a dequeued tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Enqueue the tile's unvisited neighbors
    Continue,
    /// Skip the tile's neighbors but keep draining the frontier
    Prune,
    /// End the whole traversal
    Stop,
}

/// Walk the component of `start` breadth-first
///
/// The visitor receives each tile with its depth, `0` for `start`. Neighbors
/// are marked visited when enqueued, so no tile is seen twice and the walk
/// ends once the frontier drains. A stale `start` handle visits nothing.
pub fn breadth_first<F>(plane: &Plane, start: TileKey, mut visitor: F)
where
    F: FnMut(TileKey, &Tile, usize) -> Visit,
{
    if plane.get(start).is_none() {
        return;
    }

    let mut visited = HashSet::from([start]);
    let mut frontier = VecDeque::from([(start, 0_usize)]);

    while let Some((key, depth)) = frontier.pop_front() {
        let Some(tile) = plane.get(key) else {
            continue;
        };

        match visitor(key, tile, depth) {
            Visit::Continue => {}
            Visit::Prune => continue,
            Visit::Stop => return,
        }

        for (_, neighbor) in tile.neighbors() {
            if visited.insert(neighbor) {
                frontier.push_back((neighbor, depth + 1));
            }
        }
    }
}

/// Handles of every tile connected to `position`, in breadth-first order
///
/// Empty when `position` is unoccupied. Colors are ignored.
pub fn component(plane: &Plane, position: Position) -> Vec<TileKey> {
    let Some(start) = plane.key_at(position) else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    breadth_first(plane, start, |key, _, _| {
        keys.push(key);
        Visit::Continue
    });
    keys
}

/// Sum of intensities over the block containing `position`
///
/// With `homogeneous_only`, tiles whose color differs from the starting tile
/// are neither counted nor expanded through. Returns `0` for an empty position.
/// The sum wraps on `i64` overflow.
pub fn block_intensity(plane: &Plane, position: Position, homogeneous_only: bool) -> i64 {
    let Some(start) = plane.key_at(position) else {
        return 0;
    };
    let Some(color) = plane.get(start).map(|tile| tile.color().to_string()) else {
        return 0;
    };

    let mut total = 0_i64;
    breadth_first(plane, start, |_, tile, _| {
        if homogeneous_only && tile.color() != color {
            return Visit::Prune;
        }
        total = total.wrapping_add(tile.intensity());
        Visit::Continue
    });
    total
}
