//! Sparse 8-connected tile plane with rule-driven color propagation
//!
//! Tiles carry a color and an intensity and are linked to the tiles on the
//! eight surrounding positions. An ordered rule set inspects the colors
//! around a position to recolor it, either one position at a time or across a
//! whole connected block. Breadth-first traversal over the live links powers
//! block intensity sums and shortest path queries.

#![forbid(unsafe_code)]

/// Rules, propagation, traversal and the owning session
pub mod algorithm;
/// Command parsing, rendering, logging and the CLI driver
pub mod io;
/// Directions, positions, histograms and the tile plane
pub mod spatial;

pub use algorithm::Session;
pub use io::error::{PlaneError, Result};
