//! Spatial data structures for the tile plane
//!
//! This module contains spatial-related functionality including:
//! - Compass directions and lattice positions
//! - Neighbor color histograms
//! - The sparse plane with live tile adjacency

/// Compass directions, direction codes and lattice positions
pub mod direction;
/// Color counts over a tile's neighborhood
pub mod histogram;
/// Tile storage and incremental adjacency maintenance
pub mod plane;

pub use direction::{Direction, Position};
pub use histogram::Histogram;
pub use plane::{Plane, Tile, TileKey};
