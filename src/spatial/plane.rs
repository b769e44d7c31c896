//! Sparse tile plane with live 8-way adjacency
//!
//! Tiles are owned by an arena and addressed by position through an index.
//! Each tile keeps one non-owning handle per direction to the tile occupying
//! the adjacent position. Insertion and removal keep every link mirrored:
//! when the tile at `p` holds `q` in slot `d`, the tile at `q` holds `p` in
//! slot `d.opposite()`, and `q` is always `p.step(d)`. Positions on the edge
//! of the `i32` lattice simply have no neighbor past the edge.

use crate::io::error::{PlaneError, Result};
use crate::spatial::direction::{Direction, Position};
use crate::spatial::histogram::Histogram;
use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

new_key_type! {
    /// Non-owning handle to a tile stored in a [`Plane`]
    ///
    /// Handles go stale when their tile is removed or overwritten, so a
    /// lookup through a stale handle yields `None` rather than another tile.
    pub struct TileKey;
}

/// A colored, intensity-valued cell of the plane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    color: String,
    intensity: i64,
    position: Position,
    adjacent: [Option<TileKey>; Direction::COUNT],
}

impl Tile {
    fn new(position: Position, color: String, intensity: i64) -> Self {
        Self {
            color,
            intensity,
            position,
            adjacent: [None; Direction::COUNT],
        }
    }

    /// Color label
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Intensity value
    pub const fn intensity(&self) -> i64 {
        self.intensity
    }

    /// Position the tile occupies
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Handle of the neighbor in `direction`, if that position is occupied
    pub fn neighbor(&self, direction: Direction) -> Option<TileKey> {
        self.adjacent.get(direction.index()).copied().flatten()
    }

    /// Iterate over occupied adjacency slots in cyclic direction order
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, TileKey)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|key| (direction, key)))
    }

    /// Number of occupied adjacency slots
    pub fn degree(&self) -> usize {
        self.adjacent.iter().flatten().count()
    }

    fn set_slot(&mut self, direction: Direction, key: Option<TileKey>) {
        if let Some(slot) = self.adjacent.get_mut(direction.index()) {
            *slot = key;
        }
    }
}

/// Axis-aligned bounding box of occupied positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: Position,
    /// Maximum coordinates (inclusive)
    pub max: Position,
}

impl BoundingBox {
    /// Check if a position is within the bounds
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
    }

    /// Number of columns covered
    pub const fn width(&self) -> u64 {
        span(self.min.x, self.max.x)
    }

    /// Number of rows covered
    pub const fn height(&self) -> u64 {
        span(self.min.y, self.max.y)
    }

    fn include(&mut self, position: Position) {
        self.min.x = self.min.x.min(position.x);
        self.min.y = self.min.y.min(position.y);
        self.max.x = self.max.x.max(position.x);
        self.max.y = self.max.y.max(position.y);
    }
}

const fn span(min: i32, max: i32) -> u64 {
    (max as i64 - min as i64) as u64 + 1
}

/// The sparse set of tiles addressed by position
#[derive(Debug, Clone, Default)]
pub struct Plane {
    tiles: SlotMap<TileKey, Tile>,
    index: HashMap<Position, TileKey>,
}

impl Plane {
    /// Create an empty plane
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles on the plane
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when no tile is present
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Place a tile at `position`, linking it with every occupied neighbor
    ///
    /// An existing tile at `position` is removed first, so handles to it go
    /// stale and its neighbors end up linked to the new tile instead.
    pub fn add(&mut self, position: Position, color: impl Into<String>, intensity: i64) -> TileKey {
        self.remove(position);

        let key = self
            .tiles
            .insert(Tile::new(position, color.into(), intensity));
        self.index.insert(position, key);

        for (direction, neighbor_position) in position.neighbors() {
            let Some(&neighbor) = self.index.get(&neighbor_position) else {
                continue;
            };
            if let Some(tile) = self.tiles.get_mut(key) {
                tile.set_slot(direction, Some(neighbor));
            }
            if let Some(tile) = self.tiles.get_mut(neighbor) {
                tile.set_slot(direction.opposite(), Some(key));
            }
        }

        key
    }

    /// Remove the tile at `position`, clearing every link to it
    ///
    /// Returns the detached tile, or `None` when the position was empty.
    pub fn remove(&mut self, position: Position) -> Option<Tile> {
        let key = self.index.remove(&position)?;
        let mut tile = self.tiles.remove(key)?;

        for direction in Direction::ALL {
            let Some(neighbor) = tile.neighbor(direction) else {
                continue;
            };
            if let Some(neighbor_tile) = self.tiles.get_mut(neighbor) {
                neighbor_tile.set_slot(direction.opposite(), None);
            }
            tile.set_slot(direction, None);
        }

        Some(tile)
    }

    /// Handle of the tile at `position`
    pub fn key_at(&self, position: Position) -> Option<TileKey> {
        self.index.get(&position).copied()
    }

    /// Tile at `position`
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.key_at(position).and_then(|key| self.tiles.get(key))
    }

    /// Tile behind a handle, `None` for stale handles
    pub fn get(&self, key: TileKey) -> Option<&Tile> {
        self.tiles.get(key)
    }

    /// True when a tile occupies `position`
    pub fn contains(&self, position: Position) -> bool {
        self.index.contains_key(&position)
    }

    /// Handle of the neighbor of `key` in `direction`
    pub fn neighbor(&self, key: TileKey, direction: Direction) -> Option<TileKey> {
        self.get(key).and_then(|tile| tile.neighbor(direction))
    }

    /// Iterate over all tiles in arena order
    pub fn tiles(&self) -> impl Iterator<Item = (TileKey, &Tile)> {
        self.tiles.iter()
    }

    /// All tiles ordered by position, `x` first
    pub fn sorted_tiles(&self) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.values().collect();
        tiles.sort_by_key(|tile| (tile.position.x, tile.position.y));
        tiles
    }

    /// Smallest box covering every tile, `None` for an empty plane
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut positions = self.index.keys().copied();
        let first = positions.next()?;
        let mut bounds = BoundingBox {
            min: first,
            max: first,
        };
        for position in positions {
            bounds.include(position);
        }
        Some(bounds)
    }

    /// Color histogram around `position`
    ///
    /// For an occupied position this reads the tile's adjacency slots. For an
    /// empty position it counts the tiles that would become its neighbors.
    pub fn neighbor_histogram(&self, position: Position) -> Histogram {
        match self.key_at(position) {
            Some(key) => self.histogram_of(key),
            None => position
                .neighbors()
                .filter_map(|(_, neighbor)| self.tile(neighbor))
                .map(Tile::color)
                .collect(),
        }
    }

    /// Color histogram over the occupied slots of the tile behind `key`
    pub fn histogram_of(&self, key: TileKey) -> Histogram {
        self.get(key).map_or_else(Histogram::new, |tile| {
            tile.neighbors()
                .filter_map(|(_, neighbor)| self.get(neighbor))
                .map(Tile::color)
                .collect()
        })
    }

    /// Replace the color of the tile behind `key`, keeping intensity and links
    ///
    /// Returns false for a stale handle.
    pub fn recolor(&mut self, key: TileKey, color: impl Into<String>) -> bool {
        match self.tiles.get_mut(key) {
            Some(tile) => {
                tile.color = color.into();
                true
            }
            None => false,
        }
    }

    /// Verify the index and every adjacency slot against the positions
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::InconsistentAdjacency`] describing the first
    /// slot that is missing, dangling, misplaced or not mirrored
    pub fn check_consistency(&self) -> Result<()> {
        for (key, tile) in &self.tiles {
            if self.index.get(&tile.position) != Some(&key) {
                return Err(inconsistency(
                    tile.position,
                    Direction::North,
                    "tile is not indexed at its own position",
                ));
            }

            for direction in Direction::ALL {
                let expected = tile
                    .position
                    .step(direction)
                    .and_then(|position| self.key_at(position));
                let actual = tile.neighbor(direction);
                if expected != actual {
                    return Err(inconsistency(
                        tile.position,
                        direction,
                        format!("slot holds {actual:?} but the adjacent position holds {expected:?}"),
                    ));
                }

                let Some(neighbor) = actual else {
                    continue;
                };
                let reverse = self
                    .get(neighbor)
                    .and_then(|neighbor_tile| neighbor_tile.neighbor(direction.opposite()));
                if reverse != Some(key) {
                    return Err(inconsistency(
                        tile.position,
                        direction,
                        format!("neighbor links back to {reverse:?}"),
                    ));
                }
            }
        }

        if self.tiles.len() != self.index.len() {
            let position = self.index.keys().next().copied().unwrap_or_default();
            return Err(inconsistency(
                position,
                Direction::North,
                format!(
                    "index holds {} positions for {} tiles",
                    self.index.len(),
                    self.tiles.len()
                ),
            ));
        }

        Ok(())
    }
}

fn inconsistency(position: Position, direction: Direction, reason: impl Into<String>) -> PlaneError {
    PlaneError::InconsistentAdjacency {
        position,
        direction,
        reason: reason.into(),
    }
}
