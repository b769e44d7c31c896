use crate::{
    algorithm::rules::RuleSet,
    algorithm::traversal::component,
    io::configuration::CREATED_TILE_INTENSITY,
    spatial::{Plane, Position, TileKey},
};

/// What a single-position propagation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Propagation {
    /// No rule applied, the plane is unchanged
    NoApplicableRule,
    /// The position was empty and now holds a new tile
    Created {
        /// Handle of the new tile
        key: TileKey,
        /// Color of the new tile
        color: String,
    },
    /// The existing tile took a new color
    Recolored {
        /// Handle of the updated tile
        key: TileKey,
        /// Color before the update
        previous: String,
        /// Color after the update
        color: String,
    },
}

impl Propagation {
    /// True unless no rule applied
    pub const fn applied(&self) -> bool {
        !matches!(self, Self::NoApplicableRule)
    }
}

/// Summary of a component-wide propagation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentPropagation {
    /// Tiles in the connected component
    pub tiles_visited: usize,
    /// Tiles for which a rule applied
    pub tiles_updated: usize,
}

/// Apply the rule set to one position
///
/// The histogram comes from the tile at `position` or, when empty, from the
/// tiles around it. A matching rule creates a tile with the result color and
/// unit intensity, or recolors the existing tile in place.
pub fn propagate_one(plane: &mut Plane, rules: &mut RuleSet, position: Position) -> Propagation {
    let histogram = plane.neighbor_histogram(position);
    let Some(color) = rules.apply(&histogram) else {
        return Propagation::NoApplicableRule;
    };

    match plane.key_at(position) {
        Some(key) => {
            let previous = plane
                .get(key)
                .map(|tile| tile.color().to_string())
                .unwrap_or_default();
            plane.recolor(key, color.clone());
            Propagation::Recolored {
                key,
                previous,
                color,
            }
        }
        None => {
            let key = plane.add(position, color.clone(), CREATED_TILE_INTENSITY);
            Propagation::Created { key, color }
        }
    }
}

/// Apply the rule set to every tile connected to `position`
///
/// All new colors are decided from the colors present before the call and
/// only then written back, so no tile sees another tile's update from the
/// same batch. Hit counters advance as each tile is evaluated. An empty
/// `position` changes nothing.
pub fn propagate_component(
    plane: &mut Plane,
    rules: &mut RuleSet,
    position: Position,
) -> ComponentPropagation {
    let block = component(plane, position);

    let updates: Vec<(TileKey, String)> = block
        .iter()
        .filter_map(|&key| {
            let histogram = plane.histogram_of(key);
            rules.apply(&histogram).map(|color| (key, color))
        })
        .collect();

    let summary = ComponentPropagation {
        tiles_visited: block.len(),
        tiles_updated: updates.len(),
    };

    for (key, color) in updates {
        plane.recolor(key, color);
    }

    summary
}
