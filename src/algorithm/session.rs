use crate::{
    algorithm::path::{shortest_path_length, walk_path},
    algorithm::propagation::{
        ComponentPropagation, Propagation, propagate_component, propagate_one,
    },
    algorithm::rules::{Requirement, Rule, RuleSet},
    algorithm::traversal::block_intensity,
    spatial::{Direction, Histogram, Plane, Position, Tile, TileKey},
};
use tracing::{debug, trace};

/// One plane and the rule set acting on it
///
/// The session is the single owner of all mutable state. Rule hit counters
/// live here and accumulate for the session's lifetime.
#[derive(Debug, Default)]
pub struct Session {
    plane: Plane,
    rules: RuleSet,
}

impl Session {
    /// Create a session with an empty plane and no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the plane
    pub const fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Rules in current priority order
    pub fn rules(&self) -> &[Rule] {
        self.rules.rules()
    }

    /// Light the tile at `position`, replacing any tile already there
    pub fn color(&mut self, position: Position, color: &str, intensity: i64) -> TileKey {
        debug!(%position, color, intensity, "color tile");
        self.plane.add(position, color, intensity)
    }

    /// Switch off the tile at `position`
    ///
    /// Returns the removed tile, `None` when nothing was there.
    pub fn switch_off(&mut self, position: Position) -> Option<Tile> {
        let removed = self.plane.remove(position);
        debug!(%position, removed = removed.is_some(), "switch off tile");
        removed
    }

    /// Append a rule at the lowest priority
    pub fn add_rule(&mut self, requirements: Vec<Requirement>, result: &str) -> usize {
        let index = self.rules.add(Rule::new(requirements, result));
        debug!(index, result, "add rule");
        index
    }

    /// Stable-sort the rules by ascending hit count
    pub fn reorder_rules(&mut self) {
        self.rules.reorder_by_usage();
        debug!(rules = self.rules.len(), "reorder rules by usage");
    }

    /// First rule applicable to `histogram`, without counting a hit
    pub fn first_applicable_rule(&self, histogram: &Histogram) -> Option<&Rule> {
        self.rules.first_applicable(histogram).map(|(_, rule)| rule)
    }

    /// Color histogram around `position`
    pub fn neighbor_histogram(&self, position: Position) -> Histogram {
        self.plane.neighbor_histogram(position)
    }

    /// Color and intensity of the tile at `position`
    pub fn state(&self, position: Position) -> Option<(&str, i64)> {
        self.plane
            .tile(position)
            .map(|tile| (tile.color(), tile.intensity()))
    }

    /// Apply the rules to a single position
    pub fn propagate(&mut self, position: Position) -> Propagation {
        let outcome = propagate_one(&mut self.plane, &mut self.rules, position);
        debug!(%position, ?outcome, "propagate");
        outcome
    }

    /// Apply the rules to the whole block containing `position`
    pub fn propagate_block(&mut self, position: Position) -> ComponentPropagation {
        let summary = propagate_component(&mut self.plane, &mut self.rules, position);
        debug!(
            %position,
            visited = summary.tiles_visited,
            updated = summary.tiles_updated,
            "propagate block"
        );
        summary
    }

    /// Intensity sum over the block containing `position`
    pub fn block_intensity(&self, position: Position, homogeneous_only: bool) -> i64 {
        let total = block_intensity(&self.plane, position, homogeneous_only);
        trace!(%position, homogeneous_only, total, "block intensity");
        total
    }

    /// Tiles along `directions` from `start`, or `None` if a link is missing
    pub fn walk_path(&self, start: Position, directions: &[Direction]) -> Option<Vec<&Tile>> {
        walk_path(&self.plane, start, directions)
    }

    /// Steps on a shortest link path between two tiles
    pub fn shortest_path_length(&self, from: Position, to: Position) -> Option<usize> {
        let length = shortest_path_length(&self.plane, from, to);
        trace!(%from, %to, ?length, "shortest path");
        length
    }
}
