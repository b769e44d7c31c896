//! Directional walks and shortest path lengths between tiles

use crate::algorithm::traversal::{Visit, breadth_first};
use crate::spatial::{Direction, Plane, Position, Tile};

/// Follow `directions` link by link from the tile at `start`
///
/// The returned path begins with the start tile and gains one tile per step.
/// A missing link anywhere discards the walk, so the result is either the
/// full path or `None`; an empty direction list yields the start tile alone.
pub fn walk_path<'a>(
    plane: &'a Plane,
    start: Position,
    directions: &[Direction],
) -> Option<Vec<&'a Tile>> {
    let mut key = plane.key_at(start)?;
    let mut path = Vec::with_capacity(directions.len() + 1);
    path.push(plane.get(key)?);

    for &direction in directions {
        key = plane.neighbor(key, direction)?;
        path.push(plane.get(key)?);
    }

    Some(path)
}

/// Number of steps on a shortest link path from `from` to `to`
///
/// Adjacent tiles are one step apart and a tile is zero steps from itself.
/// Returns `None` when either position is empty or no path exists.
pub fn shortest_path_length(plane: &Plane, from: Position, to: Position) -> Option<usize> {
    let start = plane.key_at(from)?;
    let target = plane.key_at(to)?;

    let mut length = None;
    breadth_first(plane, start, |key, _, depth| {
        if key == target {
            length = Some(depth);
            return Visit::Stop;
        }
        Visit::Continue
    });
    length
}
