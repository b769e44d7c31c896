//! Text rendering of tiles, rules, paths and the grid

use crate::algorithm::rules::Rule;
use crate::io::configuration::{CELL_WIDTH, MAX_GRID_DIMENSION};
use crate::io::error::{PlaneError, Result};
use crate::spatial::{Plane, Tile};
use ndarray::Array2;

/// `color intensity`
pub fn format_tile(tile: &Tile) -> String {
    format!("{} {}", tile.color(), tile.intensity())
}

/// Rule list wrapped in parentheses, one rule per line
pub fn format_rules(rules: &[Rule]) -> String {
    let mut lines = Vec::with_capacity(rules.len() + 2);
    lines.push("(".to_string());
    lines.extend(rules.iter().map(ToString::to_string));
    lines.push(")".to_string());
    lines.join("\n")
}

/// Path wrapped in brackets, one `x y color intensity` line per tile
pub fn format_path(path: &[&Tile]) -> String {
    let mut lines = Vec::with_capacity(path.len() + 2);
    lines.push("[".to_string());
    lines.extend(
        path.iter()
            .map(|tile| format!("{} {}", tile.position(), format_tile(tile))),
    );
    lines.push("]".to_string());
    lines.join("\n")
}

/// One line per tile in position order, listing its linked directions
pub fn format_dump(plane: &Plane) -> String {
    plane
        .sorted_tiles()
        .into_iter()
        .map(|tile| {
            let links: Vec<&str> = tile
                .neighbors()
                .map(|(direction, _)| direction.code())
                .collect();
            format!(
                "{} {} [{}]",
                tile.position(),
                format_tile(tile),
                links.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Box-drawn table over the plane's bounding box, northmost row first
///
/// Cells show the tile text cut to the cell width and centred. An empty
/// plane renders as an empty string.
///
/// # Errors
///
/// Returns [`PlaneError::GridTooLarge`] when either side of the bounding box
/// exceeds [`MAX_GRID_DIMENSION`]
pub fn render_grid(plane: &Plane) -> Result<String> {
    let Some(bounds) = plane.bounds() else {
        return Ok(String::new());
    };
    if bounds.width() > MAX_GRID_DIMENSION || bounds.height() > MAX_GRID_DIMENSION {
        return Err(PlaneError::GridTooLarge {
            width: bounds.width(),
            height: bounds.height(),
        });
    }
    let width = bounds.width() as usize;
    let height = bounds.height() as usize;

    let mut cells = Array2::from_elem((height, width), String::new());
    for tile in plane.sorted_tiles() {
        let position = tile.position();
        let row = (bounds.max.y - position.y) as usize;
        let col = (position.x - bounds.min.x) as usize;
        if let Some(cell) = cells.get_mut([row, col]) {
            *cell = format_tile(tile);
        }
    }

    let segment = "─".repeat(CELL_WIDTH);
    let segments = vec![segment; width];
    let top = format!("┌{}┐", segments.join("┬"));
    let middle = format!("├{}┤", segments.join("┼"));
    let bottom = format!("└{}┘", segments.join("┴"));

    let mut lines = vec![top];
    for (index, row) in cells.rows().into_iter().enumerate() {
        if index > 0 {
            lines.push(middle.clone());
        }
        let mut line = String::new();
        for cell in &row {
            line.push('│');
            line.push_str(&centre(cell));
        }
        line.push('│');
        lines.push(line);
    }
    lines.push(bottom);
    Ok(lines.join("\n"))
}

fn centre(text: &str) -> String {
    let clipped: String = text.chars().take(CELL_WIDTH).collect();
    let padding = CELL_WIDTH - clipped.chars().count();
    let left = padding / 2;
    let right = padding - left;
    format!("{}{clipped}{}", " ".repeat(left), " ".repeat(right))
}
