//! Plane constants and runtime configuration defaults

/// Intensity given to a tile created by propagation into an empty position
pub const CREATED_TILE_INTENSITY: i64 = 1;

/// Separator between direction codes in a path token
pub const DIRECTION_SEPARATOR: char = ',';

// Grid table display settings
/// Width of one cell in the grid table, in characters
pub const CELL_WIDTH: usize = 3;
/// Maximum rows or columns the grid table will draw
pub const MAX_GRID_DIMENSION: u64 = 256;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Logging
/// Filter used when neither `RUST_LOG` nor `-v` is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used for a single `-v`
pub const VERBOSE_LOG_FILTER: &str = "info";
/// Filter used for `-vv` and above
pub const TRACE_LOG_FILTER: &str = "debug";
