//! Tests for plane constants and display configuration

#[cfg(test)]
mod tests {
    use tileplane::io::configuration::{
        CELL_WIDTH, CREATED_TILE_INTENSITY, DEFAULT_LOG_FILTER, DIRECTION_SEPARATOR,
        MAX_GRID_DIMENSION, PROGRESS_BAR_WIDTH, TRACE_LOG_FILTER, VERBOSE_LOG_FILTER,
    };

    // Tests tiles created by propagation start at unit intensity
    // Verified by changing constant values
    #[test]
    fn test_created_tile_intensity() {
        assert_eq!(CREATED_TILE_INTENSITY, 1);
    }

    // Tests path tokens are comma separated
    #[test]
    fn test_direction_separator() {
        assert_eq!(DIRECTION_SEPARATOR, ',');
    }

    // Tests grid cells fit a three letter color
    #[test]
    fn test_cell_width() {
        assert_eq!(CELL_WIDTH, 3);
    }

    // Tests the grid table size limit
    // Verified by raising the limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 256);
    }

    // Tests progress bar width
    // Verified by changing width value
    #[test]
    fn test_progress_bar_width() {
        assert_eq!(PROGRESS_BAR_WIDTH, 30);
    }

    // Tests log filters widen with verbosity
    #[test]
    fn test_log_filters() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert_eq!(VERBOSE_LOG_FILTER, "info");
        assert_eq!(TRACE_LOG_FILTER, "debug");
    }
}
