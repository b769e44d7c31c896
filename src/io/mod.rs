//! Input/output: commands, rendering, logging and the CLI driver

/// Command-line driver for scripts and standard input
pub mod cli;
/// Parsing of the line-oriented command language
pub mod command;
/// Constants and runtime defaults
pub mod configuration;
/// Error taxonomy and context helpers
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress display for script batches
pub mod progress;
/// Text rendering of tiles, rules, paths and the grid
pub mod render;
