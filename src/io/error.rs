//! Error types and context management for plane operations

use crate::spatial::direction::{Direction, Position};
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all plane and dispatcher operations
#[derive(Debug)]
pub enum PlaneError {
    /// Command line could not be interpreted
    InvalidCommand {
        /// The offending line, trimmed
        line: String,
        /// Why the line was rejected
        reason: String,
    },

    /// A command argument failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Direction code outside the fixed two-letter table
    InvalidDirection {
        /// The unrecognised code
        code: String,
    },

    /// Rule text with a bad requirement list
    MalformedRule {
        /// Rule text as given
        text: String,
        /// Description of what's wrong with the rule
        reason: String,
    },

    /// Adjacency handles broke the symmetry or position invariant
    InconsistentAdjacency {
        /// Position of the tile owning the bad slot
        position: Position,
        /// Direction of the bad slot
        direction: Direction,
        /// Description of the violation
        reason: String,
    },

    /// Bounding box too large to draw as a table
    GridTooLarge {
        /// Columns covered by the plane
        width: u64,
        /// Rows covered by the plane
        height: u64,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing command output failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCommand { line, reason } => {
                write!(f, "Invalid command '{line}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidDirection { code } => {
                write!(f, "Unknown direction code '{code}'")
            }
            Self::MalformedRule { text, reason } => {
                write!(f, "Malformed rule '{text}': {reason}")
            }
            Self::InconsistentAdjacency {
                position,
                direction,
                reason,
            } => {
                write!(
                    f,
                    "Inconsistent adjacency at {position} towards {direction}: {reason}"
                )
            }
            Self::GridTooLarge { width, height } => {
                write!(
                    f,
                    "Grid of {width}x{height} cells is too large to draw"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Output { source } => write!(f, "Failed to write output: {source}"),
        }
    }
}

impl std::error::Error for PlaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for plane results
pub type Result<T> = std::result::Result<T, PlaneError>;

impl PlaneError {
    /// Whether the error concerns a single input line
    ///
    /// Input errors are reported and skipped by the driver, everything else aborts the run.
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCommand { .. }
                | Self::InvalidParameter { .. }
                | Self::InvalidDirection { .. }
                | Self::MalformedRule { .. }
                | Self::GridTooLarge { .. }
        )
    }
}

/// Attaches file system context to I/O results
pub trait WithContext<T> {
    /// Wrap an I/O failure with the path and operation involved
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`PlaneError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithContext<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PlaneError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for PlaneError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PlaneError {
    PlaneError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid command error
pub fn invalid_command(line: &str, reason: &impl ToString) -> PlaneError {
    PlaneError::InvalidCommand {
        line: line.trim().to_string(),
        reason: reason.to_string(),
    }
}
