//! Configuration errors reported before a migration run starts.
//!
//! Every variant is detected during upfront validation; a run never
//! fails after the first cell has been invaded, so callers either get
//! a complete snapshot grid or no output at all.

use plume_grid::GridError;
use std::error::Error;
use std::fmt;

/// A configuration problem that prevents the simulation from starting.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The domain grid itself is invalid (zero axis, overflow, or a
    /// malformed input buffer).
    Grid(GridError),
    /// Boundary arrays do not match the domain grid's shape.
    BoundaryShape {
        /// What mismatched and how.
        reason: String,
    },
    /// The grid has more cells than a fill order can index.
    GridTooLarge {
        /// Total cell count of the offending grid.
        cells: usize,
    },
    /// The injection source lies outside the domain.
    SourceOutOfBounds {
        /// Source x coordinate.
        x: i32,
        /// Source y coordinate.
        y: i32,
        /// Source z coordinate; `None` for a column source.
        z: Option<i32>,
    },
    /// The injection source is not admissible under the boundary policy
    /// (sealed cell, or a column with no admissible cell).
    SourceSealed {
        /// Source x coordinate.
        x: i32,
        /// Source y coordinate.
        y: i32,
        /// Source z coordinate; `None` for a column source.
        z: Option<i32>,
    },
    /// `total_snapshots` must be at least 1.
    InvalidSnapshotCount,
    /// `max_column_height` must be at least 1 in volumetric mode.
    InvalidColumnHeight,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(err) => write!(f, "invalid domain grid: {err}"),
            Self::BoundaryShape { reason } => {
                write!(f, "boundary data does not match the grid: {reason}")
            }
            Self::GridTooLarge { cells } => {
                write!(f, "grid has {cells} cells, more than a fill order can index")
            }
            Self::SourceOutOfBounds { x, y, z } => match z {
                Some(z) => write!(f, "source ({x}, {y}, {z}) out of bounds"),
                None => write!(f, "source column ({x}, {y}) out of bounds"),
            },
            Self::SourceSealed { x, y, z } => match z {
                Some(z) => write!(f, "source ({x}, {y}, {z}) is sealed"),
                None => write!(f, "source column ({x}, {y}) has no admissible cell"),
            },
            Self::InvalidSnapshotCount => write!(f, "total_snapshots must be at least 1"),
            Self::InvalidColumnHeight => write!(f, "max_column_height must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}
