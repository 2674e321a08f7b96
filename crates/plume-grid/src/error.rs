//! Error types for grid construction and addressing.

use std::fmt;

/// Errors arising from grid construction or field shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero-length axis.
    EmptySpace,
    /// A dimension exceeds the maximum addressable extent.
    DimensionTooLarge {
        /// Axis name (`"nx"`, `"ny"`, or `"nz"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The product of the dimensions overflows `usize`.
    TooManyCells {
        /// Extent along the x-axis.
        nx: u32,
        /// Extent along the y-axis.
        ny: u32,
        /// Extent along the z-axis.
        nz: u32,
    },
    /// A flat buffer's length does not match the grid's cell count.
    ShapeMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements supplied.
        actual: usize,
    },
    /// A nested buffer is ragged: one of its rows has the wrong length.
    RaggedNested {
        /// Axis on which the length mismatch occurred (`"y"` or `"z"`).
        axis: &'static str,
        /// Index of the offending row along the outer axis.
        index: usize,
        /// Expected row length.
        expected: usize,
        /// Actual row length.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell on every axis"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "dimension {name} = {value} exceeds maximum {max}")
            }
            Self::TooManyCells { nx, ny, nz } => {
                write!(f, "grid {nx}x{ny}x{nz} exceeds maximum cell count")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "flat buffer has {actual} elements, grid expects {expected}")
            }
            Self::RaggedNested {
                axis,
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "nested buffer is ragged on the {axis}-axis at index {index}: \
                     expected {expected} elements, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
