//! Dense field storage over [`Grid3`] and 2D column data.
//!
//! A [`Field3`] is always backed by a single flat buffer; the nested
//! constructors and exporters exist so that callers holding
//! `Vec<Vec<Vec<T>>>` data and callers holding a flat slice with
//! explicit dimensions address the same logical grid identically.

use crate::error::GridError;
use crate::grid3::{Cell, Grid3};
use std::ops::{Index, IndexMut};

/// A per-cell value field over a [`Grid3`], stored flat.
///
/// Indexing by [`Cell`] panics on out-of-bounds coordinates, matching
/// slice indexing; use [`get`](Self::get) for untrusted coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Field3<T> {
    grid: Grid3,
    data: Vec<T>,
}

impl<T> Field3<T> {
    /// Create a field with every cell set to `value`.
    pub fn filled(grid: Grid3, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            grid,
            data: vec![value; grid.cell_count()],
        }
    }

    /// Wrap a flat buffer, validating its length against the grid.
    ///
    /// The buffer layout must be `x * ny * nz + y * nz + z` (x outermost,
    /// z innermost).
    pub fn from_flat(grid: Grid3, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != grid.cell_count() {
            return Err(GridError::ShapeMismatch {
                expected: grid.cell_count(),
                actual: data.len(),
            });
        }
        Ok(Self { grid, data })
    }

    /// Build a field from nested `[x][y][z]` buffers.
    ///
    /// Dimensions are taken from the outer lengths; ragged inner rows
    /// are rejected with [`GridError::RaggedNested`].
    pub fn from_nested(nested: Vec<Vec<Vec<T>>>) -> Result<Self, GridError> {
        let nx = nested.len();
        let ny = nested.first().map_or(0, |plane| plane.len());
        let nz = nested
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, |column| column.len());
        let grid = Grid3::new(
            u32::try_from(nx).map_err(|_| GridError::DimensionTooLarge {
                name: "nx",
                value: u32::MAX,
                max: Grid3::MAX_DIM,
            })?,
            ny as u32,
            nz as u32,
        )?;

        let mut data = Vec::with_capacity(grid.cell_count());
        for (xi, plane) in nested.into_iter().enumerate() {
            if plane.len() != ny {
                return Err(GridError::RaggedNested {
                    axis: "y",
                    index: xi,
                    expected: ny,
                    actual: plane.len(),
                });
            }
            for (yi, column) in plane.into_iter().enumerate() {
                if column.len() != nz {
                    return Err(GridError::RaggedNested {
                        axis: "z",
                        index: xi * ny + yi,
                        expected: nz,
                        actual: column.len(),
                    });
                }
                data.extend(column);
            }
        }
        Ok(Self { grid, data })
    }

    /// The grid this field is defined over.
    pub fn grid(&self) -> Grid3 {
        self.grid
    }

    /// Value at a cell, or `None` if out of bounds.
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.grid.index_of(cell).map(|i| &self.data[i])
    }

    /// Set the value at an in-bounds cell.
    pub fn set(&mut self, cell: Cell, value: T) {
        let i = self.grid.flat_index(cell);
        self.data[i] = value;
    }

    /// The flat backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable iterator over all cell values in flat-index order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Consume the field, returning the flat backing buffer.
    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    /// Export as nested `[x][y][z]` buffers.
    pub fn to_nested(&self) -> Vec<Vec<Vec<T>>>
    where
        T: Clone,
    {
        let (nx, ny, nz) = self.grid.dims();
        let mut out = Vec::with_capacity(nx as usize);
        for x in 0..nx as i32 {
            let mut plane = Vec::with_capacity(ny as usize);
            for y in 0..ny as i32 {
                let mut column = Vec::with_capacity(nz as usize);
                for z in 0..nz as i32 {
                    column.push(self[Cell::new(x, y, z)].clone());
                }
                plane.push(column);
            }
            out.push(plane);
        }
        out
    }
}

impl<T> Index<Cell> for Field3<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        let i = self.grid.flat_index(cell);
        &self.data[i]
    }
}

impl<T> IndexMut<Cell> for Field3<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        let i = self.grid.flat_index(cell);
        &mut self.data[i]
    }
}

/// A per-column value field over the lateral `(x, y)` extent of a grid.
///
/// Used for boundary data that varies laterally but not with depth,
/// such as the caprock topography.
#[derive(Debug, Clone, PartialEq)]
pub struct Field2<T> {
    nx: u32,
    ny: u32,
    data: Vec<T>,
}

impl<T> Field2<T> {
    /// Create a field with every column set to `value`.
    pub fn filled(nx: u32, ny: u32, value: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        Self::validate_dims(nx, ny)?;
        Ok(Self {
            nx,
            ny,
            data: vec![value; (nx as usize) * (ny as usize)],
        })
    }

    /// Wrap a flat row-major buffer (`x * ny + y`), validating its length.
    pub fn from_flat(nx: u32, ny: u32, data: Vec<T>) -> Result<Self, GridError> {
        Self::validate_dims(nx, ny)?;
        let expected = (nx as usize) * (ny as usize);
        if data.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { nx, ny, data })
    }

    /// Build a field from nested `[x][y]` buffers, rejecting ragged rows.
    pub fn from_nested(nested: Vec<Vec<T>>) -> Result<Self, GridError> {
        let nx = nested.len();
        let ny = nested.first().map_or(0, |row| row.len());
        Self::validate_dims(nx as u32, ny as u32)?;
        let mut data = Vec::with_capacity(nx * ny);
        for (xi, row) in nested.into_iter().enumerate() {
            if row.len() != ny {
                return Err(GridError::RaggedNested {
                    axis: "y",
                    index: xi,
                    expected: ny,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            nx: nx as u32,
            ny: ny as u32,
            data,
        })
    }

    fn validate_dims(nx: u32, ny: u32) -> Result<(), GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::EmptySpace);
        }
        for (name, value) in [("nx", nx), ("ny", ny)] {
            if value > Grid3::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid3::MAX_DIM,
                });
            }
        }
        Ok(())
    }

    /// Extent along the x-axis.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Extent along the y-axis.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Value at a column, or `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if x < 0 || x >= self.nx as i32 || y < 0 || y >= self.ny as i32 {
            return None;
        }
        Some(&self.data[(x as usize) * (self.ny as usize) + y as usize])
    }

    /// The flat backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<(i32, i32)> for Field2<T> {
    type Output = T;

    fn index(&self, (x, y): (i32, i32)) -> &T {
        self.get(x, y)
            .unwrap_or_else(|| panic!("column ({x}, {y}) out of bounds"))
    }
}
