//! 3D rectilinear grid with 6-connected neighbourhood.

use crate::error::GridError;
use smallvec::SmallVec;

/// The 6-connected neighbour offsets: up, down, then the four lateral
/// directions. The order is fixed but carries no semantic weight — the
/// migration frontier re-sorts candidates by its own priority key.
const NEIGHBOUR_OFFSETS: [(i32, i32, i32); 6] = [
    (0, 0, -1),
    (0, 0, 1),
    (-1, 0, 0),
    (1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
];

/// A single grid cell, addressed as `(x, y, z)`.
///
/// The z-axis points downward: `z = 0` is the shallowest layer and
/// depth increases with `z`. The derived `Ord` is lexicographic
/// `(x, y, z)` and serves as the engine's deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Position along the x-axis.
    pub x: i32,
    /// Position along the y-axis.
    pub y: i32,
    /// Position along the z-axis (depth index).
    pub z: i32,
}

impl Cell {
    /// Construct a cell from its three coordinates.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A three-dimensional rectilinear grid of `nx * ny * nz` cells.
///
/// Purely structural: shape, bounds-checked addressing, and neighbour
/// enumeration. Flat indices follow `x * ny * nz + y * nz + z`, so a
/// column `(x, y)` occupies a contiguous run of the flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid3 {
    nx: u32,
    ny: u32,
    nz: u32,
    cell_count: usize,
}

impl Grid3 {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with dimensions `nx * ny * nz`.
    ///
    /// Returns `Err(GridError::EmptySpace)` if any dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if any exceeds `i32::MAX`, or
    /// `Err(GridError::TooManyCells)` if the cell count overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use plume_grid::{Cell, Grid3};
    ///
    /// let grid = Grid3::new(4, 4, 8).unwrap();
    /// assert_eq!(grid.cell_count(), 128);
    /// assert_eq!(grid.neighbours(Cell::new(0, 0, 0)).len(), 3);
    /// ```
    pub fn new(nx: u32, ny: u32, nz: u32) -> Result<Self, GridError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GridError::EmptySpace);
        }
        for (name, value) in [("nx", nx), ("ny", ny), ("nz", nz)] {
            if value > Self::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        let cell_count = (nx as usize)
            .checked_mul(ny as usize)
            .and_then(|v| v.checked_mul(nz as usize))
            .ok_or(GridError::TooManyCells { nx, ny, nz })?;
        Ok(Self {
            nx,
            ny,
            nz,
            cell_count,
        })
    }

    /// Extent along the x-axis.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Extent along the y-axis.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Extent along the z-axis (number of depth layers).
    pub fn nz(&self) -> u32 {
        self.nz
    }

    /// Dimensions as an `(nx, ny, nz)` tuple.
    pub fn dims(&self) -> (u32, u32, u32) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Returns `true` if the cell lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.nx as i32
            && cell.y >= 0
            && cell.y < self.ny as i32
            && cell.z >= 0
            && cell.z < self.nz as i32
    }

    /// Flat index of an in-bounds cell: `x * ny * nz + y * nz + z`.
    ///
    /// The caller must guarantee `contains(cell)`; use
    /// [`index_of`](Self::index_of) for untrusted coordinates.
    pub fn flat_index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "flat_index on out-of-bounds {cell:?}");
        let ny = self.ny as usize;
        let nz = self.nz as usize;
        (cell.x as usize) * ny * nz + (cell.y as usize) * nz + (cell.z as usize)
    }

    /// Flat index of a cell, or `None` if it is out of bounds.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(self.flat_index(cell))
        } else {
            None
        }
    }

    /// The cell at a flat index, or `None` if the index is out of range.
    ///
    /// Inverse of [`flat_index`](Self::flat_index); round-tripping is
    /// loss-free for every in-range value.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count {
            return None;
        }
        let nz = self.nz as usize;
        let ny = self.ny as usize;
        let z = (index % nz) as i32;
        let y = ((index / nz) % ny) as i32;
        let x = (index / (ny * nz)) as i32;
        Some(Cell::new(x, y, z))
    }

    /// Enumerate the 6-connected neighbours of a cell, yielding only
    /// in-bounds coordinates.
    ///
    /// The order is fixed: up, down, then the four lateral directions.
    /// Out-of-range input yields an empty list.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[Cell; 6]> {
        let mut result = SmallVec::new();
        if !self.contains(cell) {
            return result;
        }
        for (dx, dy, dz) in NEIGHBOUR_OFFSETS {
            let nb = Cell::new(cell.x + dx, cell.y + dy, cell.z + dz);
            if self.contains(nb) {
                result.push(nb);
            }
        }
        result
    }

    /// Iterate over all cells in flat-index order (x outermost, z innermost).
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count).map(move |i| {
            self.cell_at(i)
                .expect("cell_at must succeed for i < cell_count")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32, z: i32) -> Cell {
        Cell::new(x, y, z)
    }

    // ── Constructor tests ─────────────────────────────────────────

    #[test]
    fn new_zero_dim() {
        assert!(matches!(Grid3::new(0, 4, 4), Err(GridError::EmptySpace)));
        assert!(matches!(Grid3::new(4, 0, 4), Err(GridError::EmptySpace)));
        assert!(matches!(Grid3::new(4, 4, 0), Err(GridError::EmptySpace)));
    }

    #[test]
    fn new_dim_too_large() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid3::new(big, 4, 4),
            Err(GridError::DimensionTooLarge { name: "nx", .. })
        ));
        assert!(matches!(
            Grid3::new(4, big, 4),
            Err(GridError::DimensionTooLarge { name: "ny", .. })
        ));
        assert!(matches!(
            Grid3::new(4, 4, big),
            Err(GridError::DimensionTooLarge { name: "nz", .. })
        ));
    }

    #[test]
    fn new_cell_count_overflow() {
        let d = i32::MAX as u32;
        assert!(matches!(
            Grid3::new(d, d, d),
            Err(GridError::TooManyCells { .. })
        ));
    }

    #[test]
    fn single_cell() {
        let g = Grid3::new(1, 1, 1).unwrap();
        assert_eq!(g.cell_count(), 1);
        assert!(g.neighbours(c(0, 0, 0)).is_empty());
    }

    // ── Addressing tests ──────────────────────────────────────────

    #[test]
    fn flat_index_layout() {
        // Column-contiguous: (x, y, z) -> x*ny*nz + y*nz + z.
        let g = Grid3::new(2, 3, 4).unwrap();
        assert_eq!(g.flat_index(c(0, 0, 0)), 0);
        assert_eq!(g.flat_index(c(0, 0, 3)), 3);
        assert_eq!(g.flat_index(c(0, 1, 0)), 4);
        assert_eq!(g.flat_index(c(1, 0, 0)), 12);
        assert_eq!(g.flat_index(c(1, 2, 3)), 23);
    }

    #[test]
    fn index_of_out_of_bounds() {
        let g = Grid3::new(2, 2, 2).unwrap();
        assert_eq!(g.index_of(c(-1, 0, 0)), None);
        assert_eq!(g.index_of(c(0, 2, 0)), None);
        assert_eq!(g.index_of(c(0, 0, 2)), None);
        assert_eq!(g.index_of(c(1, 1, 1)), Some(7));
    }

    #[test]
    fn cell_at_roundtrip() {
        let g = Grid3::new(3, 4, 5).unwrap();
        for i in 0..g.cell_count() {
            let cell = g.cell_at(i).unwrap();
            assert_eq!(g.flat_index(cell), i, "round-trip failed at index {i}");
        }
        assert_eq!(g.cell_at(g.cell_count()), None);
    }

    #[test]
    fn cells_matches_flat_order() {
        let g = Grid3::new(2, 2, 3).unwrap();
        let all: Vec<Cell> = g.cells().collect();
        assert_eq!(all.len(), g.cell_count());
        assert_eq!(all[0], c(0, 0, 0));
        assert_eq!(all[1], c(0, 0, 1));
        assert_eq!(all[3], c(0, 1, 0));
        assert_eq!(all[11], c(1, 1, 2));
    }

    // ── Neighbour tests ───────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = Grid3::new(4, 4, 4).unwrap();
        let n = g.neighbours(c(1, 2, 2));
        assert_eq!(n.len(), 6, "interior cell should have 6 neighbours");
        for nb in [
            c(1, 2, 1),
            c(1, 2, 3),
            c(0, 2, 2),
            c(2, 2, 2),
            c(1, 1, 2),
            c(1, 3, 2),
        ] {
            assert!(n.contains(&nb), "missing neighbour {nb:?}");
        }
    }

    #[test]
    fn neighbours_corner() {
        let g = Grid3::new(4, 4, 4).unwrap();
        assert_eq!(g.neighbours(c(0, 0, 0)).len(), 3);
        assert_eq!(g.neighbours(c(3, 3, 3)).len(), 3);
    }

    #[test]
    fn neighbours_face() {
        let g = Grid3::new(4, 4, 4).unwrap();
        assert_eq!(g.neighbours(c(2, 2, 0)).len(), 5);
        assert_eq!(g.neighbours(c(0, 2, 2)).len(), 5);
    }

    #[test]
    fn neighbours_out_of_range_input() {
        let g = Grid3::new(4, 4, 4).unwrap();
        assert!(g.neighbours(c(-1, 0, 0)).is_empty());
        assert!(g.neighbours(c(0, 0, 4)).is_empty());
    }

    // ── Property tests ────────────────────────────────────────────

    proptest! {
        #[test]
        fn index_bijection(
            nx in 1u32..8, ny in 1u32..8, nz in 1u32..8,
        ) {
            let g = Grid3::new(nx, ny, nz).unwrap();
            let mut seen = vec![false; g.cell_count()];
            for cell in g.cells() {
                let i = g.flat_index(cell);
                prop_assert!(!seen[i], "flat index {i} produced twice");
                seen[i] = true;
                prop_assert_eq!(g.cell_at(i), Some(cell));
            }
            prop_assert!(seen.iter().all(|&s| s));
        }

        #[test]
        fn neighbours_symmetric(
            nx in 1u32..6, ny in 1u32..6, nz in 1u32..6,
            x in 0i32..6, y in 0i32..6, z in 0i32..6,
        ) {
            let g = Grid3::new(nx, ny, nz).unwrap();
            let cell = Cell::new(x % nx as i32, y % ny as i32, z % nz as i32);
            for nb in g.neighbours(cell) {
                prop_assert!(
                    g.neighbours(nb).contains(&cell),
                    "neighbour symmetry violated between {:?} and {:?}",
                    cell, nb,
                );
            }
        }
    }
}
