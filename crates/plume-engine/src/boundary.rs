//! Capacity and boundary policies for the two supported domain shapes.
//!
//! The surface-bounded and volumetric fills share one frontier
//! scheduler; everything that distinguishes them — which cells are
//! permeable, and when a column stops accepting gas — lives behind the
//! [`Boundary`] enum.

use crate::error::ConfigError;
use plume_grid::{Cell, Field2, Field3, Grid3};

/// Property-value threshold separating reservoir rock from seal.
///
/// Cells whose property value (acoustic velocity, m/s) is below this
/// threshold classify as permeable reservoir; values at or above it
/// classify as caprock. Sits between typical brine-saturated sandstone
/// (~1500 m/s) and shale caprock (~2607 m/s) interval velocities.
pub const SEAL_THRESHOLD: f64 = 2600.0;

/// Where injection enters the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A lateral column; the engine resolves it to the deepest
    /// admissible cell of that column (the seal-adjacent entry point).
    Column {
        /// Column x coordinate.
        x: i32,
        /// Column y coordinate.
        y: i32,
    },
    /// An explicit grid cell.
    Cell(Cell),
}

/// Admission rules for one migration run.
///
/// Both variants borrow their arrays for the duration of the call; the
/// engine never mutates boundary data.
#[derive(Debug, Clone, Copy)]
pub enum Boundary<'a> {
    /// Depth/topography-bounded domain: each column `(x, y)` admits
    /// invasion only at depths shallower than its caprock depth.
    SurfaceBounded {
        /// Caprock depth per `(x, y)` column.
        topography: &'a Field2<f64>,
        /// Physical depth per z-layer, length `nz`.
        depths: &'a [f64],
    },
    /// Full 3D property-thresholded domain with a column-height cap.
    VolumeBounded {
        /// Per-cell property values classified against [`SEAL_THRESHOLD`].
        velocity: &'a Field3<f64>,
        /// Physical depth per z-layer, length `nz`.
        depths: &'a [f64],
        /// Maximum number of invaded cells per `(x, y)` column.
        max_column_height: u32,
    },
}

impl Boundary<'_> {
    /// Check boundary shapes and parameters against the domain grid.
    ///
    /// Called once before any expansion; a failure here is atomic (no
    /// partial output).
    pub(crate) fn validate(&self, grid: &Grid3) -> Result<(), ConfigError> {
        if grid.cell_count() > i32::MAX as usize {
            return Err(ConfigError::GridTooLarge {
                cells: grid.cell_count(),
            });
        }
        match self {
            Self::SurfaceBounded { topography, depths } => {
                if (topography.nx(), topography.ny()) != (grid.nx(), grid.ny()) {
                    return Err(ConfigError::BoundaryShape {
                        reason: format!(
                            "topography is {}x{}, grid is {}x{}",
                            topography.nx(),
                            topography.ny(),
                            grid.nx(),
                            grid.ny()
                        ),
                    });
                }
                check_depths(depths, grid)
            }
            Self::VolumeBounded {
                velocity,
                depths,
                max_column_height,
            } => {
                if velocity.grid().dims() != grid.dims() {
                    let (vx, vy, vz) = velocity.grid().dims();
                    let (gx, gy, gz) = grid.dims();
                    return Err(ConfigError::BoundaryShape {
                        reason: format!(
                            "property grid is {vx}x{vy}x{vz}, domain grid is {gx}x{gy}x{gz}"
                        ),
                    });
                }
                check_depths(depths, grid)?;
                if *max_column_height == 0 {
                    return Err(ConfigError::InvalidColumnHeight);
                }
                Ok(())
            }
        }
    }

    /// Physical depth of a cell, the frontier's primary ordering key.
    pub(crate) fn depth_of(&self, cell: Cell) -> f64 {
        let depths = match self {
            Self::SurfaceBounded { depths, .. } => depths,
            Self::VolumeBounded { depths, .. } => depths,
        };
        depths[cell.z as usize]
    }

    /// Whether the cell's rock can ever hold CO2 under this boundary.
    pub(crate) fn permeable(&self, cell: Cell) -> bool {
        match self {
            Self::SurfaceBounded { topography, depths } => {
                depths[cell.z as usize] < topography[(cell.x, cell.y)]
            }
            Self::VolumeBounded { velocity, .. } => velocity[cell] < SEAL_THRESHOLD,
        }
    }

    /// Local admission test for a candidate cell.
    ///
    /// Column counts only grow during a run, so a cell that fails this
    /// test never becomes admissible later.
    pub(crate) fn admissible(&self, cell: Cell, columns: &ColumnFill) -> bool {
        if !self.permeable(cell) {
            return false;
        }
        match self {
            Self::SurfaceBounded { .. } => true,
            Self::VolumeBounded {
                max_column_height, ..
            } => columns.count(cell.x, cell.y) < *max_column_height,
        }
    }

    /// Resolve the injection source to a concrete cell, validating it.
    pub(crate) fn resolve_source(
        &self,
        grid: &Grid3,
        source: Source,
    ) -> Result<Cell, ConfigError> {
        match source {
            Source::Cell(cell) => {
                if !grid.contains(cell) {
                    return Err(ConfigError::SourceOutOfBounds {
                        x: cell.x,
                        y: cell.y,
                        z: Some(cell.z),
                    });
                }
                if !self.permeable(cell) {
                    return Err(ConfigError::SourceSealed {
                        x: cell.x,
                        y: cell.y,
                        z: Some(cell.z),
                    });
                }
                Ok(cell)
            }
            Source::Column { x, y } => {
                if x < 0 || x >= grid.nx() as i32 || y < 0 || y >= grid.ny() as i32 {
                    return Err(ConfigError::SourceOutOfBounds { x, y, z: None });
                }
                // Deepest permeable cell of the column: injection enters
                // adjacent to the seal and migrates buoyantly from there.
                let mut entry: Option<(f64, Cell)> = None;
                for z in 0..grid.nz() as i32 {
                    let cell = Cell::new(x, y, z);
                    if !self.permeable(cell) {
                        continue;
                    }
                    let depth = self.depth_of(cell);
                    let deeper = match entry {
                        None => true,
                        Some((best, _)) => depth.total_cmp(&best).is_gt(),
                    };
                    if deeper {
                        entry = Some((depth, cell));
                    }
                }
                entry
                    .map(|(_, cell)| cell)
                    .ok_or(ConfigError::SourceSealed { x, y, z: None })
            }
        }
    }
}

fn check_depths(depths: &[f64], grid: &Grid3) -> Result<(), ConfigError> {
    if depths.len() != grid.nz() as usize {
        return Err(ConfigError::BoundaryShape {
            reason: format!(
                "depths has {} entries, grid has {} layers",
                depths.len(),
                grid.nz()
            ),
        });
    }
    Ok(())
}

/// Per-column invaded-cell counts for one run.
///
/// Owned exclusively by the running fill; records every invasion so the
/// volumetric column cap can refuse admission once a column saturates.
#[derive(Debug)]
pub(crate) struct ColumnFill {
    counts: Vec<u32>,
    ny: usize,
}

impl ColumnFill {
    pub(crate) fn new(grid: &Grid3) -> Self {
        Self {
            counts: vec![0; (grid.nx() as usize) * (grid.ny() as usize)],
            ny: grid.ny() as usize,
        }
    }

    pub(crate) fn record(&mut self, cell: Cell) {
        self.counts[(cell.x as usize) * self.ny + cell.y as usize] += 1;
    }

    pub(crate) fn count(&self, x: i32, y: i32) -> u32 {
        self.counts[(x as usize) * self.ny + y as usize]
    }
}
