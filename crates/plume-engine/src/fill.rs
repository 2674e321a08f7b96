//! The frontier scheduler: buoyancy-ordered invasion from one source.
//!
//! One algorithm serves both domain shapes. The [`Boundary`] policy
//! decides which cells may ever hold gas; the scheduler owns the
//! frontier, the visited set, and the per-column counters, grows the
//! invaded region from the injection source, and stamps each cell with
//! a global fill order. Quantization to playback frames happens as a
//! separate pass over the completed fill-order field.

use crate::boundary::{Boundary, ColumnFill, Source};
use crate::error::ConfigError;
use crate::frontier::Frontier;
use crate::snapshot::{self, UNFILLED};
use plume_grid::{Cell, Field2, Field3, Grid3};

/// Default number of playback frames.
pub const DEFAULT_TOTAL_SNAPSHOTS: u32 = 100;

/// Result of a completed migration: the raw fill order plus the
/// invaded-cell count `K`.
///
/// Fill orders form the dense range `[0, K)`; unreachable cells keep
/// the -1 sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct FillOrder {
    /// Per-cell invasion order, -1 for never-invaded cells.
    pub order: Field3<i32>,
    /// Number of invaded cells.
    pub invaded: usize,
}

/// Compute the fill order for one `(domain, source)` pair.
///
/// Validates the configuration atomically before any expansion: shape
/// mismatches, an out-of-bounds or sealed source, and a zero column cap
/// are reported without touching any output state.
///
/// The expansion itself follows the documented frontier contract:
/// starting from the source (order 0), repeatedly invade the shallowest
/// admissible candidate — exact-depth ties broken by lexicographic cell
/// order — and push its admissible 6-connected neighbours. Candidates
/// queued before a column saturated are re-checked at pop time, so the
/// volumetric cap is never overshot. Admissibility only shrinks during
/// a run (column counts grow monotonically), which makes the discard
/// safe: a refused candidate can never become admissible again.
pub fn fill_order(
    grid: Grid3,
    boundary: &Boundary<'_>,
    source: Source,
) -> Result<FillOrder, ConfigError> {
    boundary.validate(&grid)?;
    let entry = boundary.resolve_source(&grid, source)?;

    let mut order = Field3::filled(grid, UNFILLED);
    let mut visited = vec![false; grid.cell_count()];
    let mut columns = ColumnFill::new(&grid);
    let mut frontier = Frontier::new();
    let mut next = 0i32;

    visited[grid.flat_index(entry)] = true;
    order[entry] = next;
    next += 1;
    columns.record(entry);
    push_neighbours(&grid, boundary, entry, &visited, &columns, &mut frontier);

    while let Some(candidate) = frontier.pop() {
        let idx = grid.flat_index(candidate.cell);
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        if !boundary.admissible(candidate.cell, &columns) {
            continue;
        }
        order[candidate.cell] = next;
        next += 1;
        columns.record(candidate.cell);
        push_neighbours(
            &grid,
            boundary,
            candidate.cell,
            &visited,
            &columns,
            &mut frontier,
        );
    }

    Ok(FillOrder {
        order,
        invaded: next as usize,
    })
}

/// Queue the unvisited, currently admissible neighbours of a freshly
/// invaded cell.
fn push_neighbours(
    grid: &Grid3,
    boundary: &Boundary<'_>,
    cell: Cell,
    visited: &[bool],
    columns: &ColumnFill,
    frontier: &mut Frontier,
) {
    for nb in grid.neighbours(cell) {
        if !visited[grid.flat_index(nb)] && boundary.admissible(nb, columns) {
            frontier.push(boundary.depth_of(nb), nb);
        }
    }
}

/// Run a migration and quantize the result in one call.
///
/// This is the engine behind the mode-specific entry points below;
/// `total_snapshots` is validated before the fill starts so the call
/// fails atomically.
pub fn fill(
    grid: Grid3,
    boundary: &Boundary<'_>,
    source: Source,
    total_snapshots: u32,
) -> Result<Field3<i32>, ConfigError> {
    if total_snapshots == 0 {
        return Err(ConfigError::InvalidSnapshotCount);
    }
    let result = fill_order(grid, boundary, source)?;
    snapshot::quantize(&result.order, result.invaded, total_snapshots)
}

/// Surface mode: depth/topography-bounded single-source fill.
///
/// The domain's lateral extent comes from `topography`, its layer count
/// from `depths`. The source column is resolved to its deepest cell
/// shallower than the local caprock depth.
pub fn fill_surface(
    topography: &Field2<f64>,
    depths: &[f64],
    source: (u32, u32),
    total_snapshots: u32,
) -> Result<Field3<i32>, ConfigError> {
    let nz = u32::try_from(depths.len()).map_err(|_| ConfigError::BoundaryShape {
        reason: format!("depths has {} entries, more than a grid can hold", depths.len()),
    })?;
    let grid = Grid3::new(topography.nx(), topography.ny(), nz)?;
    let boundary = Boundary::SurfaceBounded { topography, depths };
    let (x, y) = source;
    fill(
        grid,
        &boundary,
        Source::Column {
            x: clamp_coord(x),
            y: clamp_coord(y),
        },
        total_snapshots,
    )
}

/// Volumetric mode: property-thresholded fill with a column-height cap.
pub fn fill_volume(
    velocity: &Field3<f64>,
    depths: &[f64],
    max_column_height: u32,
    source: (u32, u32, u32),
    total_snapshots: u32,
) -> Result<Field3<i32>, ConfigError> {
    let grid = velocity.grid();
    let boundary = Boundary::VolumeBounded {
        velocity,
        depths,
        max_column_height,
    };
    let (x, y, z) = source;
    fill(
        grid,
        &boundary,
        Source::Cell(Cell::new(clamp_coord(x), clamp_coord(y), clamp_coord(z))),
        total_snapshots,
    )
}

/// Volumetric mode over a flat property buffer with explicit dimensions.
///
/// Numerically identical to [`fill_volume`] for the same logical input:
/// the buffer is rebound to the grid and handed to the same engine, so
/// no algorithm logic is duplicated between the two representations.
pub fn fill_volume_flat(
    velocity: &[f64],
    dims: (u32, u32, u32),
    depths: &[f64],
    max_column_height: u32,
    source: (u32, u32, u32),
    total_snapshots: u32,
) -> Result<Vec<i32>, ConfigError> {
    let (nx, ny, nz) = dims;
    let grid = Grid3::new(nx, ny, nz)?;
    let velocity = Field3::from_flat(grid, velocity.to_vec())?;
    fill_volume(&velocity, depths, max_column_height, source, total_snapshots)
        .map(Field3::into_flat)
}

/// Grid dimensions cap at `i32::MAX`, so any clamped coordinate that
/// was altered is out of bounds for every valid grid.
fn clamp_coord(value: u32) -> i32 {
    value.min(i32::MAX as u32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::SEAL_THRESHOLD;

    fn c(x: i32, y: i32, z: i32) -> Cell {
        Cell::new(x, y, z)
    }

    fn reservoir(grid: Grid3) -> Field3<f64> {
        Field3::filled(grid, 1500.0)
    }

    fn layer_depths(nz: u32) -> Vec<f64> {
        (0..nz).map(f64::from).collect()
    }

    // ── Scheduler behaviour ───────────────────────────────────────

    #[test]
    fn source_gets_order_zero() {
        let grid = Grid3::new(2, 2, 2).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(2);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 2,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(1, 1, 0))).unwrap();
        assert_eq!(result.order[c(1, 1, 0)], 0);
        assert_eq!(result.invaded, 8);
    }

    #[test]
    fn fill_order_is_dense() {
        let grid = Grid3::new(3, 2, 2).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(2);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 2,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(0, 0, 0))).unwrap();
        let mut orders: Vec<i32> = result
            .order
            .as_slice()
            .iter()
            .copied()
            .filter(|&o| o != UNFILLED)
            .collect();
        orders.sort_unstable();
        let expected: Vec<i32> = (0..result.invaded as i32).collect();
        assert_eq!(orders, expected);
    }

    #[test]
    fn shallow_layer_fills_before_deep_layer() {
        let grid = Grid3::new(2, 2, 3).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(3);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 3,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(0, 0, 0))).unwrap();
        let order = &result.order;
        // Every z=0 order precedes every z=1 order, and so on down.
        for z in 0..2 {
            let max_shallow = (0..2)
                .flat_map(|x| (0..2).map(move |y| order[c(x, y, z)]))
                .max()
                .unwrap();
            let min_deep = (0..2)
                .flat_map(|x| (0..2).map(move |y| order[c(x, y, z + 1)]))
                .min()
                .unwrap();
            assert!(
                max_shallow < min_deep,
                "layer z={z} must complete before z={} starts",
                z + 1
            );
        }
    }

    #[test]
    fn sealed_cells_block_the_path() {
        // A wall of caprock at z=1 splits the single column.
        let grid = Grid3::new(1, 1, 3).unwrap();
        let mut velocity = reservoir(grid);
        velocity.set(c(0, 0, 1), SEAL_THRESHOLD);
        let depths = layer_depths(3);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 3,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(0, 0, 0))).unwrap();
        assert_eq!(result.invaded, 1);
        assert_eq!(result.order[c(0, 0, 0)], 0);
        assert_eq!(result.order[c(0, 0, 1)], UNFILLED);
        assert_eq!(result.order[c(0, 0, 2)], UNFILLED, "unreachable behind seal");
    }

    #[test]
    fn isolated_source_is_valid_single_cell_fill() {
        let grid = Grid3::new(1, 1, 1).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(1);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 1,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(0, 0, 0))).unwrap();
        assert_eq!(result.invaded, 1);
        let snap = fill(grid, &boundary, Source::Cell(c(0, 0, 0)), 5).unwrap();
        assert_eq!(snap[c(0, 0, 0)], 0);
    }

    #[test]
    fn column_cap_forces_lateral_migration() {
        // Two columns, cap 2: the deep halves of both stay empty.
        let grid = Grid3::new(2, 1, 4).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(4);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 2,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(0, 0, 0))).unwrap();
        assert_eq!(result.invaded, 4);
        for x in 0..2 {
            assert_ne!(result.order[c(x, 0, 0)], UNFILLED);
            assert_ne!(result.order[c(x, 0, 1)], UNFILLED);
            assert_eq!(result.order[c(x, 0, 2)], UNFILLED, "cap refuses column {x}");
            assert_eq!(result.order[c(x, 0, 3)], UNFILLED);
        }
    }

    #[test]
    fn queued_candidates_respect_cap_at_pop_time() {
        // Injecting at the deepest cell of column x=0 with cap 2:
        // (1,0,2) is queued while column x=1 still has room, but the
        // shallower cells (1,0,1) and (1,0,0) saturate that column
        // first, so the queued candidate must be refused when popped.
        let grid = Grid3::new(2, 1, 3).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(3);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 2,
        };
        let result = fill_order(grid, &boundary, Source::Cell(c(0, 0, 2))).unwrap();
        assert_eq!(result.invaded, 4);
        assert_eq!(result.order[c(1, 0, 2)], UNFILLED, "stale candidate refused");
        assert_eq!(result.order[c(0, 0, 0)], UNFILLED);
        for cell in [c(0, 0, 2), c(0, 0, 1), c(1, 0, 1), c(1, 0, 0)] {
            assert_ne!(result.order[cell], UNFILLED);
        }
    }

    // ── Atomic validation ─────────────────────────────────────────

    #[test]
    fn zero_snapshots_fails_before_any_fill() {
        let grid = Grid3::new(2, 2, 2).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(2);
        let boundary = Boundary::VolumeBounded {
            velocity: &velocity,
            depths: &depths,
            max_column_height: 2,
        };
        assert_eq!(
            fill(grid, &boundary, Source::Cell(c(0, 0, 0)), 0),
            Err(ConfigError::InvalidSnapshotCount)
        );
    }

    #[test]
    fn wrapper_source_out_of_bounds() {
        let grid = Grid3::new(2, 2, 2).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(2);
        assert!(matches!(
            fill_volume(&velocity, &depths, 2, (5, 0, 0), 10),
            Err(ConfigError::SourceOutOfBounds { .. })
        ));
    }

    #[test]
    fn wrapper_oversized_source_coordinate() {
        let grid = Grid3::new(2, 2, 2).unwrap();
        let velocity = reservoir(grid);
        let depths = layer_depths(2);
        assert!(matches!(
            fill_volume(&velocity, &depths, 2, (u32::MAX, 0, 0), 10),
            Err(ConfigError::SourceOutOfBounds { .. })
        ));
    }

    #[test]
    fn flat_wrapper_rejects_bad_buffer_length() {
        assert!(matches!(
            fill_volume_flat(&[1500.0; 7], (2, 2, 2), &layer_depths(2), 2, (0, 0, 0), 10),
            Err(ConfigError::Grid(_))
        ));
    }
}
