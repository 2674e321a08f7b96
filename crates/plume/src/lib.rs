//! Plume: a deterministic CO2 migration simulator for voxel reservoir grids.
//!
//! Injected CO2 is buoyant: it rises through permeable rock and spreads
//! along sealing surfaces. Plume models that migration as a
//! buoyancy-ordered flood fill over a 3D grid and reports, for every
//! invaded cell, the snapshot frame at which the plume reaches it.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Plume sub-crates. For most users, adding `plume` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plume::prelude::*;
//!
//! // A 3x3 site where the sealing surface sits 10 m down everywhere,
//! // with three grid layers above it at 2 m, 5 m, and 8 m depth.
//! let topography = Field2::filled(3, 3, 10.0).unwrap();
//! let depths = vec![2.0, 5.0, 8.0];
//!
//! // Inject below the centre column, render 3 snapshot frames.
//! let snapshots = fill_surface(&topography, &depths, (1, 1), 3).unwrap();
//!
//! // Injection enters at the deepest cell of the source column and the
//! // buoyant gas rises, so that whole column lands on the first frame.
//! assert_eq!(snapshots[Cell::new(1, 1, 2)], 0);
//! assert_eq!(snapshots[Cell::new(1, 1, 0)], 0);
//!
//! // Deep cells far from the source are reached last.
//! assert_eq!(snapshots[Cell::new(0, 0, 2)], 2);
//!
//! // Cells the plume never reaches would hold `UNFILLED` (-1); here
//! // every cell is reachable.
//! assert!(snapshots.as_slice().iter().all(|&s| s != UNFILLED));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `plume-grid` | [`grid::Grid3`], [`grid::Cell`], dense field storage |
//! | [`engine`] | `plume-engine` | Fill algorithm, boundary models, snapshot quantizer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid model and dense field storage (`plume-grid`).
///
/// Provides [`grid::Grid3`] with its flat-index layout, [`grid::Cell`]
/// coordinates, and the [`grid::Field3`]/[`grid::Field2`] containers that
/// accept both flat and nested input.
pub use plume_grid as grid;

/// Migration engine and snapshot quantizer (`plume-engine`).
///
/// The entry points [`engine::fill_surface`], [`engine::fill_volume`],
/// and [`engine::fill_volume_flat`] cover typical usage; the lower-level
/// [`engine::fill_order`] exposes the raw invasion ordering.
pub use plume_engine as engine;

/// Common imports for typical Plume usage.
///
/// ```rust
/// use plume::prelude::*;
/// ```
pub mod prelude {
    // Grid and fields
    pub use plume_grid::{Cell, Field2, Field3, Grid3, GridError};

    // Engine entry points and knobs
    pub use plume_engine::{
        fill, fill_order, fill_surface, fill_volume, fill_volume_flat, occupancy_at, quantize,
        Boundary, ConfigError, FillOrder, Source, DEFAULT_TOTAL_SNAPSHOTS, SEAL_THRESHOLD,
        UNFILLED,
    };
}
