//! Buoyancy-ordered CO2 migration engine.
//!
//! Given a discretized reservoir domain, boundary data, and a single
//! injection source, the engine computes a deterministic fill order —
//! the global sequence in which cells become CO2-occupied — and
//! compresses it into a fixed number of snapshots for playback.
//!
//! Two domain shapes share one frontier scheduler:
//!
//! - [`fill_surface`]: depth/topography-bounded fill from an `(x, y)`
//!   injection column.
//! - [`fill_volume`] / [`fill_volume_flat`]: full 3D property grid
//!   classified against a seal threshold, with a per-column capacity
//!   cap; the flat variant is numerically identical to the nested one.
//!
//! All entry points are pure functions: inputs are borrowed read-only,
//! the snapshot grid is newly allocated and returned, and configuration
//! errors are reported atomically before any expansion begins. This is
//! a topology-aware flood-fill approximation, not a multiphase flow
//! solver — its only guarantee is a consistent, reproducible partial
//! order of cell invasion.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod fill;
pub mod frontier;
pub mod snapshot;

pub use boundary::{Boundary, Source, SEAL_THRESHOLD};
pub use error::ConfigError;
pub use fill::{
    fill, fill_order, fill_surface, fill_volume, fill_volume_flat, FillOrder,
    DEFAULT_TOTAL_SNAPSHOTS,
};
pub use snapshot::{occupancy_at, quantize, UNFILLED};
