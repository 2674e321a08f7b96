//! Benchmark scenarios and utilities for the Plume migration simulator.
//!
//! Provides seeded, reproducible reservoir models at two scales:
//!
//! - [`reference_reservoir`]: 64x64x32 grid (~131K cells), 20% seal
//! - [`stress_reservoir`]: 128x128x64 grid (~1M cells), 20% seal
//! - [`reference_topography`]: undulating sealing surface for the
//!   surface-bounded mode

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plume_grid::{Field2, Field3, Grid3};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Seismic velocity assigned to permeable reservoir cells.
pub const RESERVOIR_VELOCITY: f64 = 1500.0;

/// Seismic velocity assigned to sealing caprock cells.
pub const CAPROCK_VELOCITY: f64 = 2607.0;

/// Vertical spacing between grid layers, in metres.
pub const LAYER_SPACING: f64 = 5.0;

/// Per-layer depths for a grid of `nz` layers, shallowest first.
pub fn layer_depths(nz: u32) -> Vec<f64> {
    (0..nz).map(|z| f64::from(z) * LAYER_SPACING).collect()
}

/// A seeded velocity field where `seal_fraction` of cells are caprock.
///
/// The same seed always yields the same field, so benchmark runs are
/// comparable across machines and commits.
pub fn random_velocity(grid: Grid3, seed: u64, seal_fraction: f64) -> Field3<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values: Vec<f64> = (0..grid.cell_count())
        .map(|_| {
            if rng.random::<f64>() < seal_fraction {
                CAPROCK_VELOCITY
            } else {
                RESERVOIR_VELOCITY
            }
        })
        .collect();
    Field3::from_flat(grid, values).expect("generated buffer matches the grid")
}

/// Reference volumetric scenario: 64x64x32 cells, 20% seal.
pub fn reference_reservoir() -> (Field3<f64>, Vec<f64>) {
    let grid = Grid3::new(64, 64, 32).expect("static dimensions are valid");
    (random_velocity(grid, 0xC0FFEE, 0.2), layer_depths(32))
}

/// Stress volumetric scenario: 128x128x64 cells (~1M), 20% seal.
pub fn stress_reservoir() -> (Field3<f64>, Vec<f64>) {
    let grid = Grid3::new(128, 128, 64).expect("static dimensions are valid");
    (random_velocity(grid, 0xC0FFEE, 0.2), layer_depths(64))
}

/// Reference surface scenario: a gently undulating seal over a
/// 256x256 site with 32 layers above it.
pub fn reference_topography() -> (Field2<f64>, Vec<f64>) {
    let depths = layer_depths(32);
    let deepest = *depths.last().expect("at least one layer");
    let mut rng = ChaCha8Rng::seed_from_u64(0xBA5E);
    let values: Vec<f64> = (0..256 * 256)
        .map(|_| deepest + rng.random_range(-2.0 * LAYER_SPACING..=2.0 * LAYER_SPACING))
        .collect();
    let topography = Field2::from_flat(256, 256, values).expect("buffer matches dimensions");
    (topography, depths)
}
