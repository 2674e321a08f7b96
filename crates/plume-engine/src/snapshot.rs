//! Snapshot quantization: fill orders to playback frames.
//!
//! The migration engine records a dense fill order in `[0, K)`. For
//! animation playback that resolution is excessive, so the order space
//! is compressed onto `total_snapshots` frames with the floor mapping
//! `frame = order * total_snapshots / K`. The mapping preserves
//! ordering: an earlier-invaded cell never lands on a later frame.

use crate::error::ConfigError;
use plume_grid::Field3;

/// Sentinel for cells never invaded by CO2.
pub const UNFILLED: i32 = -1;

/// Quantize a fill-order field into `total_snapshots` frames.
///
/// `invaded` is the number of invaded cells `K`; every non-negative
/// order in the field must lie in `[0, K)`. Unfilled cells (-1) pass
/// through unchanged. Returns [`ConfigError::InvalidSnapshotCount`]
/// when `total_snapshots` is zero.
///
/// Degenerate inputs are valid: `invaded <= 1` maps every invaded cell
/// to frame 0 without division faults.
pub fn quantize(
    order: &Field3<i32>,
    invaded: usize,
    total_snapshots: u32,
) -> Result<Field3<i32>, ConfigError> {
    if total_snapshots == 0 {
        return Err(ConfigError::InvalidSnapshotCount);
    }
    let divisor = invaded.max(1) as u64;
    let total = u64::from(total_snapshots);
    let last_frame = (total_snapshots - 1) as i32;

    let mut snapshots = order.clone();
    for value in snapshots.values_mut() {
        if *value != UNFILLED {
            let frame = (*value as u64 * total / divisor) as i32;
            *value = frame.min(last_frame);
        }
    }
    Ok(snapshots)
}

/// Occupancy reconstruction for a chosen playback frame.
///
/// A cell is CO2-occupied at `frame` if it was invaded on that frame or
/// any earlier one. Consumed by rendering collaborators that overlay
/// the plume on the property grid.
pub fn occupancy_at(snapshots: &Field3<i32>, frame: i32) -> Field3<bool> {
    let mut occupied = Field3::filled(snapshots.grid(), false);
    for (flag, &s) in occupied.values_mut().zip(snapshots.as_slice()) {
        *flag = s != UNFILLED && s <= frame;
    }
    occupied
}
