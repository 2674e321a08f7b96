//! Grid model and field storage for plume simulations.
//!
//! This is the leaf crate of the plume workspace. It defines the
//! discretized reservoir domain ([`Grid3`]), bounds-checked cell
//! addressing with 6-connected neighbour enumeration, and the field
//! storage types ([`Field3`], [`Field2`]) that present the same grid
//! contents through either nested per-axis coordinates or a single
//! flat buffer.
//!
//! No algorithmic decisions live here — the migration engine in
//! `plume-engine` consumes these types read-only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid3;

pub use error::GridError;
pub use field::{Field2, Field3};
pub use grid3::{Cell, Grid3};
