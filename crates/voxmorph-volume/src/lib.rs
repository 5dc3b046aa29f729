#![deny(missing_docs)]
//! Dense 3D voxel volume types

/// voxel volume representation with an x-fastest linear layout.
pub mod volume;

/// Error types for the volume module.
pub mod error;

pub use crate::error::VolumeError;
pub use crate::volume::{Volume, VolumeSize};
