use crate::volume::VolumeSize;

/// An error type for the volume module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VolumeError {
    /// Error when the data length does not match the volume extents.
    #[error("Data length ({0}) does not match the volume size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the number of voxels does not fit in `usize`.
    #[error("Extents of {0} overflow the addressable voxel count")]
    ExtentsOverflow(VolumeSize),

    /// Error when a coordinate lies outside the volume.
    #[error("Voxel ({x}, {y}, {z}) is out of bounds for {size}")]
    OutOfBounds {
        /// x coordinate
        x: usize,
        /// y coordinate
        y: usize,
        /// z coordinate
        z: usize,
        /// extents of the volume
        size: VolumeSize,
    },
}
