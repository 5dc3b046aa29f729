use thiserror::Error;
use voxmorph_volume::VolumeSize;

use crate::parallel::ParallelError;

/// Errors related to morphological operations.
#[derive(Error, Debug, PartialEq)]
pub enum MorphologyError {
    /// Source and destination volumes have different extents.
    #[error("source size {0} does not match destination size {1}")]
    SizeMismatch(VolumeSize, VolumeSize),

    /// The voxel count of the extents does not fit in `usize`.
    #[error("extents of {0} overflow the addressable voxel count")]
    ExtentsOverflow(VolumeSize),

    /// A raw voxel buffer does not hold one element per voxel.
    #[error("buffer holds {0} voxels but the volume has {1}")]
    InvalidBufferLength(usize, usize),

    /// The execution strategy could not be honoured.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
