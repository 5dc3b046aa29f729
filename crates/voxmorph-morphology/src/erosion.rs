use voxmorph_volume::{Volume, VolumeSize};

use crate::error::MorphologyError;
use crate::parallel::{self, ExecutionStrategy};

/// Erode the interior voxels of one z-slice.
///
/// `plane` is the destination slice for `z`, i.e. the `nx * ny` voxels starting at
/// `size.idx(0, 0, z)`. Requires `1 <= z < nz - 1` and every extent to be at least 3.
fn erode6_plane(plane: &mut [bool], src: &[bool], size: VolumeSize, z: usize) {
    let [s0, s1, s2] = size.strides();
    let offset = z * s2;

    for y in 1..size.ny - 1 {
        for x in 1..size.nx - 1 {
            let v = size.idx(x, y, z);
            plane[v - offset] = src[v]
                & src[v - s0]
                & src[v + s0]
                & src[v - s1]
                & src[v + s1]
                & src[v - s2]
                & src[v + s2];
        }
    }
}

/// Binary erosion of raw voxel buffers with the 6-connected structuring element.
///
/// Every interior voxel of `dst` is set to the logical AND of the matching voxel of
/// `src` and its six face neighbours. Voxels on the border of the volume are never
/// written, so they keep whatever value `dst` held before the call. If any extent is
/// smaller than 3 there is no interior and `dst` is left untouched.
///
/// # Arguments
///
/// * `src` - The input buffer, laid out as described by `size`.
/// * `dst` - The output buffer, laid out as described by `size`.
/// * `size` - The extents shared by both buffers.
///
/// # Panics
///
/// Panics if either buffer does not hold exactly `size.num_voxels()` voxels, which
/// includes extents whose voxel count overflows `usize`.
///
/// # Examples
///
/// ```
/// use voxmorph_morphology::erode6_slices;
/// use voxmorph_volume::VolumeSize;
///
/// let size = VolumeSize { nx: 3, ny: 3, nz: 3 };
/// let src = vec![true; 27];
/// let mut dst = vec![false; 27];
///
/// erode6_slices(&src, &mut dst, size);
///
/// assert!(dst[size.idx(1, 1, 1)]);
/// assert_eq!(dst.iter().filter(|&&b| b).count(), 1);
/// ```
pub fn erode6_slices(src: &[bool], dst: &mut [bool], size: VolumeSize) {
    let num_voxels = size.checked_num_voxels();
    assert_eq!(Some(src.len()), num_voxels, "source length mismatch");
    assert_eq!(Some(dst.len()), num_voxels, "destination length mismatch");

    if !size.has_interior() {
        return;
    }

    let plane_len = size.strides()[2];
    for z in 1..size.nz - 1 {
        let plane = &mut dst[z * plane_len..(z + 1) * plane_len];
        erode6_plane(plane, src, size, z);
    }
}

/// Binary erosion of raw voxel buffers with a configurable execution strategy.
///
/// Same semantics as [`erode6_slices`], but the buffer lengths are checked and
/// reported as errors, and the interior z-slices are processed according to
/// `strategy`.
///
/// # Errors
///
/// Returns [`MorphologyError::ExtentsOverflow`] if the voxel count of `size` does
/// not fit in `usize`, [`MorphologyError::InvalidBufferLength`] if either buffer
/// does not hold `size.num_voxels()` voxels, or [`MorphologyError::Parallel`] if
/// the strategy cannot be executed.
pub fn erode6_slices_with(
    src: &[bool],
    dst: &mut [bool],
    size: VolumeSize,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError> {
    let num_voxels = size
        .checked_num_voxels()
        .ok_or(MorphologyError::ExtentsOverflow(size))?;
    for len in [src.len(), dst.len()] {
        if len != num_voxels {
            return Err(MorphologyError::InvalidBufferLength(len, num_voxels));
        }
    }

    log::debug!("erode6 on {size} with {strategy:?}");

    if !size.has_interior() {
        log::trace!("erode6: {size} has no interior voxels");
        return Ok(());
    }

    parallel::par_iter_interior_slices(
        dst,
        size.strides()[2],
        size.nz,
        strategy,
        |z, plane| erode6_plane(plane, src, size, z),
    )?;

    Ok(())
}

/// Binary erosion of a volume with the 6-connected structuring element.
///
/// Validated counterpart of [`erode6_slices`]: the volumes must share the same
/// extents, and the interior z-slices are processed according to `strategy`.
/// Border voxels of `dst` are left as they were.
///
/// # Arguments
///
/// * `src` - The input volume.
/// * `dst` - The output volume, already allocated with the same extents.
/// * `strategy` - The execution strategy.
///
/// # Errors
///
/// Returns [`MorphologyError::SizeMismatch`] if the extents differ, or
/// [`MorphologyError::Parallel`] if the strategy cannot be executed.
///
/// # Examples
///
/// ```
/// use voxmorph_morphology::{erode6, ExecutionStrategy};
/// use voxmorph_volume::{Volume, VolumeSize};
///
/// let size = VolumeSize { nx: 5, ny: 5, nz: 5 };
/// let mut src = Volume::from_size_val(size, true);
/// src.set(2, 2, 2, false).unwrap();
///
/// let mut dst = Volume::from_size_val(size, false);
/// erode6(&src, &mut dst, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.get(2, 2, 2), Some(&false));
/// assert_eq!(dst.get(1, 2, 2), Some(&false));
/// assert_eq!(dst.get(1, 1, 2), Some(&true));
/// ```
pub fn erode6(
    src: &Volume<bool>,
    dst: &mut Volume<bool>,
    strategy: ExecutionStrategy,
) -> Result<(), MorphologyError> {
    let size = src.size();
    if size != dst.size() {
        return Err(MorphologyError::SizeMismatch(size, dst.size()));
    }

    erode6_slices_with(src.as_slice(), dst.as_slice_mut(), size, strategy)
}
