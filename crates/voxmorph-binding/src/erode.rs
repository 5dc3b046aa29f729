use voxmorph_morphology::{erode6_slices_with, ExecutionStrategy};

use crate::array::{volume_size, HostArray};
use crate::error::BindingError;

/// How the border voxels of a freshly allocated output are initialised.
///
/// The erosion kernel only writes interior voxels, so this choice is what the
/// caller sees on the faces of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderFill {
    /// Border voxels are `false`, as a zero-initialised host allocation would be.
    #[default]
    False,
    /// Border voxels are copied from the input.
    CopyInput,
}

/// Options for [`erode06_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErodeOptions {
    /// Initial value of the output border.
    pub border: BorderFill,
    /// How the kernel is executed.
    pub strategy: ExecutionStrategy,
}

fn reject(err: BindingError) -> BindingError {
    log::debug!("erode06 rejected its arguments: {err:?}");
    err
}

/// Erode a logical 3D host array with the 6-connected structuring element.
///
/// Uses [`ErodeOptions::default`]: a `false` border and the default execution
/// strategy.
///
/// # Arguments
///
/// * `args` - The host arguments. Exactly one logical, three dimensional array.
///
/// # Returns
///
/// A new logical array with the same dimensions as the input.
///
/// # Examples
///
/// ```
/// use voxmorph_binding::{erode06, HostArray};
///
/// let input = HostArray::logical(vec![3, 3, 3], vec![true; 27]);
/// let output = erode06(&[input]).unwrap();
///
/// assert_eq!(output.dims(), &[3, 3, 3]);
/// let data = output.as_logical().unwrap();
/// assert_eq!(data.iter().filter(|&&b| b).count(), 1);
/// assert!(data[13]);
/// ```
pub fn erode06(args: &[HostArray]) -> Result<HostArray, BindingError> {
    erode06_with(args, &ErodeOptions::default())
}

/// Erode a logical 3D host array with explicit options.
///
/// The arguments are checked in order: argument count, element type, number of
/// dimensions, addressable extents, then storage length. Nothing is computed
/// unless every check passes.
///
/// # Errors
///
/// * [`BindingError::ArgumentCount`] if `args` does not hold exactly one array.
/// * [`BindingError::NonLogical`] if the array is not logical.
/// * [`BindingError::NotThreeDimensional`] if the array does not have three dimensions.
/// * [`BindingError::ExtentsOverflow`] if the element count does not fit in `usize`.
/// * [`BindingError::InvalidShape`] if the storage does not match the dimensions.
/// * [`BindingError::Morphology`] if the execution strategy cannot be honoured.
pub fn erode06_with(
    args: &[HostArray],
    options: &ErodeOptions,
) -> Result<HostArray, BindingError> {
    let [input] = args else {
        return Err(reject(BindingError::ArgumentCount(args.len())));
    };

    let src = input
        .as_logical()
        .ok_or_else(|| reject(BindingError::NonLogical(input.dtype())))?;

    let size = volume_size(input.dims())
        .ok_or_else(|| reject(BindingError::NotThreeDimensional(input.ndims())))?;

    // checked left to right, so the z-slice length nx * ny is covered as well
    let num_voxels = input
        .num_elements()
        .ok_or_else(|| reject(BindingError::ExtentsOverflow(input.dims().to_vec())))?;

    if src.len() != num_voxels {
        return Err(reject(BindingError::InvalidShape(src.len(), num_voxels)));
    }

    let mut dst = match options.border {
        BorderFill::False => vec![false; num_voxels],
        BorderFill::CopyInput => src.to_vec(),
    };

    erode6_slices_with(src, &mut dst, size, options.strategy)?;

    Ok(HostArray::logical(input.dims().to_vec(), dst))
}
