use thiserror::Error;
use voxmorph_morphology::MorphologyError;

use crate::array::HostDtype;

/// Errors reported to the host before or while running an operator.
#[derive(Error, Debug, PartialEq)]
pub enum BindingError {
    /// The operator received the wrong number of arguments.
    #[error("Invalid number of arguments.")]
    ArgumentCount(usize),

    /// The input array does not hold logical values.
    #[error("This function only accepts logicals as input.")]
    NonLogical(HostDtype),

    /// The input array does not have exactly three dimensions.
    #[error("This function requires a 3-D matrix as input.")]
    NotThreeDimensional(usize),

    /// The dimensions describe more elements than `usize` can address.
    #[error("Array dimensions {0:?} overflow the addressable element count")]
    ExtentsOverflow(Vec<usize>),

    /// The array storage does not match its dimensions.
    #[error("Array storage holds {0} elements but its dimensions require {1}")]
    InvalidShape(usize, usize),

    /// The operator itself failed.
    #[error(transparent)]
    Morphology(#[from] MorphologyError),
}
