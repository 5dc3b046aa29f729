#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the morphology operators.
pub mod error;

/// binary erosion with the 6-connected structuring element.
pub mod erosion;

/// module containing parallelization utilities.
pub mod parallel;

pub use error::MorphologyError;
pub use erosion::{erode6, erode6_slices, erode6_slices_with};
pub use parallel::{ExecutionStrategy, ParallelError};
