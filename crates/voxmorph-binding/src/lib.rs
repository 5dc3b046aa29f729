#![deny(missing_docs)]
//! Host array adapter for the voxmorph operators
//!
//! A host environment hands over dynamically typed arrays. This crate checks
//! them against the contract of each operator, allocates the result and runs
//! the kernel.

/// dynamically typed arrays exchanged with the host.
pub mod array;

/// error types reported back to the host.
pub mod error;

/// the erosion entry point.
pub mod erode;

pub use array::{HostArray, HostData, HostDtype};
pub use error::BindingError;
pub use erode::{erode06, erode06_with, BorderFill, ErodeOptions};
