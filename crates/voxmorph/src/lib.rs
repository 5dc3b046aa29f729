#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use voxmorph_volume as volume;

#[doc(inline)]
pub use voxmorph_morphology as morphology;

#[doc(inline)]
pub use voxmorph_binding as binding;
