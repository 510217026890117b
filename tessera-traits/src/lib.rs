use nalgebra::RealField;

pub use nalgebra;

/// A real scalar that tensors, fields and integrators can compute with.
///
/// Implemented for every `Copy` type satisfying [`RealField`], in practice `f32` and `f64`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
