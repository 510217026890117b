//! A small numerical kernel for finite element computations.
//!
//! The building blocks are fixed-shape [tensors](tensor::Tensor), composable
//! [functions](function::Function) and [fields](field::Field) that carry their derivatives,
//! per-quadrature-point storage in [`QuadratureField`](quadrature_field::QuadratureField)
//! and an [`Integrator`](integrate::Integrator) that integrates fields over a simplex mesh.
pub mod error;
pub mod field;
pub mod function;
pub mod integrate;
pub mod io;
pub mod mesh;
pub mod quadrature;
pub mod quadrature_field;
pub mod tensor;

#[cfg(feature = "proptest-support")]
pub mod proptest;

pub use error::Error;
pub use tessera_traits::Real;

pub extern crate nalgebra;
