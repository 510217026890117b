//! Strategies for generating tensors with `proptest`.
use crate::tensor::{Matrix, Shape, SquareMatrix, Tensor, Vector};
use ::proptest::collection::vec;
use ::proptest::prelude::*;
use std::ops::Range;

/// Tensors with components drawn from the given range.
pub fn tensor<S: Shape>(range: Range<f64>) -> impl Strategy<Value = Tensor<f64, S>> {
    vec(range, S::SIZE).prop_map(Tensor::from_vec)
}

pub fn vector<const N: usize>() -> impl Strategy<Value = Vector<f64, N>> {
    // Pick a reasonably small range so that sums and products stay well within f64
    tensor(-10.0..10.0)
}

pub fn matrix<const M: usize, const N: usize>() -> impl Strategy<Value = Matrix<f64, M, N>> {
    tensor(-10.0..10.0)
}

/// Strictly diagonally dominant, and therefore invertible, square matrices.
pub fn invertible_matrix<const N: usize>() -> impl Strategy<Value = SquareMatrix<f64, N>> {
    tensor(-1.0..1.0).prop_map(|mut a: SquareMatrix<f64, N>| {
        for i in 0..N {
            let sign = if a[[i, i]] < 0.0 { -1.0 } else { 1.0 };
            a[[i, i]] += sign * N as f64;
        }
        a
    })
}
