//! Closed-form linear algebra for small vectors and matrices.
use super::{Dims1, Dims2, Matrix, SquareMatrix, Tensor};
use crate::{Error, Real};

impl<T, B, const N: usize> Tensor<T, Dims1<N>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    /// The inner product with another vector.
    pub fn dot<B2: AsRef<[T]>>(&self, other: &Tensor<T, Dims1<N>, B2>) -> T {
        self * other
    }

    pub fn norm_squared(&self) -> T {
        self * self
    }

    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }
}

impl<T, B, const M: usize, const N: usize> Tensor<T, Dims2<M, N>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    pub fn transpose(&self) -> Matrix<T, N, M> {
        Tensor::from_fn(|idx| self[[idx % M, idx / M]])
    }
}

impl<T, B, const N: usize> Tensor<T, Dims2<N, N>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    pub fn trace(&self) -> T {
        let mut trace = T::zero();
        for i in 0..N {
            trace += self[[i, i]];
        }
        trace
    }
}

impl<T: Real, const N: usize> SquareMatrix<T, N> {
    pub fn identity() -> Self {
        Tensor::from_fn(|idx| if idx / N == idx % N { T::one() } else { T::zero() })
    }
}

impl<T, B> Tensor<T, Dims2<2, 2>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    pub fn determinant(&self) -> T {
        let a = self.as_slice();
        a[0] * a[3] - a[1] * a[2]
    }

    /// Computes the inverse by cofactor expansion.
    ///
    /// Fails with [`Error::SingularMatrix`] if and only if the determinant is exactly zero.
    /// Nearly singular matrices are inverted without complaint.
    pub fn try_inverse(&self) -> Result<SquareMatrix<T, 2>, Error> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(Error::SingularMatrix);
        }

        let a = self.as_slice();
        let det_inv = T::one() / det;
        Ok(Tensor::from_vec(vec![
            det_inv * a[3],
            det_inv * -a[1],
            det_inv * -a[2],
            det_inv * a[0],
        ]))
    }
}

impl<T, B> Tensor<T, Dims2<3, 3>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    pub fn determinant(&self) -> T {
        let a = self.as_slice();
        a[0] * (a[4] * a[8] - a[5] * a[7]) - a[1] * (a[3] * a[8] - a[5] * a[6]) + a[2] * (a[3] * a[7] - a[4] * a[6])
    }

    /// Computes the inverse by cofactor expansion.
    ///
    /// Fails with [`Error::SingularMatrix`] if and only if the determinant is exactly zero.
    /// Nearly singular matrices are inverted without complaint.
    #[rustfmt::skip]
    pub fn try_inverse(&self) -> Result<SquareMatrix<T, 3>, Error> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(Error::SingularMatrix);
        }

        let a = self.as_slice();
        let det_inv = T::one() / det;
        Ok(Tensor::from_vec(vec![
            det_inv * (a[4] * a[8] - a[5] * a[7]),
            det_inv * (a[2] * a[7] - a[1] * a[8]),
            det_inv * (a[1] * a[5] - a[2] * a[4]),
            det_inv * (a[5] * a[6] - a[3] * a[8]),
            det_inv * (a[0] * a[8] - a[2] * a[6]),
            det_inv * (a[2] * a[3] - a[0] * a[5]),
            det_inv * (a[3] * a[7] - a[4] * a[6]),
            det_inv * (a[1] * a[6] - a[0] * a[7]),
            det_inv * (a[0] * a[4] - a[1] * a[3]),
        ]))
    }
}

impl<T, B> Tensor<T, Dims2<4, 4>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    /// Computes the determinant by Laplace expansion along the first row.
    pub fn determinant(&self) -> T {
        let a = self.as_slice();
        // 2 × 2 minors of the bottom two rows, indexed by their column pair
        let minor = |i: usize, j: usize| a[8 + i] * a[12 + j] - a[8 + j] * a[12 + i];
        let (m01, m02, m03) = (minor(0, 1), minor(0, 2), minor(0, 3));
        let (m12, m13, m23) = (minor(1, 2), minor(1, 3), minor(2, 3));

        let c0 = a[5] * m23 - a[6] * m13 + a[7] * m12;
        let c1 = a[4] * m23 - a[6] * m03 + a[7] * m02;
        let c2 = a[4] * m13 - a[5] * m03 + a[7] * m01;
        let c3 = a[4] * m12 - a[5] * m02 + a[6] * m01;

        a[0] * c0 - a[1] * c1 + a[2] * c2 - a[3] * c3
    }
}
