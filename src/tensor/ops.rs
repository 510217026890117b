//! Arithmetic operators for tensors.
//!
//! Owned operands are updated in place and handed back, borrowed operands are only read.
use super::{Dims1, Dims2, Matrix, Shape, Tensor, Vector};
use crate::Real;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! componentwise_binop_impl {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $symbol:tt) => {
        impl<T, S, B1, B2> $OpAssign<&Tensor<T, S, B2>> for Tensor<T, S, B1>
        where
            T: Real,
            S: Shape,
            B1: AsRef<[T]> + AsMut<[T]>,
            B2: AsRef<[T]>,
        {
            fn $op_assign(&mut self, rhs: &Tensor<T, S, B2>) {
                for (a, b) in self.iter_mut().zip(rhs.iter()) {
                    *a = *a $symbol *b;
                }
            }
        }

        impl<T, S, B1> $OpAssign<Tensor<T, S>> for Tensor<T, S, B1>
        where
            T: Real,
            S: Shape,
            B1: AsRef<[T]> + AsMut<[T]>,
        {
            fn $op_assign(&mut self, rhs: Tensor<T, S>) {
                self.$op_assign(&rhs);
            }
        }

        impl<T, S, B> $Op<&Tensor<T, S, B>> for Tensor<T, S>
        where
            T: Real,
            S: Shape,
            B: AsRef<[T]>,
        {
            type Output = Tensor<T, S>;

            fn $op(mut self, rhs: &Tensor<T, S, B>) -> Self::Output {
                self.$op_assign(rhs);
                self
            }
        }

        impl<T, S> $Op<Tensor<T, S>> for Tensor<T, S>
        where
            T: Real,
            S: Shape,
        {
            type Output = Tensor<T, S>;

            fn $op(mut self, rhs: Tensor<T, S>) -> Self::Output {
                self.$op_assign(&rhs);
                self
            }
        }

        impl<'a, T, S, B> $Op<Tensor<T, S>> for &'a Tensor<T, S, B>
        where
            T: Real,
            S: Shape,
            B: AsRef<[T]>,
        {
            type Output = Tensor<T, S>;

            fn $op(self, mut rhs: Tensor<T, S>) -> Self::Output {
                // Reuse the storage of the temporary right-hand side
                for (b, a) in rhs.iter_mut().zip(self.iter()) {
                    *b = *a $symbol *b;
                }
                rhs
            }
        }

        impl<'a, 'b, T, S, B1, B2> $Op<&'b Tensor<T, S, B2>> for &'a Tensor<T, S, B1>
        where
            T: Real,
            S: Shape,
            B1: AsRef<[T]>,
            B2: AsRef<[T]>,
        {
            type Output = Tensor<T, S>;

            fn $op(self, rhs: &'b Tensor<T, S, B2>) -> Self::Output {
                let (a, b) = (self.as_slice(), rhs.as_slice());
                Tensor::from_fn(|i| a[i] $symbol b[i])
            }
        }
    };
}

componentwise_binop_impl!(Add, add, AddAssign, add_assign, +);
componentwise_binop_impl!(Sub, sub, SubAssign, sub_assign, -);

impl<T: Real, S: Shape> Neg for Tensor<T, S> {
    type Output = Tensor<T, S>;

    fn neg(mut self) -> Self::Output {
        for a in self.iter_mut() {
            *a = -*a;
        }
        self
    }
}

impl<'a, T, S, B> Neg for &'a Tensor<T, S, B>
where
    T: Real,
    S: Shape,
    B: AsRef<[T]>,
{
    type Output = Tensor<T, S>;

    fn neg(self) -> Self::Output {
        let a = self.as_slice();
        Tensor::from_fn(|i| -a[i])
    }
}

macro_rules! scalar_binop_impl {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $symbol:tt) => {
        impl<T, S, B> $OpAssign<T> for Tensor<T, S, B>
        where
            T: Real,
            S: Shape,
            B: AsRef<[T]> + AsMut<[T]>,
        {
            fn $op_assign(&mut self, rhs: T) {
                for a in self.iter_mut() {
                    *a = *a $symbol rhs;
                }
            }
        }

        impl<T: Real, S: Shape> $Op<T> for Tensor<T, S> {
            type Output = Tensor<T, S>;

            fn $op(mut self, rhs: T) -> Self::Output {
                self.$op_assign(rhs);
                self
            }
        }

        impl<'a, T, S, B> $Op<T> for &'a Tensor<T, S, B>
        where
            T: Real,
            S: Shape,
            B: AsRef<[T]>,
        {
            type Output = Tensor<T, S>;

            fn $op(self, rhs: T) -> Self::Output {
                let a = self.as_slice();
                Tensor::from_fn(|i| a[i] $symbol rhs)
            }
        }
    };
}

scalar_binop_impl!(Mul, mul, MulAssign, mul_assign, *);
scalar_binop_impl!(Div, div, DivAssign, div_assign, /);

// Left scalar multiplication cannot be implemented generically over the scalar type
macro_rules! left_scalar_mul_impl {
    ($($T:ty),*) => {$(
        impl<S: Shape> Mul<Tensor<$T, S>> for $T {
            type Output = Tensor<$T, S>;

            fn mul(self, rhs: Tensor<$T, S>) -> Self::Output {
                rhs * self
            }
        }

        impl<'a, S: Shape, B: AsRef<[$T]>> Mul<&'a Tensor<$T, S, B>> for $T {
            type Output = Tensor<$T, S>;

            fn mul(self, rhs: &'a Tensor<$T, S, B>) -> Self::Output {
                rhs * self
            }
        }
    )*}
}

left_scalar_mul_impl!(f32, f64);

fn inner_product<T: Real>(a: &[T], b: &[T]) -> T {
    let mut result = T::zero();
    for (x, y) in a.iter().zip(b) {
        result += *x * *y;
    }
    result
}

impl<'a, 'b, T, B1, B2, const N: usize> Mul<&'b Tensor<T, Dims1<N>, B2>> for &'a Tensor<T, Dims1<N>, B1>
where
    T: Real,
    B1: AsRef<[T]>,
    B2: AsRef<[T]>,
{
    type Output = T;

    fn mul(self, rhs: &'b Tensor<T, Dims1<N>, B2>) -> T {
        inner_product(self.as_slice(), rhs.as_slice())
    }
}

impl<'b, T, B, const N: usize> Mul<&'b Tensor<T, Dims1<N>, B>> for Vector<T, N>
where
    T: Real,
    B: AsRef<[T]>,
{
    type Output = T;

    fn mul(self, rhs: &'b Tensor<T, Dims1<N>, B>) -> T {
        inner_product(self.as_slice(), rhs.as_slice())
    }
}

impl<'a, T, B, const N: usize> Mul<Vector<T, N>> for &'a Tensor<T, Dims1<N>, B>
where
    T: Real,
    B: AsRef<[T]>,
{
    type Output = T;

    fn mul(self, rhs: Vector<T, N>) -> T {
        inner_product(self.as_slice(), rhs.as_slice())
    }
}

impl<T: Real, const N: usize> Mul<Vector<T, N>> for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Vector<T, N>) -> T {
        inner_product(self.as_slice(), rhs.as_slice())
    }
}

impl<'a, 'b, T, B1, B2, const M: usize, const K: usize, const N: usize> Mul<&'b Tensor<T, Dims2<K, N>, B2>>
    for &'a Tensor<T, Dims2<M, K>, B1>
where
    T: Real,
    B1: AsRef<[T]>,
    B2: AsRef<[T]>,
{
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: &'b Tensor<T, Dims2<K, N>, B2>) -> Self::Output {
        Tensor::from_fn(|idx| {
            let (i, j) = (idx / N, idx % N);
            let mut result = T::zero();
            for k in 0..K {
                result += self[[i, k]] * rhs[[k, j]];
            }
            result
        })
    }
}

impl<T: Real, const M: usize, const K: usize, const N: usize> Mul<Matrix<T, K, N>> for Matrix<T, M, K> {
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: Matrix<T, K, N>) -> Self::Output {
        &self * &rhs
    }
}

impl<'a, 'b, T, B1, B2, const M: usize, const N: usize> Mul<&'b Tensor<T, Dims1<N>, B2>>
    for &'a Tensor<T, Dims2<M, N>, B1>
where
    T: Real,
    B1: AsRef<[T]>,
    B2: AsRef<[T]>,
{
    type Output = Vector<T, M>;

    fn mul(self, rhs: &'b Tensor<T, Dims1<N>, B2>) -> Self::Output {
        let rows = self.as_slice();
        Tensor::from_fn(|i| inner_product(&rows[i * N..(i + 1) * N], rhs.as_slice()))
    }
}
