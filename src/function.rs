//! Composable functions with value semantics.
//!
//! A [`Function`] wraps a pure rule `X -> Y`. Cloning a function only clones a reference to
//! the (immutable) rule, so functions are cheap to pass around and can be shared between
//! threads. Arithmetic on functions builds new functions that nest the evaluation of their
//! operands, e.g. `(&f + &g).evaluate(x) == f.evaluate(x) + g.evaluate(x)`.
use crate::quadrature_field::QuadratureField;
use crate::tensor::{Dims1, Shape, Tensor, Vector};
use crate::Real;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

/// A pure function `X -> Y`.
pub struct Function<X, Y> {
    rule: Arc<dyn Fn(&X) -> Y + Send + Sync>,
}

/// A scalar function of a point in `D` dimensions.
pub type ScalarFunction<T, const D: usize> = Function<Vector<T, D>, T>;

impl<X, Y> Function<X, Y> {
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(&X) -> Y + Send + Sync + 'static,
    {
        Self { rule: Arc::new(rule) }
    }

    /// A function that returns `value` everywhere.
    pub fn constant(value: Y) -> Self
    where
        Y: Clone + Send + Sync + 'static,
    {
        Self::new(move |_| value.clone())
    }

    pub fn evaluate(&self, x: &X) -> Y {
        (self.rule)(x)
    }

    /// Returns the composition `x -> self(inner(x))`.
    pub fn compose<Z>(&self, inner: &Function<Z, X>) -> Function<Z, Y>
    where
        X: 'static,
        Y: 'static,
        Z: 'static,
    {
        let outer = self.clone();
        let inner = inner.clone();
        Function::new(move |z| outer.evaluate(&inner.evaluate(z)))
    }
}

impl<T, Y, const D: usize> Function<Vector<T, D>, Y>
where
    T: Real,
{
    /// Evaluates the function at every point stored in a quadrature field.
    ///
    /// The results are returned in element-major, quadrature-point-minor order. A single
    /// point buffer is reused for all evaluations.
    pub fn evaluate_quadrature_field<const Q: usize>(&self, points: &QuadratureField<T, Q, Dims1<D>>) -> Vec<Y> {
        let mut x = Vector::zeros();
        points
            .iter()
            .map(|point| {
                x.copy_from(&point);
                self.evaluate(&x)
            })
            .collect()
    }
}

impl<T, S, const D: usize> Function<Vector<T, D>, Tensor<T, S>>
where
    T: Real,
    S: Shape,
{
    /// Samples a tensor-valued function at every point stored in a quadrature field.
    pub fn sample<const Q: usize>(&self, points: &QuadratureField<T, Q, Dims1<D>>) -> QuadratureField<T, Q, S> {
        let mut values = QuadratureField::new(points.num_elements());
        for (mut slot, value) in values
            .iter_mut()
            .zip(self.evaluate_quadrature_field(points))
        {
            slot.copy_from(&value);
        }
        values
    }
}

impl<X, Y> Clone for Function<X, Y> {
    fn clone(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<X, Y> Debug for Function<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").finish_non_exhaustive()
    }
}

impl<X, Y> AsRef<Function<X, Y>> for Function<X, Y> {
    fn as_ref(&self) -> &Function<X, Y> {
        self
    }
}

macro_rules! function_binop_impl {
    ($Op:ident, $op:ident, $symbol:tt) => {
        impl<X, Y> $Op<Function<X, Y>> for Function<X, Y>
        where
            X: 'static,
            Y: $Op<Output = Y> + 'static,
        {
            type Output = Function<X, Y>;

            fn $op(self, rhs: Function<X, Y>) -> Self::Output {
                Function::new(move |x| self.evaluate(x) $symbol rhs.evaluate(x))
            }
        }

        impl<'a, X, Y> $Op<&'a Function<X, Y>> for Function<X, Y>
        where
            X: 'static,
            Y: $Op<Output = Y> + 'static,
        {
            type Output = Function<X, Y>;

            fn $op(self, rhs: &'a Function<X, Y>) -> Self::Output {
                self $symbol rhs.clone()
            }
        }

        impl<'a, X, Y> $Op<Function<X, Y>> for &'a Function<X, Y>
        where
            X: 'static,
            Y: $Op<Output = Y> + 'static,
        {
            type Output = Function<X, Y>;

            fn $op(self, rhs: Function<X, Y>) -> Self::Output {
                self.clone() $symbol rhs
            }
        }

        impl<'a, 'b, X, Y> $Op<&'b Function<X, Y>> for &'a Function<X, Y>
        where
            X: 'static,
            Y: $Op<Output = Y> + 'static,
        {
            type Output = Function<X, Y>;

            fn $op(self, rhs: &'b Function<X, Y>) -> Self::Output {
                self.clone() $symbol rhs.clone()
            }
        }
    };
}

function_binop_impl!(Add, add, +);
function_binop_impl!(Sub, sub, -);
function_binop_impl!(Mul, mul, *);
function_binop_impl!(Div, div, /);

impl<X, Y> Neg for Function<X, Y>
where
    X: 'static,
    Y: Neg<Output = Y> + 'static,
{
    type Output = Function<X, Y>;

    fn neg(self) -> Self::Output {
        Function::new(move |x| -self.evaluate(x))
    }
}

impl<'a, X, Y> Neg for &'a Function<X, Y>
where
    X: 'static,
    Y: Neg<Output = Y> + 'static,
{
    type Output = Function<X, Y>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! function_scalar_binop_impl {
    ($T:ty; $($Op:ident, $op:ident, $symbol:tt);*) => {$(
        impl<X, Y> $Op<$T> for Function<X, Y>
        where
            X: 'static,
            Y: $Op<$T, Output = Y> + 'static,
        {
            type Output = Function<X, Y>;

            fn $op(self, rhs: $T) -> Self::Output {
                Function::new(move |x| self.evaluate(x) $symbol rhs)
            }
        }

        impl<'a, X, Y> $Op<$T> for &'a Function<X, Y>
        where
            X: 'static,
            Y: $Op<$T, Output = Y> + 'static,
        {
            type Output = Function<X, Y>;

            fn $op(self, rhs: $T) -> Self::Output {
                self.clone() $symbol rhs
            }
        }

        impl<X: 'static> $Op<Function<X, $T>> for $T {
            type Output = Function<X, $T>;

            fn $op(self, rhs: Function<X, $T>) -> Self::Output {
                Function::new(move |x| self $symbol rhs.evaluate(x))
            }
        }

        impl<'a, X: 'static> $Op<&'a Function<X, $T>> for $T {
            type Output = Function<X, $T>;

            fn $op(self, rhs: &'a Function<X, $T>) -> Self::Output {
                self $symbol rhs.clone()
            }
        }
    )*};
}

function_scalar_binop_impl!(f32; Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);
function_scalar_binop_impl!(f64; Add, add, +; Sub, sub, -; Mul, mul, *; Div, div, /);

// Scaling of tensor-valued functions from the left
macro_rules! left_scalar_tensor_function_mul_impl {
    ($($T:ty),*) => {$(
        impl<X: 'static, S: Shape> Mul<Function<X, Tensor<$T, S>>> for $T {
            type Output = Function<X, Tensor<$T, S>>;

            fn mul(self, rhs: Function<X, Tensor<$T, S>>) -> Self::Output {
                Function::new(move |x| rhs.evaluate(x) * self)
            }
        }

        impl<'a, X: 'static, S: Shape> Mul<&'a Function<X, Tensor<$T, S>>> for $T {
            type Output = Function<X, Tensor<$T, S>>;

            fn mul(self, rhs: &'a Function<X, Tensor<$T, S>>) -> Self::Output {
                self * rhs.clone()
            }
        }
    )*};
}

left_scalar_tensor_function_mul_impl!(f32, f64);
