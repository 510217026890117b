//! Scalar and vector fields that carry their partial derivatives.
//!
//! A [`Field`] pairs a scalar function of a point with (optionally) its `D` partial
//! derivatives. Arithmetic on fields combines values *and* derivatives, so that e.g. the
//! gradient of `f * g` is available as soon as `f` and `g` carry their own gradients. If any
//! operand lacks derivatives, the result lacks them too, but can still be evaluated.
//!
//! The derivatives supplied by the user are trusted: no attempt is made to check that they
//! are consistent with the value function.
use crate::function::{Function, ScalarFunction};
use crate::tensor::{Matrix, Tensor, Vector};
use crate::{Error, Real};
use std::array;
use std::ops::{Add, Div, Mul, Neg, Sub};

type Derivatives<T, const D: usize> = Option<[ScalarFunction<T, D>; D]>;

/// A scalar function of a point in `D` dimensions together with its partial derivatives.
#[derive(Debug, Clone)]
pub struct Field<T, const D: usize> {
    value: ScalarFunction<T, D>,
    derivatives: Derivatives<T, D>,
}

pub type ScalarField<T, const D: usize> = Field<T, D>;

impl<T: Real, const D: usize> Field<T, D> {
    /// A field without derivatives.
    pub fn new(value: ScalarFunction<T, D>) -> Self {
        Self {
            value,
            derivatives: None,
        }
    }

    /// A field whose `i`-th partial derivative is given by `derivatives[i]`.
    pub fn with_derivatives(value: ScalarFunction<T, D>, derivatives: [ScalarFunction<T, D>; D]) -> Self {
        Self {
            value,
            derivatives: Some(derivatives),
        }
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Vector<T, D>) -> T + Send + Sync + 'static,
    {
        Self::new(Function::new(f))
    }

    pub fn evaluate(&self, x: &Vector<T, D>) -> T {
        self.value.evaluate(x)
    }

    pub fn value(&self) -> &ScalarFunction<T, D> {
        &self.value
    }

    pub fn derivatives(&self) -> Option<&[ScalarFunction<T, D>; D]> {
        self.derivatives.as_ref()
    }

    pub fn has_derivatives(&self) -> bool {
        self.derivatives.is_some()
    }

    /// The partial derivative with respect to the `i`-th coordinate.
    ///
    /// Fails with [`Error::MissingDerivative`] if the field does not carry derivatives.
    ///
    /// # Panics
    ///
    /// An out-of-range index `i >= D` is a contract violation and panics instead of
    /// returning an error.
    pub fn derivative(&self, i: usize) -> Result<&ScalarFunction<T, D>, Error> {
        self.derivatives
            .as_ref()
            .map(|derivatives| &derivatives[i])
            .ok_or(Error::MissingDerivative)
    }

    /// Evaluates the gradient at `x`.
    pub fn gradient(&self, x: &Vector<T, D>) -> Result<Vector<T, D>, Error> {
        let derivatives = self.derivatives().ok_or(Error::MissingDerivative)?;
        Ok(Tensor::from_fn(|i| derivatives[i].evaluate(x)))
    }

    /// The gradient as a vector field.
    ///
    /// Second derivatives are not known, so the components of the returned field carry no
    /// derivatives.
    pub fn gradient_field(&self) -> Result<VectorField<T, D, D>, Error> {
        let derivatives = self.derivatives().ok_or(Error::MissingDerivative)?;
        Ok(VectorField::new(array::from_fn(|i| Field::new(derivatives[i].clone()))))
    }
}

impl<T, const D: usize> AsRef<ScalarFunction<T, D>> for Field<T, D> {
    fn as_ref(&self) -> &ScalarFunction<T, D> {
        &self.value
    }
}

impl<T: Real, const D: usize> From<ScalarFunction<T, D>> for Field<T, D> {
    fn from(value: ScalarFunction<T, D>) -> Self {
        Self::new(value)
    }
}

/// Evaluates the gradient of `field` at `x`.
///
/// Fails with [`Error::MissingDerivative`] if the field does not carry derivatives.
pub fn grad<T: Real, const D: usize>(field: &Field<T, D>, x: &Vector<T, D>) -> Result<Vector<T, D>, Error> {
    field.gradient(x)
}

/// Evaluates the divergence of `field` at `x`.
///
/// Fails with [`Error::MissingDerivative`] if any component does not carry derivatives.
pub fn div<T: Real, const D: usize>(field: &VectorField<T, D, D>, x: &Vector<T, D>) -> Result<T, Error> {
    field.divergence(x)
}

/// Applies `op` to the values of `f`.
fn lift<T, const D: usize>(f: &ScalarFunction<T, D>, op: impl Fn(T) -> T + Send + Sync + 'static) -> ScalarFunction<T, D>
where
    T: Real,
{
    let f = f.clone();
    Function::new(move |x| op(f.evaluate(x)))
}

fn map_derivatives<T: Real, const D: usize>(
    derivatives: &Derivatives<T, D>,
    f: impl Fn(&ScalarFunction<T, D>) -> ScalarFunction<T, D>,
) -> Derivatives<T, D> {
    derivatives
        .as_ref()
        .map(|derivatives| array::from_fn(|i| f(&derivatives[i])))
}

fn zip_derivatives<T: Real, const D: usize>(
    a: &Derivatives<T, D>,
    b: &Derivatives<T, D>,
    f: impl Fn(&ScalarFunction<T, D>, &ScalarFunction<T, D>) -> ScalarFunction<T, D>,
) -> Derivatives<T, D> {
    match (a, b) {
        (Some(a), Some(b)) => Some(array::from_fn(|i| f(&a[i], &b[i]))),
        _ => None,
    }
}

impl<'a, 'b, T: Real, const D: usize> Add<&'b Field<T, D>> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn add(self, rhs: &'b Field<T, D>) -> Self::Output {
        Field {
            value: &self.value + &rhs.value,
            derivatives: zip_derivatives(&self.derivatives, &rhs.derivatives, |a, b| a + b),
        }
    }
}

impl<'a, 'b, T: Real, const D: usize> Sub<&'b Field<T, D>> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn sub(self, rhs: &'b Field<T, D>) -> Self::Output {
        Field {
            value: &self.value - &rhs.value,
            derivatives: zip_derivatives(&self.derivatives, &rhs.derivatives, |a, b| a - b),
        }
    }
}

impl<'a, 'b, T: Real, const D: usize> Mul<&'b Field<T, D>> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn mul(self, rhs: &'b Field<T, D>) -> Self::Output {
        let (f, g) = (&self.value, &rhs.value);
        Field {
            value: f * g,
            derivatives: zip_derivatives(&self.derivatives, &rhs.derivatives, |df, dg| df * g + f * dg),
        }
    }
}

impl<'a, 'b, T: Real, const D: usize> Div<&'b Field<T, D>> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn div(self, rhs: &'b Field<T, D>) -> Self::Output {
        let (f, g) = (&self.value, &rhs.value);
        Field {
            value: f / g,
            derivatives: zip_derivatives(&self.derivatives, &rhs.derivatives, |df, dg| (df * g - f * dg) / (g * g)),
        }
    }
}

macro_rules! forward_field_binop_impl {
    ($Op:ident, $op:ident) => {
        impl<T: Real, const D: usize> $Op<Field<T, D>> for Field<T, D> {
            type Output = Field<T, D>;

            fn $op(self, rhs: Field<T, D>) -> Self::Output {
                (&self).$op(&rhs)
            }
        }

        impl<'a, T: Real, const D: usize> $Op<&'a Field<T, D>> for Field<T, D> {
            type Output = Field<T, D>;

            fn $op(self, rhs: &'a Field<T, D>) -> Self::Output {
                (&self).$op(rhs)
            }
        }

        impl<'a, T: Real, const D: usize> $Op<Field<T, D>> for &'a Field<T, D> {
            type Output = Field<T, D>;

            fn $op(self, rhs: Field<T, D>) -> Self::Output {
                self.$op(&rhs)
            }
        }
    };
}

forward_field_binop_impl!(Add, add);
forward_field_binop_impl!(Sub, sub);
forward_field_binop_impl!(Mul, mul);
forward_field_binop_impl!(Div, div);

impl<'a, T: Real, const D: usize> Neg for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn neg(self) -> Self::Output {
        Field {
            value: -&self.value,
            derivatives: map_derivatives(&self.derivatives, |df| -df),
        }
    }
}

impl<T: Real, const D: usize> Neg for Field<T, D> {
    type Output = Field<T, D>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'a, T: Real, const D: usize> Add<T> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn add(self, rhs: T) -> Self::Output {
        Field {
            value: lift(&self.value, move |v| v + rhs),
            derivatives: self.derivatives.clone(),
        }
    }
}

impl<'a, T: Real, const D: usize> Sub<T> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn sub(self, rhs: T) -> Self::Output {
        Field {
            value: lift(&self.value, move |v| v - rhs),
            derivatives: self.derivatives.clone(),
        }
    }
}

impl<'a, T: Real, const D: usize> Mul<T> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn mul(self, rhs: T) -> Self::Output {
        Field {
            value: lift(&self.value, move |v| v * rhs),
            derivatives: map_derivatives(&self.derivatives, |df| lift(df, move |v| v * rhs)),
        }
    }
}

impl<'a, T: Real, const D: usize> Div<T> for &'a Field<T, D> {
    type Output = Field<T, D>;

    fn div(self, rhs: T) -> Self::Output {
        Field {
            value: lift(&self.value, move |v| v / rhs),
            derivatives: map_derivatives(&self.derivatives, |df| lift(df, move |v| v / rhs)),
        }
    }
}

macro_rules! forward_field_scalar_binop_impl {
    ($($Op:ident, $op:ident);*) => {$(
        impl<T: Real, const D: usize> $Op<T> for Field<T, D> {
            type Output = Field<T, D>;

            fn $op(self, rhs: T) -> Self::Output {
                (&self).$op(rhs)
            }
        }
    )*};
}

forward_field_scalar_binop_impl!(Add, add; Sub, sub; Mul, mul; Div, div);

// Scalars on the left-hand side need concrete types
macro_rules! left_scalar_field_impl {
    ($($T:ty),*) => {$(
        impl<'a, const D: usize> Add<&'a Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn add(self, rhs: &'a Field<$T, D>) -> Self::Output {
                rhs + self
            }
        }

        impl<'a, const D: usize> Sub<&'a Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn sub(self, rhs: &'a Field<$T, D>) -> Self::Output {
                Field {
                    value: lift(&rhs.value, move |v| self - v),
                    derivatives: map_derivatives(&rhs.derivatives, |df| -df),
                }
            }
        }

        impl<'a, const D: usize> Mul<&'a Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn mul(self, rhs: &'a Field<$T, D>) -> Self::Output {
                rhs * self
            }
        }

        impl<'a, const D: usize> Div<&'a Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn div(self, rhs: &'a Field<$T, D>) -> Self::Output {
                // d(a / f) = -a f' / (f f)
                let derivatives = map_derivatives(&rhs.derivatives, |df| {
                    let (f, df) = (rhs.value.clone(), df.clone());
                    Function::new(move |x| {
                        let fx = f.evaluate(x);
                        -self * df.evaluate(x) / (fx * fx)
                    })
                });
                Field {
                    value: lift(&rhs.value, move |v| self / v),
                    derivatives,
                }
            }
        }

        impl<const D: usize> Add<Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn add(self, rhs: Field<$T, D>) -> Self::Output {
                self + &rhs
            }
        }

        impl<const D: usize> Sub<Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn sub(self, rhs: Field<$T, D>) -> Self::Output {
                self - &rhs
            }
        }

        impl<const D: usize> Mul<Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn mul(self, rhs: Field<$T, D>) -> Self::Output {
                self * &rhs
            }
        }

        impl<const D: usize> Div<Field<$T, D>> for $T {
            type Output = Field<$T, D>;

            fn div(self, rhs: Field<$T, D>) -> Self::Output {
                self / &rhs
            }
        }
    )*}
}

left_scalar_field_impl!(f32, f64);

/// A vector-valued field with `N` components, each a [`Field`] of a point in `D` dimensions.
#[derive(Debug, Clone)]
pub struct VectorField<T, const D: usize, const N: usize> {
    components: [Field<T, D>; N],
}

impl<T: Real, const D: usize, const N: usize> VectorField<T, D, N> {
    pub fn new(components: [Field<T, D>; N]) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Field<T, D>; N] {
        &self.components
    }

    pub fn component(&self, i: usize) -> &Field<T, D> {
        &self.components[i]
    }

    pub fn has_derivatives(&self) -> bool {
        self.components.iter().all(Field::has_derivatives)
    }

    pub fn evaluate(&self, x: &Vector<T, D>) -> Vector<T, N> {
        Tensor::from_fn(|i| self.components[i].evaluate(x))
    }

    /// The `N × D` Jacobian matrix at `x`, whose `i`-th row is the gradient of the `i`-th component.
    pub fn jacobian(&self, x: &Vector<T, D>) -> Result<Matrix<T, N, D>, Error> {
        let mut jacobian = Matrix::<T, N, D>::zeros();
        for (i, component) in self.components.iter().enumerate() {
            let derivatives = component.derivatives().ok_or(Error::MissingDerivative)?;
            for (j, derivative) in derivatives.iter().enumerate() {
                jacobian[[i, j]] = derivative.evaluate(x);
            }
        }
        Ok(jacobian)
    }

    /// The vector-valued function evaluating all components.
    pub fn to_function(&self) -> Function<Vector<T, D>, Vector<T, N>> {
        let field = self.clone();
        Function::new(move |x| field.evaluate(x))
    }
}

impl<T: Real, const D: usize> VectorField<T, D, D> {
    /// Evaluates the divergence at `x`, i.e. the trace of the Jacobian.
    pub fn divergence(&self, x: &Vector<T, D>) -> Result<T, Error> {
        let mut divergence = T::zero();
        for (i, component) in self.components.iter().enumerate() {
            divergence += component.derivative(i)?.evaluate(x);
        }
        Ok(divergence)
    }

    /// The divergence as a scalar field without derivatives.
    pub fn divergence_field(&self) -> Result<ScalarField<T, D>, Error> {
        let diagonal = self
            .components
            .iter()
            .enumerate()
            .map(|(i, component)| component.derivative(i).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Field::from_fn(move |x: &Vector<T, D>| {
            diagonal
                .iter()
                .fold(T::zero(), |sum, derivative| sum + derivative.evaluate(x))
        }))
    }
}

macro_rules! vector_field_binop_impl {
    ($Op:ident, $op:ident) => {
        impl<'a, 'b, T: Real, const D: usize, const N: usize> $Op<&'b VectorField<T, D, N>> for &'a VectorField<T, D, N> {
            type Output = VectorField<T, D, N>;

            fn $op(self, rhs: &'b VectorField<T, D, N>) -> Self::Output {
                VectorField::new(array::from_fn(|i| (&self.components[i]).$op(&rhs.components[i])))
            }
        }

        impl<T: Real, const D: usize, const N: usize> $Op<VectorField<T, D, N>> for VectorField<T, D, N> {
            type Output = VectorField<T, D, N>;

            fn $op(self, rhs: VectorField<T, D, N>) -> Self::Output {
                (&self).$op(&rhs)
            }
        }
    };
}

vector_field_binop_impl!(Add, add);
vector_field_binop_impl!(Sub, sub);

impl<'a, T: Real, const D: usize, const N: usize> Mul<T> for &'a VectorField<T, D, N> {
    type Output = VectorField<T, D, N>;

    fn mul(self, rhs: T) -> Self::Output {
        VectorField::new(array::from_fn(|i| &self.components[i] * rhs))
    }
}

impl<T: Real, const D: usize, const N: usize> Mul<T> for VectorField<T, D, N> {
    type Output = VectorField<T, D, N>;

    fn mul(self, rhs: T) -> Self::Output {
        &self * rhs
    }
}
