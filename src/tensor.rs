//! Fixed-shape dense tensors with value semantics.
//!
//! A [`Tensor`] is parametrized by its scalar type `T`, a compile-time [`Shape`] and a storage
//! `B`. The default storage `Vec<T>` owns its components. Borrowed storage (`&[T]` or
//! `&mut [T]`) turns a tensor into an *aliasing view* into somebody else's buffer: it never
//! allocates or frees, and writes through a mutable view are immediately visible to the owner.
//!
//! Arithmetic consumes owned operands where possible, so that long expressions such as
//! `&a + &b - &c` only allocate once: the temporary produced by `&a + &b` is updated in place
//! by the subtraction.
use nalgebra::{SMatrix, SVector, Scalar};
use num::Zero;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice;

mod linalg;
mod ops;
mod shape;

pub use shape::*;

/// A dense tensor of compile-time shape `S` with components of type `T` stored in `B`.
pub struct Tensor<T, S, B = Vec<T>> {
    data: B,
    marker: PhantomData<(T, S)>,
}

/// A vector with `N` components.
pub type Vector<T, const N: usize> = Tensor<T, Dims1<N>>;

/// An `M × N` matrix, stored row by row.
pub type Matrix<T, const M: usize, const N: usize> = Tensor<T, Dims2<M, N>>;

/// An `N × N` matrix.
pub type SquareMatrix<T, const N: usize> = Matrix<T, N, N>;

/// A read-only tensor aliasing borrowed storage.
pub type TensorView<'a, T, S> = Tensor<T, S, &'a [T]>;

/// A writable tensor aliasing borrowed storage.
pub type TensorViewMut<'a, T, S> = Tensor<T, S, &'a mut [T]>;

pub type VectorView<'a, T, const N: usize> = TensorView<'a, T, Dims1<N>>;
pub type VectorViewMut<'a, T, const N: usize> = TensorViewMut<'a, T, Dims1<N>>;

impl<T, S, B> Tensor<T, S, B>
where
    S: Shape,
    B: AsRef<[T]>,
{
    /// Wraps existing storage.
    ///
    /// With borrowed storage this creates an aliasing view.
    ///
    /// # Panics
    ///
    /// Panics if the storage does not hold exactly `S::SIZE` components.
    pub fn from_data(data: B) -> Self {
        assert_eq!(
            data.as_ref().len(),
            S::SIZE,
            "Storage length must match the number of tensor components"
        );
        Self {
            data,
            marker: PhantomData,
        }
    }

    /// The extents of the tensor's shape.
    pub fn extents() -> S::Index {
        S::extents()
    }

    /// The total number of components.
    pub fn size(&self) -> usize {
        S::SIZE
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Iterates over the components in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// A read-only view of this tensor's components.
    pub fn view(&self) -> TensorView<'_, T, S> {
        Tensor::from_data(self.as_slice())
    }

    /// Copies the components into a new owned tensor.
    pub fn clone_owned(&self) -> Tensor<T, S>
    where
        T: Clone,
    {
        Tensor::from_data(self.as_slice().to_vec())
    }

    pub fn into_data(self) -> B {
        self.data
    }
}

impl<T, S, B> Tensor<T, S, B>
where
    S: Shape,
    B: AsRef<[T]> + AsMut<[T]>,
{
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// A writable view of this tensor's components.
    pub fn view_mut(&mut self) -> TensorViewMut<'_, T, S> {
        Tensor::from_data(self.as_mut_slice())
    }

    /// Overwrites every component with the corresponding component of `other`.
    ///
    /// This is how a value is assigned *through* a view.
    pub fn copy_from<B2>(&mut self, other: &Tensor<T, S, B2>)
    where
        T: Clone,
        B2: AsRef<[T]>,
    {
        self.as_mut_slice().clone_from_slice(other.as_slice());
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }
}

impl<T, S: Shape> Tensor<T, S> {
    /// # Panics
    ///
    /// Panics if `data.len() != S::SIZE`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_data(data)
    }

    /// Builds a tensor by evaluating `f` at every flat (row-major) index.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_data((0..S::SIZE).map(f).collect())
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone, S: Shape> Tensor<T, S> {
    /// Builds a tensor from its components in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != S::SIZE`.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_data(values.to_vec())
    }
}

impl<T: Zero + Clone, S: Shape> Tensor<T, S> {
    pub fn zeros() -> Self {
        Self::from_data(vec![T::zero(); S::SIZE])
    }
}

impl<T: Zero + Clone, S: Shape> Default for Tensor<T, S> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, S, B: Clone> Clone for Tensor<T, S, B> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, S, B> Debug for Tensor<T, S, B>
where
    T: Debug,
    S: Shape,
    B: AsRef<[T]>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("extents", &S::extents())
            .field("data", &self.as_slice())
            .finish()
    }
}

/// Formats the components as `(a, b, c)`, with rows of the innermost axis separated by `;`,
/// e.g. `(a, b; c, d)` for a 2 × 2 matrix.
impl<T, S, B> Display for Tensor<T, S, B>
where
    T: Display,
    S: Shape,
    B: AsRef<[T]>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                if S::INNER > 0 && i % S::INNER == 0 {
                    write!(f, "; ")?;
                } else {
                    write!(f, ", ")?;
                }
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

impl<T, S, B> Index<usize> for Tensor<T, S, B>
where
    S: Shape,
    B: AsRef<[T]>,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, S, B> IndexMut<usize> for Tensor<T, S, B>
where
    S: Shape,
    B: AsRef<[T]> + AsMut<[T]>,
{
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, S, B, const R: usize> Index<[usize; R]> for Tensor<T, S, B>
where
    S: Shape<Index = [usize; R]>,
    B: AsRef<[T]>,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, index: [usize; R]) -> &T {
        &self.as_slice()[S::offset(index)]
    }
}

impl<T, S, B, const R: usize> IndexMut<[usize; R]> for Tensor<T, S, B>
where
    S: Shape<Index = [usize; R]>,
    B: AsRef<[T]> + AsMut<[T]>,
{
    #[inline(always)]
    fn index_mut(&mut self, index: [usize; R]) -> &mut T {
        &mut self.as_mut_slice()[S::offset(index)]
    }
}

impl<T, S, B1, B2> PartialEq<Tensor<T, S, B2>> for Tensor<T, S, B1>
where
    T: PartialEq,
    S: Shape,
    B1: AsRef<[T]>,
    B2: AsRef<[T]>,
{
    fn eq(&self, other: &Tensor<T, S, B2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S: Shape> Eq for Tensor<T, S> {}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::from_data(Vec::from(values))
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(rows: [[T; N]; M]) -> Self {
        Self::from_data(rows.into_iter().flatten().collect())
    }
}

impl<T: Scalar, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(vector: SVector<T, N>) -> Self {
        Self::from_fn(|i| vector[i].clone())
    }
}

impl<T: Scalar, const M: usize, const N: usize> From<SMatrix<T, M, N>> for Matrix<T, M, N> {
    fn from(matrix: SMatrix<T, M, N>) -> Self {
        Self::from_fn(|k| matrix[(k / N, k % N)].clone())
    }
}

impl<T, B, const N: usize> Tensor<T, Dims1<N>, B>
where
    T: Scalar,
    B: AsRef<[T]>,
{
    pub fn to_svector(&self) -> SVector<T, N> {
        SVector::from_fn(|i, _| self[i].clone())
    }
}

impl<T, B, const M: usize, const N: usize> Tensor<T, Dims2<M, N>, B>
where
    T: Scalar,
    B: AsRef<[T]>,
{
    /// Converts to a (column-major) `nalgebra` matrix with the same entries.
    pub fn to_smatrix(&self) -> SMatrix<T, M, N> {
        SMatrix::from_fn(|i, j| self[[i, j]].clone())
    }
}

/// Tensors serialize as the flat sequence of their components.
impl<T, S, B> Serialize for Tensor<T, S, B>
where
    T: Serialize,
    S: Shape,
    B: AsRef<[T]>,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, S> Deserialize<'de> for Tensor<T, S>
where
    T: Deserialize<'de>,
    S: Shape,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        if data.len() != S::SIZE {
            return Err(D::Error::invalid_length(
                data.len(),
                &format!("a sequence of {} tensor components", S::SIZE).as_str(),
            ));
        }
        Ok(Self::from_data(data))
    }
}
