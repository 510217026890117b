//! Storage of tensor-valued data at the quadrature points of a set of elements.
use crate::tensor::{Shape, Tensor, TensorView, TensorViewMut};
use num::Zero;
use std::marker::PhantomData;

/// A dense collection of tensors of shape `S`, one per quadrature point of every element.
///
/// Every element has exactly `Q` quadrature points. The data is stored in a single contiguous
/// buffer laid out as `(element, quadrature point, component)` in row-major order, and the
/// slot of a given quadrature point is exposed as a [`TensorView`] (or [`TensorViewMut`])
/// aliasing the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureField<T, const Q: usize, S> {
    num_elements: usize,
    data: Vec<T>,
    name: String,
    marker: PhantomData<S>,
}

impl<T, const Q: usize, S> QuadratureField<T, Q, S>
where
    T: Zero + Clone,
    S: Shape,
{
    /// Creates a zero-initialized quadrature field for the given number of elements.
    pub fn new(num_elements: usize) -> Self {
        Self {
            num_elements,
            data: vec![T::zero(); num_elements * Q * S::SIZE],
            name: String::new(),
            marker: PhantomData,
        }
    }

    /// Sets every component of every slot to zero.
    pub fn initialize(&mut self) {
        self.data.fill(T::zero());
    }
}

impl<T, const Q: usize, S: Shape> QuadratureField<T, Q, S> {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    pub fn num_quadrature_points(&self) -> usize {
        Q
    }

    /// The number of components stored at every quadrature point.
    pub fn value_size(&self) -> usize {
        S::SIZE
    }

    fn slot_range(&self, e: usize, q: usize) -> std::ops::Range<usize> {
        debug_assert!(e < self.num_elements && q < Q);
        let begin = (e * Q + q) * S::SIZE;
        begin..begin + S::SIZE
    }

    /// A read-only view of the data stored at quadrature point `q` of element `e`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is out of bounds. An out-of-bounds `q` is only detected in debug builds
    /// (or when the resulting offset lies beyond the last element).
    pub fn slot(&self, e: usize, q: usize) -> TensorView<'_, T, S> {
        let range = self.slot_range(e, q);
        Tensor::from_data(&self.data[range])
    }

    /// A writable view of the data stored at quadrature point `q` of element `e`.
    ///
    /// Writes through the view are visible to every later read of the same slot.
    ///
    /// # Panics
    ///
    /// Same as [`slot`](Self::slot).
    pub fn slot_mut(&mut self, e: usize, q: usize) -> TensorViewMut<'_, T, S> {
        let range = self.slot_range(e, q);
        Tensor::from_data(&mut self.data[range])
    }

    /// Iterates over all slots, element by element and quadrature point by quadrature point.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TensorView<'_, T, S>> {
        self.data.chunks_exact(S::SIZE).map(Tensor::from_data)
    }

    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = TensorViewMut<'_, T, S>> {
        self.data.chunks_exact_mut(S::SIZE).map(Tensor::from_data)
    }

    /// The raw buffer, laid out as `(element, quadrature point, component)`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}
