use std::fmt::Debug;

/// A compile-time tensor shape.
///
/// Implementors are zero-sized markers whose extents are const generic parameters, so that
/// two tensors can only be combined when their shapes agree at the type level. Components
/// are laid out contiguously in row-major order.
pub trait Shape: Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Number of axes.
    const RANK: usize;
    /// Total number of components, i.e. the product of all extents.
    const SIZE: usize;
    /// Extent of the innermost (fastest varying) axis.
    const INNER: usize;

    /// Multi-index type, one entry per axis.
    type Index: Copy + Debug + PartialEq;

    /// The extents of every axis.
    fn extents() -> Self::Index;

    /// Maps a multi-index to the offset of the component in row-major storage.
    ///
    /// Indices are only checked in debug builds; out-of-range multi-indices may produce an
    /// offset belonging to another component (or beyond the storage, which then panics).
    fn offset(index: Self::Index) -> usize;
}

/// Shape of a vector with `N` components.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dims1<const N: usize>;

/// Shape of an `M × N` matrix.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dims2<const M: usize, const N: usize>;

/// Shape of an `A × B × C` tensor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dims3<const A: usize, const B: usize, const C: usize>;

/// Shape of an `A × B × C × D` tensor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Dims4<const A: usize, const B: usize, const C: usize, const D: usize>;

impl<const N: usize> Shape for Dims1<N> {
    const RANK: usize = 1;
    const SIZE: usize = N;
    const INNER: usize = N;

    type Index = [usize; 1];

    fn extents() -> [usize; 1] {
        [N]
    }

    #[inline(always)]
    fn offset([i]: [usize; 1]) -> usize {
        debug_assert!(i < N);
        i
    }
}

impl<const M: usize, const N: usize> Shape for Dims2<M, N> {
    const RANK: usize = 2;
    const SIZE: usize = M * N;
    const INNER: usize = N;

    type Index = [usize; 2];

    fn extents() -> [usize; 2] {
        [M, N]
    }

    #[inline(always)]
    fn offset([i, j]: [usize; 2]) -> usize {
        debug_assert!(i < M && j < N);
        i * N + j
    }
}

impl<const A: usize, const B: usize, const C: usize> Shape for Dims3<A, B, C> {
    const RANK: usize = 3;
    const SIZE: usize = A * B * C;
    const INNER: usize = C;

    type Index = [usize; 3];

    fn extents() -> [usize; 3] {
        [A, B, C]
    }

    #[inline(always)]
    fn offset([i, j, k]: [usize; 3]) -> usize {
        debug_assert!(i < A && j < B && k < C);
        (i * B + j) * C + k
    }
}

impl<const A: usize, const B: usize, const C: usize, const D: usize> Shape for Dims4<A, B, C, D> {
    const RANK: usize = 4;
    const SIZE: usize = A * B * C * D;
    const INNER: usize = D;

    type Index = [usize; 4];

    fn extents() -> [usize; 4] {
        [A, B, C, D]
    }

    #[inline(always)]
    fn offset([i, j, k, l]: [usize; 4]) -> usize {
        debug_assert!(i < A && j < B && k < C && l < D);
        ((i * B + j) * C + k) * D + l
    }
}
