//! Simplex connectivity, vertex coordinates and sets of elements embedded in space.
//!
//! Topology and geometry are kept apart: a [`Simplex`] only knows the identities of its
//! vertices, while a [`VertexCoordinatesMap`] attaches coordinates to vertices. An
//! [`ElementSet`] combines the two, so the same elements can be embedded in different
//! spaces simply by building several element sets from different coordinate maps.
use crate::tensor::Vector;
use crate::Real;
use eyre::eyre;
use nalgebra::DMatrix;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::fmt::Debug;

pub mod procedural;

/// The identity of a mesh vertex.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex(pub usize);

/// A simplex described by its vertices.
pub trait Simplex: Debug + Clone + Send + Sync + 'static {
    /// The number of vertices of the simplex.
    const VERTICES: usize;
    /// The dimension of the reference simplex, i.e. `VERTICES - 1`.
    const REFERENCE_DIM: usize;

    /// The distinct vertices of the simplex, in the order in which they appear in the element.
    fn vertices(&self) -> Vec<Vertex>;
}

fn unique_vertices(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut unique = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if !unique.contains(vertex) {
            unique.push(*vertex);
        }
    }
    unique
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment(pub [Vertex; 2]);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle(pub [Vertex; 3]);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetrahedron(pub [Vertex; 4]);

impl Simplex for Segment {
    const VERTICES: usize = 2;
    const REFERENCE_DIM: usize = 1;

    fn vertices(&self) -> Vec<Vertex> {
        unique_vertices(&self.0)
    }
}

impl Simplex for Triangle {
    const VERTICES: usize = 3;
    const REFERENCE_DIM: usize = 2;

    fn vertices(&self) -> Vec<Vertex> {
        unique_vertices(&self.0)
    }
}

impl Simplex for Tetrahedron {
    const VERTICES: usize = 4;
    const REFERENCE_DIM: usize = 3;

    fn vertices(&self) -> Vec<Vertex> {
        unique_vertices(&self.0)
    }
}

impl Segment {
    pub fn from_vertices(a: Vertex, b: Vertex) -> Self {
        Self([a, b])
    }
}

impl Triangle {
    pub fn from_vertices(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self([a, b, c])
    }

    /// Assembles a triangle from its three sides.
    ///
    /// The vertices of the triangle are the vertices of the first side followed by the
    /// remaining vertex. Fails if the sides do not form a closed triangle.
    pub fn from_segments(segments: [Segment; 3]) -> eyre::Result<Self> {
        if !Self::sanity_check(&segments) {
            return Err(eyre!(
                "Segments {:?} do not form a triangle: every vertex must be shared by exactly two sides",
                segments
            ));
        }

        let Segment([a, b]) = segments[0];
        let c = segments[1..]
            .iter()
            .flat_map(|segment| segment.0)
            .find(|v| *v != a && *v != b)
            .ok_or_else(|| eyre!("Segments {:?} only span two vertices", segments))?;
        Ok(Self([a, b, c]))
    }

    /// Checks that the given sides describe a triangle, i.e. they span three distinct vertices
    /// and each vertex is shared by exactly two sides.
    pub fn sanity_check(segments: &[Segment; 3]) -> bool {
        let all_vertices: Vec<Vertex> = segments.iter().flat_map(|segment| segment.0).collect();
        let distinct = unique_vertices(&all_vertices);
        distinct.len() == 3
            && distinct.iter().all(|vertex| {
                segments
                    .iter()
                    .filter(|segment| segment.0.contains(vertex))
                    .count()
                    == 2
            })
    }

    /// The three sides of the triangle, opposite to the third, first and second vertex, respectively.
    pub fn segments(&self) -> [Segment; 3] {
        let [a, b, c] = self.0;
        [Segment([a, b]), Segment([b, c]), Segment([c, a])]
    }
}

impl Tetrahedron {
    pub fn from_vertices(a: Vertex, b: Vertex, c: Vertex, d: Vertex) -> Self {
        Self([a, b, c, d])
    }
}

/// Coordinates of vertices in `D`-dimensional space.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexCoordinatesMap<T, const D: usize> {
    coordinates: FxHashMap<Vertex, Vector<T, D>>,
}

impl<T, const D: usize> Default for VertexCoordinatesMap<T, D> {
    fn default() -> Self {
        Self {
            coordinates: FxHashMap::default(),
        }
    }
}

impl<T, const D: usize> VertexCoordinatesMap<T, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches coordinates to a vertex, returning the coordinates previously attached to it.
    pub fn insert(&mut self, vertex: Vertex, coordinates: impl Into<Vector<T, D>>) -> Option<Vector<T, D>> {
        self.coordinates.insert(vertex, coordinates.into())
    }

    pub fn get(&self, vertex: &Vertex) -> Option<&Vector<T, D>> {
        self.coordinates.get(vertex)
    }

    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.coordinates.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Iterates over all vertices and their coordinates in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, Vertex, Vector<T, D>> {
        self.coordinates.iter()
    }
}

impl<T, const D: usize> FromIterator<(Vertex, Vector<T, D>)> for VertexCoordinatesMap<T, D> {
    fn from_iter<I: IntoIterator<Item = (Vertex, Vector<T, D>)>>(iter: I) -> Self {
        Self {
            coordinates: iter.into_iter().collect(),
        }
    }
}

/// A collection of simplices of type `E` embedded in `D`-dimensional space.
///
/// The measure (length, area or volume) of every element is computed once upon construction
/// and exposed as the element's [`jacobian`](Self::jacobian).
#[derive(Debug, Clone)]
pub struct ElementSet<T, E, const D: usize> {
    elements: Vec<E>,
    coordinates: VertexCoordinatesMap<T, D>,
    jacobians: Vec<T>,
}

impl<T, E, const D: usize> ElementSet<T, E, D>
where
    T: Real,
    E: Simplex,
{
    /// Builds an element set from elements and the coordinates of their vertices.
    ///
    /// Fails if a vertex of some element has no coordinates, if an element has repeated
    /// vertices or if the elements cannot be embedded in `D` dimensions.
    pub fn from_elements_and_coordinates(elements: Vec<E>, coordinates: VertexCoordinatesMap<T, D>) -> eyre::Result<Self> {
        if E::REFERENCE_DIM > D {
            return Err(eyre!(
                "Cannot embed elements of dimension {} in {}-dimensional space",
                E::REFERENCE_DIM,
                D
            ));
        }

        let jacobians = elements
            .iter()
            .enumerate()
            .map(|(e, element)| {
                let vertices = element.vertices();
                if vertices.len() != E::VERTICES {
                    return Err(eyre!("Element {} has repeated vertices: {:?}", e, element));
                }
                let x = vertices
                    .iter()
                    .map(|vertex| {
                        coordinates
                            .get(vertex)
                            .ok_or_else(|| eyre!("Vertex {:?} of element {} has no coordinates", vertex, e))
                    })
                    .collect::<eyre::Result<Vec<_>>>()?;
                Ok(simplex_measure(&x))
            })
            .collect::<eyre::Result<Vec<_>>>()?;

        Ok(Self {
            elements,
            coordinates,
            jacobians,
        })
    }

    /// Builds an element set with the same elements but different vertex coordinates.
    pub fn with_coordinates<T2, const D2: usize>(
        &self,
        coordinates: VertexCoordinatesMap<T2, D2>,
    ) -> eyre::Result<ElementSet<T2, E, D2>>
    where
        T2: Real,
    {
        ElementSet::from_elements_and_coordinates(self.elements.clone(), coordinates)
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    pub fn coordinates(&self) -> &VertexCoordinatesMap<T, D> {
        &self.coordinates
    }

    /// The coordinates of the given vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertex has no coordinates in this element set.
    pub fn coordinates_vertex(&self, vertex: &Vertex) -> &Vector<T, D> {
        &self.coordinates.coordinates[vertex]
    }

    /// The measure of element `e`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is out of bounds.
    pub fn jacobian(&self, e: usize) -> T {
        self.jacobians[e]
    }

    pub fn jacobians(&self) -> &[T] {
        &self.jacobians
    }
}

/// Computes the measure of the simplex spanned by the given vertices,
/// `sqrt(det(J^T J)) / R!` with `J` the `D × R` matrix of edge vectors.
fn simplex_measure<T: Real, const D: usize>(x: &[&Vector<T, D>]) -> T {
    let r = x.len() - 1;
    let edges = DMatrix::from_fn(D, r, |i, j| x[j + 1][i] - x[0][i]);
    let gram = edges.transpose() * &edges;
    let factorial = (1..=r).fold(T::one(), |acc, k| acc * nalgebra::convert(k as f64));
    // Round-off may make the determinant of a (nearly) degenerate simplex slightly negative
    gram.determinant().max(T::zero()).sqrt() / factorial
}
