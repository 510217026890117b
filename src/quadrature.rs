//! Quadrature rules on simplices, selected at compile time.
//!
//! A rule is a type implementing [`QuadratureRule`]. Each of its `Q` points is given by the
//! *shape weights* of the point, i.e. its barycentric coordinates with respect to the vertices
//! of the element, and by a weight. The weights of a rule sum to one, so that a rule
//! integrates over an element once multiplied by the element's measure.
use crate::mesh::{Segment, Simplex, Tetrahedron, Triangle};
use crate::Real;
use nalgebra::convert;
use std::array;
use std::marker::PhantomData;

/// Errors returned by the quadrature table.
pub use tessera_quadrature::Error as QuadratureError;

/// The table of rules in `f64` precision that the typed rules are built from.
pub mod table {
    pub use tessera_quadrature::*;
}

/// A quadrature point on a simplex.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraturePoint<T> {
    /// Barycentric coordinates of the point, one per vertex of the simplex.
    pub shape_weights: Vec<T>,
    pub weight: T,
}

/// A quadrature rule with `Q` points on the simplex `Self::Element`.
pub trait QuadratureRule<const Q: usize> {
    type Element: Simplex;

    /// The polynomial degree that the rule integrates exactly.
    const DEGREE: usize;

    fn points<T: Real>() -> [QuadraturePoint<T>; Q];
}

/// Gauss-type rule of exactness `DEGREE` on the simplex `E`.
///
/// Only used as a type-level tag, see the implementations of [`QuadratureRule`] for the
/// available combinations.
#[derive(Debug)]
pub struct Gauss<E, const DEGREE: usize> {
    marker: PhantomData<E>,
}

fn convert_rule_from_f64<T, const Q: usize, const V: usize>(rule: table::Rule<V>) -> [QuadraturePoint<T>; Q]
where
    T: Real,
{
    let (weights, points) = rule;
    assert_eq!(weights.len(), Q, "Rule must have exactly Q points");
    array::from_fn(|q| QuadraturePoint {
        shape_weights: points[q].iter().copied().map(convert).collect(),
        weight: convert(weights[q]),
    })
}

macro_rules! impl_gauss_rule {
    ($element:ty, $degree:literal, $num_points:literal, $table:path) => {
        impl QuadratureRule<$num_points> for Gauss<$element, $degree> {
            type Element = $element;

            const DEGREE: usize = $degree;

            fn points<T: Real>() -> [QuadraturePoint<T>; $num_points] {
                convert_rule_from_f64($table($degree).expect("Rule must be stored in the table"))
            }
        }
    };
}

impl_gauss_rule!(Segment, 1, 1, table::segment);
impl_gauss_rule!(Segment, 3, 2, table::segment);
impl_gauss_rule!(Segment, 5, 3, table::segment);

impl_gauss_rule!(Triangle, 1, 1, table::triangle);
impl_gauss_rule!(Triangle, 2, 3, table::triangle);
impl_gauss_rule!(Triangle, 5, 7, table::triangle);

impl_gauss_rule!(Tetrahedron, 1, 1, table::tetrahedron);
impl_gauss_rule!(Tetrahedron, 2, 4, table::tetrahedron);
impl_gauss_rule!(Tetrahedron, 3, 5, table::tetrahedron);
