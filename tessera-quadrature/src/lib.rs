//! Quadrature rules for simplex reference elements.
//!
//! Every rule is expressed in *barycentric* coordinates: a point on a simplex with `V` vertices
//! is an array of `V` non-negative shape weights summing to one. The weights of each rule are
//! normalized so that they sum to one, i.e. a rule approximates the *mean* of a function over
//! the reference simplex. Multiplying by the measure (length, area, volume) of a physical
//! element therefore yields the integral over that element.
//!
//! The main purpose of this crate is to act as the rule table of `tessera`, but the rules
//! can be used on their own.

use std::fmt;
use std::fmt::{Display, Formatter};

pub mod univariate;

mod simplex;

pub use simplex::{segment, tetrahedron, triangle};

/// Library-wide error type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates that a rule satisfying the given requirements is not available.
    NoRuleAvailable,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuleAvailable => {
                write!(f, "There is no quadrature rule satisfying the requirements available")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Barycentric coordinates of a point on a simplex with `V` vertices.
pub type BarycentricPoint<const V: usize> = [f64; V];

/// A rule on a simplex with `V` vertices, stored as `(weights, points)`.
pub type Rule<const V: usize> = (Vec<f64>, Vec<BarycentricPoint<V>>);

/// A rule on the reference segment.
pub type SegmentRule = Rule<2>;

/// A rule on the reference triangle.
pub type TriangleRule = Rule<3>;

/// A rule on the reference tetrahedron.
pub type TetrahedronRule = Rule<4>;

/// Applies the given rule to the function `f`.
///
/// Since the weights are normalized, the result approximates the mean of `f` over the simplex.
pub fn integrate<const V: usize>(rule: &Rule<V>, f: impl Fn(&BarycentricPoint<V>) -> f64) -> f64 {
    let (weights, points) = rule;
    weights
        .iter()
        .zip(points)
        .map(|(w, p)| w * f(p))
        .sum()
}
