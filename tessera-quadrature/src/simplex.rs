use crate::univariate::gauss_legendre;
use crate::{Error, SegmentRule, TetrahedronRule, TriangleRule};

/// Returns a rule on the reference segment that integrates polynomials of degree `strength`
/// exactly.
///
/// The rule is the Gauss-Legendre rule with the fewest points achieving the strength, so any
/// strength is available.
pub fn segment(strength: usize) -> Result<SegmentRule, Error> {
    let (weights, points) = gauss_legendre(strength / 2 + 1);
    let points = points.into_iter().map(|t| [1.0 - t, t]).collect();
    Ok((weights, points))
}

/// Returns the smallest stored rule on the reference triangle with at least the given strength.
///
/// Stored strengths are 1 (centroid), 2 (three interior points) and 5 (Radon's seven point rule).
pub fn triangle(strength: usize) -> Result<TriangleRule, Error> {
    match strength {
        0 | 1 => Ok((vec![1.0], vec![[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]])),
        2 => {
            let a = 2.0 / 3.0;
            let b = 1.0 / 6.0;
            let w = 1.0 / 3.0;
            Ok((vec![w, w, w], vec![[a, b, b], [b, a, b], [b, b, a]]))
        }
        3..=5 => {
            let sqrt15 = 15f64.sqrt();
            let a1 = (6.0 - sqrt15) / 21.0;
            let a2 = (6.0 + sqrt15) / 21.0;
            let w1 = (155.0 - sqrt15) / 1200.0;
            let w2 = (155.0 + sqrt15) / 1200.0;
            let (b1, b2) = (1.0 - 2.0 * a1, 1.0 - 2.0 * a2);
            let weights = vec![9.0 / 40.0, w1, w1, w1, w2, w2, w2];
            let points = vec![
                [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
                [b1, a1, a1],
                [a1, b1, a1],
                [a1, a1, b1],
                [b2, a2, a2],
                [a2, b2, a2],
                [a2, a2, b2],
            ];
            Ok((weights, points))
        }
        _ => Err(Error::NoRuleAvailable),
    }
}

/// Returns the smallest stored rule on the reference tetrahedron with at least the given strength.
///
/// Stored strengths are 1 (centroid), 2 (four interior points) and 3 (five points, one of
/// them with a negative weight).
pub fn tetrahedron(strength: usize) -> Result<TetrahedronRule, Error> {
    match strength {
        0 | 1 => Ok((vec![1.0], vec![[0.25; 4]])),
        2 => {
            let a = (5.0 + 3.0 * 5f64.sqrt()) / 20.0;
            let b = (5.0 - 5f64.sqrt()) / 20.0;
            let points = vec![[a, b, b, b], [b, a, b, b], [b, b, a, b], [b, b, b, a]];
            Ok((vec![0.25; 4], points))
        }
        3 => {
            let a = 0.5;
            let b = 1.0 / 6.0;
            let w = 9.0 / 20.0;
            let weights = vec![-4.0 / 5.0, w, w, w, w];
            let points = vec![
                [0.25; 4],
                [a, b, b, b],
                [b, a, b, b],
                [b, b, a, b],
                [b, b, b, a],
            ];
            Ok((weights, points))
        }
        _ => Err(Error::NoRuleAvailable),
    }
}
