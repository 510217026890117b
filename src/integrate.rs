//! Quadrature-based integration of scalar functions over element sets.
use crate::function::ScalarFunction;
use crate::mesh::{ElementSet, Simplex};
use crate::quadrature::{QuadraturePoint, QuadratureRule};
use crate::quadrature_field::QuadratureField;
use crate::tensor::Dims1;
use crate::Real;
use itertools::izip;
use log::debug;
use std::marker::PhantomData;

/// Integrates scalar functions over an [`ElementSet`] with the quadrature rule `R`.
///
/// The physical coordinates of all `Q` quadrature points of every element are computed once
/// upon construction. Integration then approximates
///
/// ```text
/// ∫ f dΩ ≈ Σ_e Σ_q f(x_eq) w_q J_e
/// ```
///
/// where `w_q` are the weights of the rule and `J_e` the measure of element `e`. The sum is
/// accumulated element by element, quadrature point by quadrature point, so results are
/// reproducible bit for bit.
pub struct Integrator<'a, T, R, const Q: usize, const D: usize>
where
    R: QuadratureRule<Q>,
{
    element_set: &'a ElementSet<T, R::Element, D>,
    rule: [QuadraturePoint<T>; Q],
    coordinates: QuadratureField<T, Q, Dims1<D>>,
    marker: PhantomData<R>,
}

impl<'a, T, R, const Q: usize, const D: usize> Integrator<'a, T, R, Q, D>
where
    T: Real,
    R: QuadratureRule<Q>,
{
    pub fn new(element_set: &'a ElementSet<T, R::Element, D>) -> Self {
        let rule = R::points::<T>();
        let coordinates = compute_quadrature_point_coordinates(element_set, &rule);
        debug!(
            "Created integrator with {} quadrature points on each of {} elements",
            Q,
            element_set.num_elements()
        );
        Self {
            element_set,
            rule,
            coordinates,
            marker: PhantomData,
        }
    }

    /// Integrates the given function (or anything that can be viewed as one, such as a field).
    pub fn integrate<F>(&self, f: F) -> T
    where
        F: AsRef<ScalarFunction<T, D>>,
    {
        debug!(
            "Integrating over {} elements ({} quadrature points)",
            self.element_set.num_elements(),
            self.element_set.num_elements() * Q
        );
        let values = f.as_ref().evaluate_quadrature_field(&self.coordinates);

        let mut result = T::zero();
        for (e, element_values) in values.chunks_exact(Q.max(1)).enumerate() {
            let jacobian = self.element_set.jacobian(e);
            for (value, point) in izip!(element_values, &self.rule) {
                result += *value * point.weight * jacobian;
            }
        }
        result
    }

    /// The physical coordinates of the quadrature points.
    pub fn coordinates(&self) -> &QuadratureField<T, Q, Dims1<D>> {
        &self.coordinates
    }

    pub fn rule(&self) -> &[QuadraturePoint<T>; Q] {
        &self.rule
    }

    pub fn element_set(&self) -> &'a ElementSet<T, R::Element, D> {
        self.element_set
    }
}

fn compute_quadrature_point_coordinates<T, E, const Q: usize, const D: usize>(
    element_set: &ElementSet<T, E, D>,
    rule: &[QuadraturePoint<T>; Q],
) -> QuadratureField<T, Q, Dims1<D>>
where
    T: Real,
    E: Simplex,
{
    let mut coordinates = QuadratureField::new(element_set.num_elements());
    for (e, element) in element_set.elements().iter().enumerate() {
        for (v, vertex) in element.vertices().iter().enumerate() {
            let x_v = element_set.coordinates_vertex(vertex);
            for (q, point) in rule.iter().enumerate() {
                let mut x_eq = coordinates.slot_mut(e, q);
                for d in 0..D {
                    x_eq[d] += point.shape_weights[v] * x_v[d];
                }
            }
        }
    }
    coordinates
}
