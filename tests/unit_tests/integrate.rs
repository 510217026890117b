use matrixcompare::assert_scalar_eq;
use tessera::field::Field;
use tessera::function::Function;
use tessera::integrate::Integrator;
use tessera::mesh::procedural::{create_diamond_mesh_2d, create_unit_square_uniform_tri_mesh_2d};
use tessera::mesh::{ElementSet, Segment, Tetrahedron, Triangle, Vertex, VertexCoordinatesMap};
use tessera::quadrature::Gauss;
use tessera::tensor::Vector;
use util::assert_approx_tensor_eq;

type DiamondIntegrator<'a, const D: usize> = Integrator<'a, f64, Gauss<Triangle, 2>, 3, D>;

#[test]
fn diamond_integrals_match_exact_values() {
    let mesh = create_diamond_mesh_2d::<f64>();
    let integrator = DiamondIntegrator::<2>::new(&mesh);

    let cosine = Function::new(|x: &Vector<f64, 2>| (x[0] * x[1]).cos());
    assert_scalar_eq!(integrator.integrate(&cosine), 0.946083, comp = abs, tol = 1e-3);

    let one = Function::constant(1.0);
    assert_scalar_eq!(integrator.integrate(&one), 1.0, comp = abs, tol = 1e-16);

    let x0 = Function::new(|x: &Vector<f64, 2>| x[0]);
    assert_scalar_eq!(integrator.integrate(&x0), 0.5, comp = abs, tol = 1e-16);

    let x0x1 = Function::new(|x: &Vector<f64, 2>| x[0] * x[1]);
    assert_scalar_eq!(integrator.integrate(&x0x1), 0.25, comp = abs, tol = 1e-16);

    let x0_squared = Function::new(|x: &Vector<f64, 2>| x[0] * x[0]);
    assert_scalar_eq!(integrator.integrate(x0_squared), 1.0 / 3.0, comp = abs, tol = 1e-16);
}

#[test]
fn diamond_embedded_in_three_dimensions() {
    let mesh = create_diamond_mesh_2d::<f64>();
    let lifted: VertexCoordinatesMap<f64, 3> = [
        (Vertex(0), Vector::from([0.0, 0.0, 0.0])),
        (Vertex(1), Vector::from([1.0, 0.0, 1.0])),
        (Vertex(2), Vector::from([1.0, 1.0, 1.0])),
        (Vertex(3), Vector::from([0.5, 0.5, 0.5])),
        (Vertex(4), Vector::from([0.0, 1.0, 0.0])),
    ]
    .into_iter()
    .collect();
    let mesh3d = mesh.with_coordinates(lifted).unwrap();
    let integrator = DiamondIntegrator::<3>::new(&mesh3d);

    let x0x1 = Function::new(|x: &Vector<f64, 3>| x[0] * x[1]);
    assert_scalar_eq!(integrator.integrate(&x0x1), 0.35355339059327384, comp = abs, tol = 1e-15);
}

#[test]
fn integration_accepts_fields() {
    let mesh = create_diamond_mesh_2d::<f64>();
    let integrator = DiamondIntegrator::<2>::new(&mesh);

    let x0 = Field::with_derivatives(
        Function::new(|x: &Vector<f64, 2>| x[0]),
        [Function::constant(1.0), Function::constant(0.0)],
    );
    let x1 = Field::from_fn(|x: &Vector<f64, 2>| x[1]);
    assert_scalar_eq!(integrator.integrate(&x0 * &x1), 0.25, comp = abs, tol = 1e-16);
    assert_scalar_eq!(integrator.integrate(&(&x0 - 0.5)), 0.0, comp = abs, tol = 1e-16);
}

#[test]
fn quadrature_point_coordinates_are_cached() {
    let mesh = create_diamond_mesh_2d::<f64>();
    let integrator = Integrator::<f64, Gauss<Triangle, 1>, 1, 2>::new(&mesh);
    let coordinates = integrator.coordinates();

    assert_eq!(coordinates.num_elements(), 4);
    assert_eq!(integrator.rule().len(), 1);
    assert_eq!(integrator.element_set().num_elements(), 4);
    // Centroids of the four triangles
    let expected = [[0.5, 1.0 / 6.0], [5.0 / 6.0, 0.5], [0.5, 5.0 / 6.0], [1.0 / 6.0, 0.5]];
    for (e, centroid) in expected.into_iter().enumerate() {
        assert_approx_tensor_eq!(coordinates.slot(e, 0), Vector::from(centroid), abstol = 1e-15);
    }
}

#[test]
fn high_order_rule_on_refined_unit_square() {
    let mesh = create_unit_square_uniform_tri_mesh_2d::<f64>(4);
    let integrator = Integrator::<f64, Gauss<Triangle, 5>, 7, 2>::new(&mesh);

    let f = Function::new(|x: &Vector<f64, 2>| x[0] * x[0] * x[1] * x[1]);
    assert_scalar_eq!(integrator.integrate(&f), 1.0 / 9.0, comp = abs, tol = 1e-14);
}

#[test]
fn integration_over_segments_and_tetrahedra() {
    let coordinates: VertexCoordinatesMap<f64, 3> = [
        (Vertex(0), Vector::from([0.0, 0.0, 0.0])),
        (Vertex(1), Vector::from([1.0, 0.0, 0.0])),
        (Vertex(2), Vector::from([0.0, 1.0, 0.0])),
        (Vertex(3), Vector::from([0.0, 0.0, 1.0])),
        (Vertex(4), Vector::from([2.0, 0.0, 0.0])),
    ]
    .into_iter()
    .collect();

    let segments = ElementSet::from_elements_and_coordinates(
        vec![Segment([Vertex(0), Vertex(1)]), Segment([Vertex(1), Vertex(4)])],
        coordinates.clone(),
    )
    .unwrap();
    let integrator = Integrator::<f64, Gauss<Segment, 5>, 3, 3>::new(&segments);
    let x0_fourth = Function::new(|x: &Vector<f64, 3>| x[0].powi(4));
    assert_scalar_eq!(integrator.integrate(&x0_fourth), 32.0 / 5.0, comp = abs, tol = 1e-13);

    let tetrahedra = ElementSet::from_elements_and_coordinates(
        vec![Tetrahedron([Vertex(0), Vertex(1), Vertex(2), Vertex(3)])],
        coordinates,
    )
    .unwrap();
    let integrator = Integrator::<f64, Gauss<Tetrahedron, 2>, 4, 3>::new(&tetrahedra);
    assert_scalar_eq!(integrator.integrate(Function::constant(1.0)), 1.0 / 6.0, comp = abs, tol = 1e-15);
    // ∫ x y over the unit tetrahedron
    let xy = Function::new(|x: &Vector<f64, 3>| x[0] * x[1]);
    assert_scalar_eq!(integrator.integrate(&xy), 1.0 / 120.0, comp = abs, tol = 1e-15);
}

#[test]
fn empty_element_set_integrates_to_zero() {
    let mesh = create_unit_square_uniform_tri_mesh_2d::<f64>(0);
    let integrator = DiamondIntegrator::<2>::new(&mesh);
    assert_eq!(integrator.integrate(Function::constant(1.0)), 0.0);
}
