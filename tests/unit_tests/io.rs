use matrixcompare::assert_scalar_eq;
use tessera::integrate::Integrator;
use tessera::io::summit::{load_summit_from_file, load_summit_from_str, SummitMesh};
use tessera::mesh::{Triangle, Vertex};
use tessera::quadrature::Gauss;
use tessera::tensor::Vector;

const DIAMOND: &str = "\
2 5 4 1
0.0 0.0
1.0 0.0
1.0 1.0
0.5 0.5
0.0 1.0
3 0 1 3 square
3 1 2 3 square
3 2 4 3 square
3 4 0 3 square
";

#[test]
fn load_diamond_from_summit_string() {
    let mesh: SummitMesh<f64, 2> = load_summit_from_str(DIAMOND).unwrap();

    assert_eq!(mesh.coordinates.len(), 5);
    assert_eq!(mesh.coordinates.get(&Vertex(3)), Some(&Vector::from([0.5, 0.5])));
    assert_eq!(mesh.num_elements(), 4);
    assert_eq!(
        mesh.element_sets["square"][2],
        Triangle([Vertex(2), Vertex(4), Vertex(3)])
    );

    let set = mesh.element_set("square").unwrap();
    let integrator = Integrator::<f64, Gauss<Triangle, 2>, 3, 2>::new(&set);
    assert_scalar_eq!(integrator.integrate(tessera::function::Function::constant(1.0)), 1.0, comp = abs, tol = 1e-15);

    assert!(mesh.element_set("boundary").is_err());
}

#[test]
fn elements_are_grouped_by_label_and_non_triangles_skipped() {
    let input = "\
2 4 4 2
0 0
1 0
1 1
0 1
3 0 1 2 lower
3 0 2 3 upper
2 0 1 edge
4 0 1 2 3 quad
";
    let mesh: SummitMesh<f64, 2> = load_summit_from_str(input).unwrap();

    assert_eq!(mesh.num_elements(), 2);
    assert_eq!(mesh.element_sets.keys().collect::<Vec<_>>(), vec!["lower", "upper"]);
    assert_eq!(mesh.element_sets["upper"], vec![Triangle([Vertex(0), Vertex(2), Vertex(3)])]);
}

#[test]
fn malformed_summit_input_is_rejected() {
    // Wrong dimension
    assert!(load_summit_from_str::<f64, 3>(DIAMOND).is_err());
    // Truncated
    assert!(load_summit_from_str::<f64, 2>("2 5 4 1\n0.0 0.0\n1.0").is_err());
    // Not a number
    assert!(load_summit_from_str::<f64, 2>("2 1 0 0\n0.0 x").is_err());
    // Vertex out of range
    assert!(load_summit_from_str::<f64, 2>("2 3 1 1\n0 0\n1 0\n0 1\n3 0 1 5 a").is_err());
    // Repeated vertex
    assert!(load_summit_from_str::<f64, 2>("2 3 1 1\n0 0\n1 0\n0 1\n3 0 1 1 a").is_err());
    // Missing label
    assert!(load_summit_from_str::<f64, 2>("2 3 1 1\n0 0\n1 0\n0 1\n3 0 1 2").is_err());
}

#[test]
fn loading_missing_file_fails() {
    let result = load_summit_from_file::<f64, 2>("this/file/does/not/exist.summit");
    assert!(result.is_err());
}
