use matrixcompare::assert_scalar_eq;
use tessera::mesh::procedural::{create_diamond_mesh_2d, create_unit_square_uniform_tri_mesh_2d};
use tessera::mesh::{ElementSet, Segment, Simplex, Tetrahedron, Triangle, Vertex, VertexCoordinatesMap};
use tessera::tensor::Vector;

fn v(i: usize) -> Vertex {
    Vertex(i)
}

#[test]
fn triangle_from_segments_starts_with_first_side() {
    let triangle = Triangle::from_segments([
        Segment([v(1), v(2)]),
        Segment([v(3), v(2)]),
        Segment([v(1), v(3)]),
    ])
    .unwrap();
    assert_eq!(triangle, Triangle([v(1), v(2), v(3)]));
    assert_eq!(triangle.vertices(), vec![v(1), v(2), v(3)]);
}

#[test]
fn triangle_from_open_segments_fails() {
    // Four distinct vertices
    let open = [Segment([v(0), v(1)]), Segment([v(1), v(2)]), Segment([v(2), v(3)])];
    assert!(!Triangle::sanity_check(&open));
    assert!(Triangle::from_segments(open).is_err());

    // Vertex 0 is shared by three sides
    let degenerate = [Segment([v(0), v(1)]), Segment([v(0), v(1)]), Segment([v(0), v(2)])];
    assert!(!Triangle::sanity_check(&degenerate));
    assert!(Triangle::from_segments(degenerate).is_err());
}

#[test]
fn triangle_segments_close_the_triangle() {
    let triangle = Triangle::from_vertices(v(4), v(0), v(3));
    let segments = triangle.segments();
    assert!(Triangle::sanity_check(&segments));
    assert_eq!(Triangle::from_segments(segments).unwrap(), triangle);
}

#[test]
fn simplex_vertices_are_unique_and_ordered() {
    assert_eq!(Segment::from_vertices(v(2), v(2)).vertices(), vec![v(2)]);
    assert_eq!(Triangle([v(5), v(1), v(5)]).vertices(), vec![v(5), v(1)]);
    assert_eq!(
        Tetrahedron::from_vertices(v(3), v(2), v(1), v(0)).vertices(),
        vec![v(3), v(2), v(1), v(0)]
    );
    assert_eq!(Tetrahedron::REFERENCE_DIM, 3);
    assert_eq!(Segment::VERTICES, 2);
}

#[test]
fn coordinate_map_insert_and_lookup() {
    let mut coordinates = VertexCoordinatesMap::<f64, 2>::new();
    assert!(coordinates.is_empty());
    assert!(coordinates.insert(v(0), [1.0, 2.0]).is_none());
    let previous = coordinates.insert(v(0), [3.0, 4.0]);

    assert_eq!(previous, Some(Vector::from([1.0, 2.0])));
    assert_eq!(coordinates.len(), 1);
    assert!(coordinates.contains(&v(0)));
    assert!(!coordinates.contains(&v(1)));
    assert_eq!(coordinates.get(&v(0)), Some(&Vector::from([3.0, 4.0])));
}

#[test]
fn diamond_mesh_has_four_quarter_triangles() {
    let mesh = create_diamond_mesh_2d::<f64>();

    assert_eq!(mesh.num_elements(), 4);
    assert_eq!(
        mesh.elements(),
        &[
            Triangle([v(0), v(1), v(3)]),
            Triangle([v(1), v(2), v(3)]),
            Triangle([v(2), v(4), v(3)]),
            Triangle([v(4), v(0), v(3)]),
        ]
    );
    assert_eq!(mesh.coordinates_vertex(&v(3)), &Vector::from([0.5, 0.5]));
    for &jacobian in mesh.jacobians() {
        assert_scalar_eq!(jacobian, 0.25, comp = abs, tol = 1e-15);
    }
}

#[test]
fn unit_square_mesh_covers_unit_area() {
    let mesh = create_unit_square_uniform_tri_mesh_2d::<f64>(3);

    assert_eq!(mesh.num_elements(), 18);
    assert_eq!(mesh.coordinates().len(), 16);
    assert_eq!(mesh.coordinates_vertex(&v(5)), &Vector::from([1.0 / 3.0, 1.0 / 3.0]));
    let area: f64 = mesh.jacobians().iter().sum();
    assert_scalar_eq!(area, 1.0, comp = abs, tol = 1e-14);

    let empty = create_unit_square_uniform_tri_mesh_2d::<f64>(0);
    assert_eq!(empty.num_elements(), 0);
}

#[test]
fn element_set_jacobians_are_simplex_measures() {
    let coordinates: VertexCoordinatesMap<f64, 3> = [
        (v(0), Vector::from([0.0, 0.0, 0.0])),
        (v(1), Vector::from([2.0, 0.0, 0.0])),
        (v(2), Vector::from([0.0, 3.0, 0.0])),
        (v(3), Vector::from([0.0, 0.0, 4.0])),
    ]
    .into_iter()
    .collect();

    let segments = ElementSet::from_elements_and_coordinates(vec![Segment([v(1), v(2)])], coordinates.clone()).unwrap();
    assert_scalar_eq!(segments.jacobian(0), 13.0f64.sqrt(), comp = abs, tol = 1e-14);

    let triangles =
        ElementSet::from_elements_and_coordinates(vec![Triangle([v(0), v(1), v(2)])], coordinates.clone()).unwrap();
    assert_scalar_eq!(triangles.jacobian(0), 3.0, comp = abs, tol = 1e-14);

    let tetrahedra =
        ElementSet::from_elements_and_coordinates(vec![Tetrahedron([v(0), v(1), v(2), v(3)])], coordinates).unwrap();
    assert_scalar_eq!(tetrahedra.jacobian(0), 4.0, comp = abs, tol = 1e-14);
}

#[test]
fn element_set_rejects_invalid_input() {
    let coordinates: VertexCoordinatesMap<f64, 2> = [
        (v(0), Vector::from([0.0, 0.0])),
        (v(1), Vector::from([1.0, 0.0])),
        (v(2), Vector::from([0.0, 1.0])),
        (v(3), Vector::from([1.0, 1.0])),
    ]
    .into_iter()
    .collect();

    // Vertex 7 has no coordinates
    let missing = ElementSet::from_elements_and_coordinates(vec![Triangle([v(0), v(1), v(7)])], coordinates.clone());
    assert!(missing.is_err());

    let repeated = ElementSet::from_elements_and_coordinates(vec![Triangle([v(0), v(1), v(1)])], coordinates.clone());
    assert!(repeated.is_err());

    let too_few_dimensions =
        ElementSet::from_elements_and_coordinates(vec![Tetrahedron([v(0), v(1), v(2), v(3)])], coordinates);
    assert!(too_few_dimensions.is_err());
}

#[test]
fn same_elements_can_be_embedded_in_three_dimensions() {
    let mesh = create_diamond_mesh_2d::<f64>();
    let lifted: VertexCoordinatesMap<f64, 3> = [
        (v(0), Vector::from([0.0, 0.0, 0.0])),
        (v(1), Vector::from([1.0, 0.0, 1.0])),
        (v(2), Vector::from([1.0, 1.0, 1.0])),
        (v(3), Vector::from([0.5, 0.5, 0.5])),
        (v(4), Vector::from([0.0, 1.0, 0.0])),
    ]
    .into_iter()
    .collect();

    let mesh3d = mesh.with_coordinates(lifted).unwrap();
    assert_eq!(mesh3d.elements(), mesh.elements());
    let area: f64 = mesh3d.jacobians().iter().sum();
    assert_scalar_eq!(area, 2.0f64.sqrt(), comp = abs, tol = 1e-14);

    // Coordinates for only some of the vertices
    let partial: VertexCoordinatesMap<f64, 3> = [(v(0), Vector::from([0.0, 0.0, 0.0]))].into_iter().collect();
    assert!(mesh.with_coordinates(partial).is_err());
}
