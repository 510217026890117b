//! Basic procedural mesh generation routines.
use crate::mesh::{ElementSet, Segment, Triangle, Vertex, VertexCoordinatesMap};
use crate::tensor::Vector;
use crate::Real;
use nalgebra::convert;
use numeric_literals::replace_float_literals;

/// Creates a uniform triangulation of the unit square `[0, 1]^2`.
///
/// The square is divided into `cells_per_dim × cells_per_dim` square cells, each split into
/// two counter-clockwise triangles along its diagonal. Vertex `j * (cells_per_dim + 1) + i`
/// sits at `(i, j) / cells_per_dim`.
pub fn create_unit_square_uniform_tri_mesh_2d<T>(cells_per_dim: usize) -> ElementSet<T, Triangle, 2>
where
    T: Real,
{
    let mut coordinates = VertexCoordinatesMap::new();
    let mut triangles = Vec::new();

    if cells_per_dim > 0 {
        let cell_size = T::one() / convert(cells_per_dim as f64);
        let num_vertices_x = cells_per_dim + 1;
        let to_global_vertex = |i, j| Vertex(num_vertices_x * j + i);

        for j in 0..num_vertices_x {
            for i in 0..num_vertices_x {
                let x = Vector::from([convert::<f64, T>(i as f64), convert(j as f64)]) * cell_size;
                coordinates.insert(to_global_vertex(i, j), x);
            }
        }

        for j in 0..cells_per_dim {
            for i in 0..cells_per_dim {
                let (v00, v10) = (to_global_vertex(i, j), to_global_vertex(i + 1, j));
                let (v01, v11) = (to_global_vertex(i, j + 1), to_global_vertex(i + 1, j + 1));
                triangles.push(Triangle([v00, v10, v11]));
                triangles.push(Triangle([v00, v11, v01]));
            }
        }
    }

    ElementSet::from_elements_and_coordinates(triangles, coordinates)
        .expect("Every vertex of a procedural mesh has coordinates")
}

/// Creates the unit square split into four triangles meeting at its center.
///
/// ```text
///  (0,1) 4 +-------+ 2 (1,1)
///          | \   / |
///          |   3   |
///          | /   \ |
///  (0,0) 0 +-------+ 1 (1,0)
/// ```
///
/// The triangles are `(0, 1, 3)`, `(1, 2, 3)`, `(2, 4, 3)` and `(4, 0, 3)`, assembled from
/// their sides.
#[replace_float_literals(T::from_f64(literal).expect("Literal must fit in T"))]
pub fn create_diamond_mesh_2d<T>() -> ElementSet<T, Triangle, 2>
where
    T: Real,
{
    let v: Vec<_> = (0..5).map(Vertex).collect();
    let points: [[T; 2]; 5] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.5, 0.5], [0.0, 1.0]];
    let mut coordinates = VertexCoordinatesMap::new();
    for (vertex, x) in v.iter().zip(points) {
        coordinates.insert(*vertex, x);
    }

    let sides = [
        Segment([v[0], v[1]]),
        Segment([v[1], v[3]]),
        Segment([v[3], v[0]]),
        Segment([v[1], v[2]]),
        Segment([v[2], v[3]]),
        Segment([v[4], v[3]]),
        Segment([v[2], v[4]]),
        Segment([v[4], v[0]]),
    ];
    let triangles = [[0, 1, 2], [3, 4, 1], [6, 5, 4], [7, 2, 5]]
        .into_iter()
        .map(|[a, b, c]| Triangle::from_segments([sides[a], sides[b], sides[c]]))
        .collect::<eyre::Result<Vec<_>>>()
        .expect("Sides of the diamond mesh form triangles");

    ElementSet::from_elements_and_coordinates(triangles, coordinates)
        .expect("Every vertex of the diamond mesh has coordinates")
}
