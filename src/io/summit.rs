//! Reader for meshes in the plain-text *summit* format.
//!
//! The format is a stream of whitespace-separated tokens:
//!
//! ```text
//! dim n_vertices n_elements n_element_sets
//! x_0 y_0 ...                  (n_vertices lines of dim coordinates)
//! 3 i_0 i_1 i_2 label          (n_elements lines)
//! ```
//!
//! Every element line starts with its number of vertices and ends with the label of the
//! element set it belongs to. Only triangles (three vertices) are currently understood;
//! other elements are skipped.
use crate::mesh::{ElementSet, Segment, Triangle, Vertex, VertexCoordinatesMap};
use crate::tensor::Vector;
use crate::Real;
use eyre::{eyre, Context};
use log::warn;
use nalgebra::convert;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// A mesh read from a summit file.
#[derive(Debug, Clone)]
pub struct SummitMesh<T, const D: usize> {
    /// Coordinates of the vertices, which are numbered in the order of the file.
    pub coordinates: VertexCoordinatesMap<T, D>,
    /// Triangles grouped by the label of their element set.
    pub element_sets: BTreeMap<String, Vec<Triangle>>,
}

impl<T: Real, const D: usize> SummitMesh<T, D> {
    /// Builds the element set with the given label.
    pub fn element_set(&self, label: &str) -> eyre::Result<ElementSet<T, Triangle, D>> {
        let triangles = self
            .element_sets
            .get(label)
            .ok_or_else(|| eyre!("mesh has no element set labelled {:?}", label))?;
        ElementSet::from_elements_and_coordinates(triangles.clone(), self.coordinates.clone())
    }

    pub fn num_elements(&self) -> usize {
        self.element_sets.values().map(Vec::len).sum()
    }
}

/// Loads a [`SummitMesh`] from a summit file at the given path.
pub fn load_summit_from_file<T, const D: usize>(file_path: impl AsRef<Path>) -> eyre::Result<SummitMesh<T, D>>
where
    T: Real,
{
    let file_path = file_path.as_ref();
    let contents = std::fs::read_to_string(file_path).wrap_err_with(|| format!("failed to read file {:?}", file_path))?;
    load_summit_from_str(&contents).wrap_err("failed to load mesh from summit file")
}

/// Loads a [`SummitMesh`] by parsing the given string in the summit format.
pub fn load_summit_from_str<T, const D: usize>(input: &str) -> eyre::Result<SummitMesh<T, D>>
where
    T: Real,
{
    let mut tokens = Tokens::new(input);

    let dim: usize = tokens.parse("dimension")?;
    if dim != D {
        return Err(eyre!("mesh is {}-dimensional, expected dimension {}", dim, D));
    }
    let num_vertices: usize = tokens.parse("number of vertices")?;
    let num_elements: usize = tokens.parse("number of elements")?;
    let num_element_sets: usize = tokens.parse("number of element sets")?;

    let mut coordinates = VertexCoordinatesMap::new();
    for i in 0..num_vertices {
        let mut x = Vector::<T, D>::zeros();
        for d in 0..D {
            let x_d: f64 = tokens
                .parse("vertex coordinate")
                .wrap_err_with(|| format!("failed to read coordinates of vertex {}", i))?;
            x[d] = convert(x_d);
        }
        coordinates.insert(Vertex(i), x);
    }

    let mut element_sets: BTreeMap<String, Vec<Triangle>> = BTreeMap::new();
    for e in 0..num_elements {
        let num_element_vertices: usize = tokens
            .parse("element vertex count")
            .wrap_err_with(|| format!("failed to read element {}", e))?;

        let mut vertices = Vec::with_capacity(num_element_vertices);
        for _ in 0..num_element_vertices {
            let index: usize = tokens
                .parse("vertex index")
                .wrap_err_with(|| format!("failed to read vertices of element {}", e))?;
            if index >= num_vertices {
                return Err(eyre!(
                    "element {} refers to vertex {}, but the mesh only has {} vertices",
                    e,
                    index,
                    num_vertices
                ));
            }
            vertices.push(Vertex(index));
        }
        let label = tokens.next("element set label")?;

        if let [a, b, c] = vertices[..] {
            let triangle = Triangle::from_segments([Segment([a, b]), Segment([b, c]), Segment([c, a])])
                .wrap_err_with(|| format!("element {} is not a valid triangle", e))?;
            element_sets
                .entry(label.to_string())
                .or_default()
                .push(triangle);
        } else {
            warn!(
                "Skipping element {} with {} vertices: only triangles are supported.",
                e, num_element_vertices
            );
        }
    }

    if element_sets.len() != num_element_sets {
        warn!(
            "Summit header declares {} element sets, but {} were found.",
            num_element_sets,
            element_sets.len()
        );
    }

    Ok(SummitMesh {
        coordinates,
        element_sets,
    })
}

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_whitespace(),
        }
    }

    fn next(&mut self, what: &str) -> eyre::Result<&'a str> {
        self.iter
            .next()
            .ok_or_else(|| eyre!("unexpected end of input, expected {}", what))
    }

    fn parse<V>(&mut self, what: &str) -> eyre::Result<V>
    where
        V: FromStr,
        V::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self.next(what)?;
        token
            .parse()
            .wrap_err_with(|| format!("failed to parse {} from {:?}", what, token))
    }
}
