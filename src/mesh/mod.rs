//! `IndexedMesh`: shared vertex positions plus triangles as index triples

use crate::errors::MeshError;
use crate::float_types::Real;
use nalgebra::Point3;
use std::collections::HashMap;
use std::num::NonZeroU32;

/// Shape generation functions for IndexedMesh
pub mod shapes;

/// A triangle as three indices into the vertex array
pub type Triangle = [usize; 3];

/// An immutable triangle mesh with shared vertices.
///
/// Vertices are stored once and referenced by index from every triangle that
/// touches them, which is what the greedy coloring relies on to find
/// triangles sharing a vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    vertices: Vec<Point3<Real>>,
    triangles: Vec<Triangle>,
}

impl IndexedMesh {
    /// Build a mesh from raw vertex positions and triangles.
    ///
    /// Every index must point at an existing vertex, no triangle may repeat a
    /// vertex, and every coordinate must be finite.
    pub fn from_parts(
        vertices: Vec<Point3<Real>>,
        triangles: Vec<Triangle>,
    ) -> Result<IndexedMesh, MeshError> {
        if let Some(bad) = vertices
            .iter()
            .position(|p| p.coords.iter().any(|c| !c.is_finite()))
        {
            return Err(MeshError::InvalidCoordinate(bad));
        }

        let len = vertices.len();
        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= len) {
                return Err(MeshError::IndexOutOfRange { triangle, index, len });
            }
            let [a, b, c] = *indices;
            if a == b || b == c || c == a {
                return Err(MeshError::DegenerateTriangle {
                    triangle,
                    indices: *indices,
                });
            }
        }

        Ok(IndexedMesh { vertices, triangles })
    }

    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Arithmetic mean of the triangle's three vertex positions
    pub fn centroid(&self, triangle: &Triangle) -> Point3<Real> {
        let [a, b, c] = triangle.map(|i| self.vertices[i].coords);
        Point3::from((a + b + c) / 3.0)
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_usage().len()
    }

    /// True when every edge is shared by exactly two triangles
    pub fn is_closed(&self) -> bool {
        !self.triangles.is_empty() && self.edge_usage().values().all(|&n| n == 2)
    }

    fn edge_usage(&self) -> HashMap<(usize, usize), usize> {
        let mut usage = HashMap::new();
        for &[a, b, c] in &self.triangles {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *usage.entry((u.min(v), u.max(v))).or_insert(0) += 1;
            }
        }
        usage
    }

    /// Subdivide every triangle `levels` times, returning a new mesh.
    /// Uses midpoint subdivision: each triangle is split into 4 smaller triangles.
    pub fn subdivide_triangles(&self, levels: NonZeroU32) -> IndexedMesh {
        let mut current = self.clone();
        for _ in 0..levels.get() {
            current = current.subdivide_once();
        }
        current
    }

    /// Perform one level of midpoint subdivision
    pub(crate) fn subdivide_once(&self) -> IndexedMesh {
        let mut vertices = self.vertices.clone();
        let mut triangles = Vec::with_capacity(self.triangles.len() * 4);

        // (min_vertex, max_vertex) -> midpoint index
        let mut midpoints = HashMap::new();

        for &[a, b, c] in &self.triangles {
            let ab = Self::midpoint(&mut vertices, &mut midpoints, a, b);
            let bc = Self::midpoint(&mut vertices, &mut midpoints, b, c);
            let ca = Self::midpoint(&mut vertices, &mut midpoints, c, a);

            triangles.push([a, ab, ca]);
            triangles.push([ab, b, bc]);
            triangles.push([ca, bc, c]);
            triangles.push([ab, bc, ca]);
        }

        IndexedMesh { vertices, triangles }
    }

    /// Get or create the midpoint vertex of an edge
    fn midpoint(
        vertices: &mut Vec<Point3<Real>>,
        midpoints: &mut HashMap<(usize, usize), usize>,
        v1: usize,
        v2: usize,
    ) -> usize {
        let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };
        *midpoints.entry(key).or_insert_with(|| {
            let mid = Point3::from((vertices[v1].coords + vertices[v2].coords) / 2.0);
            vertices.push(mid);
            vertices.len() - 1
        })
    }

    /// Push every vertex radially onto the sphere of `radius` around the origin
    pub(crate) fn project_to_sphere(&mut self, radius: Real) {
        for p in &mut self.vertices {
            *p = Point3::from(p.coords.normalize() * radius);
        }
    }
}
