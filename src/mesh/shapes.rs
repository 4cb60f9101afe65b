//! Icosahedron and icosphere generation for IndexedMesh

use crate::errors::MeshError;
use crate::float_types::{PHI, Real};
use crate::mesh::IndexedMesh;
use nalgebra::Point3;
use tracing::debug;

/// Deepest supported refinement: 20 * 4^8 triangles
pub const MAX_SUBDIVISION_LEVELS: u32 = 8;

/// 20 faces, counter-clockwise when viewed from outside
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

impl IndexedMesh {
    /// Regular icosahedron with circumradius `radius`, centered at the origin.
    pub fn icosahedron(radius: Real) -> Result<IndexedMesh, MeshError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::InvalidRadius(radius));
        }

        // normalise so the circum-radius is 1, then scale
        let inv_len = (1.0 + PHI * PHI).sqrt().recip();
        let a = inv_len * radius;
        let b = PHI * inv_len * radius;

        let vertices = vec![
            Point3::new(-a, b, 0.0),
            Point3::new(a, b, 0.0),
            Point3::new(-a, -b, 0.0),
            Point3::new(a, -b, 0.0),
            Point3::new(0.0, -a, b),
            Point3::new(0.0, a, b),
            Point3::new(0.0, -a, -b),
            Point3::new(0.0, a, -b),
            Point3::new(b, 0.0, -a),
            Point3::new(b, 0.0, a),
            Point3::new(-b, 0.0, -a),
            Point3::new(-b, 0.0, a),
        ];

        IndexedMesh::from_parts(vertices, ICOSAHEDRON_FACES.to_vec())
    }

    /// Edge length of the icosahedron with circumradius `radius`
    pub fn icosahedron_edge(radius: Real) -> Real {
        2.0 * radius / (1.0 + PHI * PHI).sqrt()
    }

    /// Number of midpoint subdivisions of the icosahedron needed so that
    /// edges are no longer than the target element size `h`.
    pub fn subdivision_levels(radius: Real, h: Real) -> Result<u32, MeshError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::InvalidRadius(radius));
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(MeshError::InvalidElementSize(h));
        }

        let ratio = Self::icosahedron_edge(radius) / h;
        if ratio <= 1.0 {
            return Ok(0);
        }

        let levels = ratio.log2().ceil();
        if levels > MAX_SUBDIVISION_LEVELS as Real {
            return Err(MeshError::TooFine {
                h,
                levels: levels.min(u32::MAX as Real) as u32,
                max: MAX_SUBDIVISION_LEVELS,
            });
        }
        Ok(levels as u32)
    }

    /// Triangulated sphere of `radius` around the origin with target element
    /// size `h`.
    ///
    /// Starts from the icosahedron and applies midpoint subdivision, pushing
    /// the new vertices back onto the sphere after every level. The result
    /// is closed and has `10 * 4^n + 2` vertices and `20 * 4^n` triangles
    /// for `n` levels.
    ///
    /// ```text
    /// h = 0.3, radius = 1  ->  n = 2, 162 vertices, 320 triangles
    /// ```
    pub fn sphere(radius: Real, h: Real) -> Result<IndexedMesh, MeshError> {
        let levels = Self::subdivision_levels(radius, h)?;
        let mut mesh = Self::icosahedron(radius)?;

        for _ in 0..levels {
            mesh = mesh.subdivide_once();
            mesh.project_to_sphere(radius);
        }

        debug!(
            radius,
            h,
            levels,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "generated sphere mesh"
        );
        Ok(mesh)
    }
}
