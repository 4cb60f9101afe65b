//! Painter's ordering of triangles and the front-face filter

use crate::float_types::Real;
use crate::mesh::{IndexedMesh, Triangle};
use crate::view::depth_key;
use nalgebra::Point3;

/// A triangle together with its centroid and depth key, computed once
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleRecord {
    pub centroid: Point3<Real>,
    pub indices: Triangle,
    pub key: Real,
}

impl TriangleRecord {
    pub fn new(mesh: &IndexedMesh, indices: Triangle) -> Self {
        let centroid = mesh.centroid(&indices);
        TriangleRecord {
            centroid,
            indices,
            key: depth_key(&centroid),
        }
    }

    /// Front-facing when the depth key strictly exceeds `threshold`
    #[inline]
    pub fn is_front_facing(&self, threshold: Real) -> bool {
        self.key > threshold
    }
}

/// All triangles of `mesh`, farthest first.
///
/// The sort is stable, so triangles with equal keys keep their mesh order.
pub fn depth_sorted(mesh: &IndexedMesh) -> Vec<TriangleRecord> {
    let mut records: Vec<_> = mesh
        .triangles()
        .iter()
        .map(|&t| TriangleRecord::new(mesh, t))
        .collect();
    records.sort_by(|a, b| a.key.total_cmp(&b.key));
    records
}

/// Keep only the front-facing records, preserving order
pub fn front_facing(records: &[TriangleRecord], threshold: Real) -> Vec<TriangleRecord> {
    records
        .iter()
        .filter(|r| r.is_front_facing(threshold))
        .copied()
        .collect()
}
