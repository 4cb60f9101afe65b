//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use nalgebra::Point3;
use tikzsphere::{
    IndexedMesh, RenderConfig, Scene,
    float_types::Real,
    mesh::Triangle,
    view::{Bounds2, Viewport},
};

/// True when two triangles have at least one vertex in common
pub fn shares_vertex(a: &Triangle, b: &Triangle) -> bool {
    a.iter().any(|v| b.contains(v))
}

/// The default unit sphere (h = 0.3)
pub fn default_sphere() -> IndexedMesh {
    let config = RenderConfig::default();
    IndexedMesh::sphere(config.mesh.radius, config.mesh.h).unwrap()
}

pub fn default_scene() -> Scene {
    Scene::build(default_sphere(), &RenderConfig::default()).unwrap()
}

/// One front-facing triangle spanning the x and z unit axes:
/// (0,0,0), (1,0,0), (0,0,1)
pub fn single_triangle() -> IndexedMesh {
    IndexedMesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap()
}

/// Eight front-facing triangles fanned around (0.4, 0, 0.4) in the y = 0
/// plane, so every triangle conflicts with every other one.
pub fn fan_of_eight() -> IndexedMesh {
    let ring = [
        (0.5, 0.4),
        (0.5, 0.5),
        (0.4, 0.5),
        (0.3, 0.5),
        (0.3, 0.4),
        (0.3, 0.3),
        (0.4, 0.3),
        (0.5, 0.3),
    ];
    let mut vertices = vec![Point3::new(0.4, 0.0, 0.4)];
    vertices.extend(ring.iter().map(|&(x, z)| Point3::new(x, 0.0, z)));
    let triangles = (0..8).map(|i| [0, i + 1, (i + 1) % 8 + 1]).collect();
    IndexedMesh::from_parts(vertices, triangles).unwrap()
}

/// True when the box lies entirely inside the viewport
pub fn fully_inside(viewport: &Viewport, bounds: &Bounds2) -> bool {
    let e = viewport.half_extent;
    bounds.mins.x >= -e && bounds.maxs.x <= e && bounds.mins.y >= -e && bounds.maxs.y <= e
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
