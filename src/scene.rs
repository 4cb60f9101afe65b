//! The render pipeline, computed once and shared by every renderer.
//!
//! ```text
//! mesh -> depth-sorted records -> front-facing records -> greedy coloring
//!      -> projected, viewport-culled front triangles
//! ```

use crate::coloring::{Coloring, greedy_color};
use crate::config::RenderConfig;
use crate::errors::ColoringError;
use crate::float_types::Real;
use crate::mesh::{IndexedMesh, Triangle};
use crate::order::{TriangleRecord, depth_sorted, front_facing};
use crate::view::{Bounds2, Viewport, project};
use nalgebra::Point2;
use tracing::debug;

/// A front-facing triangle on the drawing plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub indices: Triangle,
    pub points: [Point2<Real>; 3],
    /// Projection of the 3D centroid, where the color marker is drawn
    pub center: Point2<Real>,
    pub bounds: Bounds2,
    pub color: u8,
}

/// Everything the renderers need, derived from one mesh
#[derive(Debug, Clone)]
pub struct Scene {
    mesh: IndexedMesh,
    sorted: Vec<TriangleRecord>,
    front: Vec<TriangleRecord>,
    coloring: Coloring,
    front_colors: Vec<u8>,
    visible: Vec<ProjectedTriangle>,
    viewport: Viewport,
    fill_opacity: Real,
}

impl Scene {
    /// Run the pipeline on `mesh`.
    ///
    /// Front-facing triangles are colored front-most first, the reverse of
    /// their drawing order.
    pub fn build(mesh: IndexedMesh, config: &RenderConfig) -> Result<Scene, ColoringError> {
        let sorted = depth_sorted(&mesh);
        let front = front_facing(&sorted, config.view.front_threshold);

        let visitation: Vec<Triangle> = front.iter().rev().map(|r| r.indices).collect();
        let coloring = greedy_color(&visitation, config.coloring.palette)?;
        let mut front_colors = coloring.colors().to_vec();
        front_colors.reverse();

        let viewport = Viewport::new(config.view.viewport_half_extent);
        let visible: Vec<ProjectedTriangle> = front
            .iter()
            .zip(&front_colors)
            .filter_map(|(record, &color)| {
                let points = record.indices.map(|i| project(&mesh.vertices()[i]));
                let bounds = Bounds2::from_points(&points)?;
                (!viewport.culls(&bounds)).then(|| ProjectedTriangle {
                    indices: record.indices,
                    points,
                    center: project(&record.centroid),
                    bounds,
                    color,
                })
            })
            .collect();

        debug!(
            triangles = sorted.len(),
            front = front.len(),
            visible = visible.len(),
            culled = front.len() - visible.len(),
            "scene built"
        );

        Ok(Scene {
            mesh,
            sorted,
            front,
            coloring,
            front_colors,
            visible,
            viewport,
            fill_opacity: config.output.fill_opacity,
        })
    }

    pub const fn mesh(&self) -> &IndexedMesh {
        &self.mesh
    }

    /// Every triangle, farthest first
    pub fn depth_sorted(&self) -> &[TriangleRecord] {
        &self.sorted
    }

    /// Front-facing triangles, farthest first
    pub fn front(&self) -> &[TriangleRecord] {
        &self.front
    }

    /// Colors in visitation order (front-most first)
    pub const fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    /// Colors aligned with [`Scene::front`]
    pub fn front_colors(&self) -> &[u8] {
        &self.front_colors
    }

    /// Projected front-facing triangles that survive viewport culling,
    /// farthest first
    pub fn visible(&self) -> &[ProjectedTriangle] {
        &self.visible
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn fill_opacity(&self) -> Real {
        self.fill_opacity
    }
}
