//! The fixed oblique isometric view: depth key, 2D projection and viewport culling.
//!
//! The view direction is `(1, -1, 1)`: points with a larger `x + z - y` are
//! closer to the viewer. Screen axes follow the TikZ axes declared by the
//! wireframe output, `x = (√3, -1)`, `y = (√3, 1)`, `z = (0, 2)`.

use crate::float_types::{Real, SQRT_3};
use nalgebra::{Point2, Point3};

/// Depth proxy along the view direction; larger is nearer
#[inline]
pub fn depth_key(p: &Point3<Real>) -> Real {
    p.x + p.z - p.y
}

/// Map a 3D point onto the 2D drawing plane
#[inline]
pub fn project(p: &Point3<Real>) -> Point2<Real> {
    Point2::new(SQRT_3 * p.x + SQRT_3 * p.y, -p.x + p.y + 2.0 * p.z)
}

/// Axis-aligned box of projected points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Bounds2 {
    /// Bounding box of a non-empty set of points
    pub fn from_points(points: &[Point2<Real>]) -> Option<Bounds2> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds2 {
            mins: *first,
            maxs: *first,
        };
        for p in rest {
            bounds.mins.x = bounds.mins.x.min(p.x);
            bounds.mins.y = bounds.mins.y.min(p.y);
            bounds.maxs.x = bounds.maxs.x.max(p.x);
            bounds.maxs.y = bounds.maxs.y.max(p.y);
        }
        Some(bounds)
    }
}

/// Square drawing region `[-half_extent, half_extent]²`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub half_extent: Real,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { half_extent: 1.5 }
    }
}

impl Viewport {
    pub const fn new(half_extent: Real) -> Self {
        Viewport { half_extent }
    }

    /// True when the box lies entirely outside the viewport.
    ///
    /// The viewport is closed: a box touching its edge is kept.
    pub fn culls(&self, bounds: &Bounds2) -> bool {
        let e = self.half_extent;
        bounds.mins.x > e || bounds.maxs.x < -e || bounds.mins.y > e || bounds.maxs.y < -e
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x0: Real, y0: Real, x1: Real, y1: Real) -> Bounds2 {
        Bounds2 {
            mins: Point2::new(x0, y0),
            maxs: Point2::new(x1, y1),
        }
    }

    #[test]
    fn projection_of_unit_axes_matches_tikz_axes() {
        assert_eq!(project(&Point3::new(1.0, 0.0, 0.0)), Point2::new(SQRT_3, -1.0));
        assert_eq!(project(&Point3::new(0.0, 1.0, 0.0)), Point2::new(SQRT_3, 1.0));
        assert_eq!(project(&Point3::new(0.0, 0.0, 1.0)), Point2::new(0.0, 2.0));
    }

    #[test]
    fn depth_key_follows_view_direction() {
        assert_eq!(depth_key(&Point3::new(1.0, -1.0, 1.0)), 3.0);
        assert_eq!(depth_key(&Point3::new(0.0, 1.0, 0.0)), -1.0);
    }

    #[test]
    fn boxes_touching_the_edge_are_kept() {
        let vp = Viewport::default();
        assert!(!vp.culls(&bounds(1.5, 0.0, 2.0, 0.5)));
        assert!(!vp.culls(&bounds(-2.0, -2.0, -1.5, -1.5)));
        assert!(vp.culls(&bounds(1.5001, 0.0, 2.0, 0.5)));
        assert!(vp.culls(&bounds(0.0, -3.0, 0.5, -1.5001)));
    }

    #[test]
    fn straddling_boxes_are_kept() {
        let vp = Viewport::default();
        let b = bounds(-2.0, -2.0, 2.0, 2.0);
        assert!(!vp.culls(&b));
        assert!(!vp.culls(&bounds(1.0, -2.0, 1.6, -1.4)));
    }

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert!(Bounds2::from_points(&[]).is_none());
    }
}
