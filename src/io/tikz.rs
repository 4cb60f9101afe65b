//! TikZ export of a [`Scene`]

use super::{format_fixed, format_real};
use crate::float_types::Real;
use crate::scene::Scene;
use nalgebra::Point2;

/// Isometric axes of the full wireframe, matching [`crate::view::project`]
const ISOMETRIC_AXES: &str = "[x={(1.732cm,-1cm)},y={(1.732cm,1cm)},z={(0,2cm)}]";

/// Distance between neighbouring marker dots
pub(super) const MARKER_SPACING: Real = 0.04;

/// Radius of a single marker dot
pub(super) const MARKER_DOT_RADIUS: Real = 0.012;

/// Fill tints of colors `1..=7`; higher colors are filled white
pub const MARKER_COLORS: [&str; 7] = [
    "red!25",
    "blue!25",
    "green!25",
    "yellow!40",
    "orange!30",
    "violet!25",
    "cyan!25",
];

/// Dot offsets of the marker for `color`, in units of [`MARKER_SPACING`].
///
/// Colors `1..=7` each have a distinct arrangement, like dice pips. Any
/// other color has no marker.
pub fn marker_offsets(color: u8) -> &'static [(Real, Real)] {
    match color {
        1 => &[(0.0, 0.0)],
        2 => &[(-0.5, 0.0), (0.5, 0.0)],
        3 => &[(0.0, 0.577), (-0.5, -0.289), (0.5, -0.289)],
        4 => &[(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)],
        5 => &[(-0.5, -0.5), (0.5, -0.5), (0.0, 0.0), (0.5, 0.5), (-0.5, 0.5)],
        6 => &[
            (-0.5, -1.0),
            (-0.5, 0.0),
            (-0.5, 1.0),
            (0.5, -1.0),
            (0.5, 0.0),
            (0.5, 1.0),
        ],
        7 => &[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.5, 0.866),
            (-0.5, 0.866),
            (-1.0, 0.0),
            (-0.5, -0.866),
            (0.5, -0.866),
        ],
        _ => &[],
    }
}

fn fill_for(color: u8) -> &'static str {
    match color {
        1..=7 => MARKER_COLORS[color as usize - 1],
        _ => "white",
    }
}

fn point(p: &Point2<Real>) -> String {
    format!("({},{})", format_fixed(p.x), format_fixed(p.y))
}

fn path(points: &[Point2<Real>; 3]) -> String {
    format!(
        "{} -- {} -- {} -- cycle",
        point(&points[0]),
        point(&points[1]),
        point(&points[2])
    )
}

impl Scene {
    fn viewport_clip(&self) -> String {
        let e = self.viewport().half_extent;
        format!(
            "\\clip ({},{}) rectangle ({},{});\n",
            format_real(-e),
            format_real(-e),
            format_real(e),
            format_real(e)
        )
    }

    /// Every triangle of the mesh, drawn farthest first over named 3D
    /// coordinates in the isometric axes.
    ///
    /// ```text
    /// \begin{tikzpicture}[x={(1.732cm,-1cm)},y={(1.732cm,1cm)},z={(0,2cm)}]
    /// \coordinate (v0) at (-0.5257311121191336,0.85065080835204,0.0);
    /// ...
    /// \draw[fill=white, fill opacity=0.8] (v0) -- (v11) -- (v5) -- cycle;
    /// ...
    /// \end{tikzpicture}
    /// ```
    pub fn to_tikz_wireframe(&self) -> String {
        let mut out = format!("\\begin{{tikzpicture}}{ISOMETRIC_AXES}\n");

        for (i, p) in self.mesh().vertices().iter().enumerate() {
            out.push_str(&format!(
                "\\coordinate (v{i}) at ({},{},{});\n",
                format_real(p.x),
                format_real(p.y),
                format_real(p.z)
            ));
        }

        let opacity = format_real(self.fill_opacity());
        for record in self.depth_sorted() {
            let [i, j, k] = record.indices;
            out.push_str(&format!(
                "\\draw[fill=white, fill opacity={opacity}] (v{i}) -- (v{j}) -- (v{k}) -- cycle;\n"
            ));
        }

        out.push_str("\\end{tikzpicture}");
        out
    }

    /// Front-facing triangles inside the viewport, projected to 2D.
    pub fn to_tikz_front_wireframe(&self) -> String {
        let mut out = String::from("\\begin{tikzpicture}\n");
        out.push_str(&self.viewport_clip());

        let opacity = format_real(self.fill_opacity());
        for tri in self.visible() {
            out.push_str(&format!(
                "\\draw[fill=white, fill opacity={opacity}] {};\n",
                path(&tri.points)
            ));
        }

        out.push_str("\\end{tikzpicture}");
        out
    }

    /// Front-facing triangles inside the viewport, filled by their greedy
    /// color and decorated with the color's dot marker at the centroid.
    ///
    /// Colors past the tinted range are filled white and carry no marker.
    pub fn to_tikz_coloring(&self) -> String {
        let mut out = String::from("\\begin{tikzpicture}\n");
        out.push_str(&self.viewport_clip());

        let radius = format_real(MARKER_DOT_RADIUS);
        for tri in self.visible() {
            out.push_str(&format!(
                "\\filldraw[fill={}] {};\n",
                fill_for(tri.color),
                path(&tri.points)
            ));

            let offsets = marker_offsets(tri.color);
            if offsets.is_empty() {
                continue;
            }
            out.push_str(&format!("\\begin{{scope}}[shift={{{}}}]\n", point(&tri.center)));
            for &(dx, dy) in offsets {
                out.push_str(&format!(
                    "\\fill ({},{}) circle[radius={radius}];\n",
                    format_fixed(dx * MARKER_SPACING),
                    format_fixed(dy * MARKER_SPACING)
                ));
            }
            out.push_str("\\end{scope}\n");
        }

        out.push_str("\\end{tikzpicture}");
        out
    }
}
