use super::tikz::{MARKER_DOT_RADIUS, MARKER_SPACING};
use super::{format_fixed, marker_offsets};
use crate::float_types::Real;
use crate::scene::Scene;
use nalgebra::Point2;
use ::svg::Document;
use ::svg::node::element::{Circle, Group, Polygon};

/// Approximate sRGB values of the TikZ tints
const SVG_FILLS: [&str; 7] = [
    "#ffbfbf", "#bfbfff", "#bfffbf", "#ffff99", "#ffdfb3", "#dfbfdf", "#bfffff",
];

// SVG's y axis points down
fn svg_point(p: &Point2<Real>) -> String {
    format!("{},{}", format_fixed(p.x), format_fixed(-p.y))
}

impl Scene {
    /// SVG preview of [`Scene::to_tikz_coloring`].
    ///
    /// The document spans the viewport; one unit is one TikZ centimetre.
    pub fn to_svg(&self) -> String {
        let e = self.viewport().half_extent;
        let side = 2.0 * e;
        let mut document = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    format_fixed(-e),
                    format_fixed(-e),
                    format_fixed(side),
                    format_fixed(side)
                ),
            )
            .set("width", format!("{}cm", format_fixed(side)))
            .set("height", format!("{}cm", format_fixed(side)));

        for tri in self.visible() {
            let fill = match tri.color {
                c @ 1..=7 => SVG_FILLS[c as usize - 1],
                _ => "white",
            };
            let points = tri
                .points
                .iter()
                .map(svg_point)
                .collect::<Vec<_>>()
                .join(" ");

            document = document.add(
                Polygon::new()
                    .set("points", points)
                    .set("fill", fill)
                    .set("stroke", "black")
                    .set("stroke-width", "0.01")
                    .set("stroke-linejoin", "round"),
            );

            let offsets = marker_offsets(tri.color);
            if offsets.is_empty() {
                continue;
            }
            let mut group = Group::new().set(
                "transform",
                format!(
                    "translate({} {})",
                    format_fixed(tri.center.x),
                    format_fixed(-tri.center.y)
                ),
            );
            for &(dx, dy) in offsets {
                group = group.add(
                    Circle::new()
                        .set("cx", format_fixed(dx * MARKER_SPACING))
                        .set("cy", format_fixed(-dy * MARKER_SPACING))
                        .set("r", format_fixed(MARKER_DOT_RADIUS)),
                );
            }
            document = document.add(group);
        }

        document.to_string()
    }
}
