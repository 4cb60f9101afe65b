//! Triangulated sphere meshes rendered as **TikZ** markup for LaTeX documents.
//!
//! The pipeline generates an icosphere, orders its triangles back to front
//! for a fixed oblique isometric view, keeps the front-facing ones, colors
//! them greedily so that no two triangles sharing a vertex get the same
//! color, and writes three drawings:
//!
//! - the full wireframe (`\coordinate` + `\draw` over 3D coordinates),
//! - the front-facing wireframe projected to 2D and culled to the viewport,
//! - the front-facing coloring, each triangle tinted and marked with dots.
//!
//! ```no_run
//! use tikzsphere::{IndexedMesh, RenderConfig, Scene};
//!
//! # fn main() -> Result<(), tikzsphere::errors::Error> {
//! let config = RenderConfig::default();
//! let mesh = IndexedMesh::sphere(config.mesh.radius, config.mesh.h)?;
//! let scene = Scene::build(mesh, &config)?;
//! std::fs::write("sphere.tex", scene.to_tikz_wireframe())
//!     .map_err(tikzsphere::io::IoError::from)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: SVG preview of the coloring, built with the `svg` crate
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod coloring;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod order;
pub mod scene;
pub mod view;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use coloring::{ColorSet, Coloring, greedy_color};
pub use config::RenderConfig;
pub use mesh::IndexedMesh;
pub use scene::Scene;
