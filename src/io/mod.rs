//! Markup exporters and whole-file writes

use crate::config::OutputConfig;
use crate::float_types::Real;
use crate::scene::Scene;
use std::path::{Path, PathBuf};
use tracing::info;

mod tikz;

#[cfg(feature = "svg-io")]
mod svg;

pub use tikz::{MARKER_COLORS, marker_offsets};

/// I/O errors of the exporters.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    /// Writing an output file failed
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Creating the output directory failed
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Write { path, source } => write!(f, "Could not write {}: {source}", path.display()),
            CreateDir { path, source } => {
                write!(f, "Could not create directory {}: {source}", path.display())
            },
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::Write { source, .. } | IoError::CreateDir { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

/// Shortest decimal form that reads back to the same value and always
/// carries a decimal point or an exponent: `1.0`, `-0.5`, `1e-05`, `1e+16`.
pub fn format_real(v: Real) -> String {
    let magnitude = v.abs();
    if v.is_finite() && v != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let s = format!("{v:e}");
        if let Some((mantissa, exponent)) = s.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        s
    } else if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Fixed six-decimal form used for projected coordinates, without `-0.000000`
pub fn format_fixed(v: Real) -> String {
    let s = format!("{v:.6}");
    if s.trim_start_matches('-').bytes().all(|b| b == b'0' || b == b'.') {
        s.trim_start_matches('-').to_string()
    } else {
        s
    }
}

/// Write `contents` to `path` as a whole file
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), IoError> {
    std::fs::write(path, contents).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Render every artifact of `scene` and write it into `out_dir`.
///
/// Returns the written paths in order: full wireframe, front wireframe,
/// front coloring and, with `svg`, the SVG preview.
pub fn write_all(
    scene: &Scene,
    output: &OutputConfig,
    out_dir: &Path,
    svg: bool,
) -> Result<Vec<PathBuf>, IoError> {
    std::fs::create_dir_all(out_dir).map_err(|source| IoError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut artifacts = vec![
        (out_dir.join(&output.wireframe), scene.to_tikz_wireframe()),
        (
            out_dir.join(&output.front_wireframe),
            scene.to_tikz_front_wireframe(),
        ),
        (out_dir.join(&output.coloring), scene.to_tikz_coloring()),
    ];

    if svg {
        artifacts.extend(svg_preview(scene, out_dir.join(&output.svg)));
    }

    for (path, contents) in &artifacts {
        write_artifact(path, contents)?;
    }
    Ok(artifacts.into_iter().map(|(path, _)| path).collect())
}

#[cfg(feature = "svg-io")]
fn svg_preview(scene: &Scene, path: PathBuf) -> Option<(PathBuf, String)> {
    Some((path, scene.to_svg()))
}

#[cfg(not(feature = "svg-io"))]
fn svg_preview(_scene: &Scene, _path: PathBuf) -> Option<(PathBuf, String)> {
    tracing::warn!("SVG preview requested, but the svg-io feature is disabled");
    None
}
