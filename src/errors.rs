//! Error types for mesh generation, coloring and the render pipeline

use crate::config::ConfigError;
use crate::float_types::Real;
use crate::io::IoError;

/// Everything that can go wrong while building or validating a mesh
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// (InvalidRadius) The sphere radius is NaN, infinite or not positive
    #[error("(InvalidRadius) Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(Real),
    /// (InvalidElementSize) The target element size is NaN, infinite or not positive
    #[error("(InvalidElementSize) Element size must be finite and positive, got {0}")]
    InvalidElementSize(Real),
    /// (TooFine) Reaching the requested element size needs too many subdivision levels
    #[error("(TooFine) Element size {h} needs {levels} subdivision levels, at most {max} are supported")]
    TooFine { h: Real, levels: u32, max: u32 },
    /// (IndexOutOfRange) A triangle references a vertex that does not exist
    #[error("(IndexOutOfRange) Triangle {triangle} references vertex {index}, but the mesh has {len} vertices")]
    IndexOutOfRange { triangle: usize, index: usize, len: usize },
    /// (DegenerateTriangle) A triangle uses the same vertex twice
    #[error("(DegenerateTriangle) Triangle {triangle} repeats a vertex: {indices:?}")]
    DegenerateTriangle { triangle: usize, indices: [usize; 3] },
    /// (InvalidCoordinate) A vertex has a NaN or infinite coordinate
    #[error("(InvalidCoordinate) Vertex {0} has a NaN or infinite coordinate")]
    InvalidCoordinate(usize),
}

/// Failures of the greedy triangle coloring
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColoringError {
    /// Every color of the palette is already used around this triangle
    #[error("palette of {palette} colors exhausted at triangle {triangle} (vertices {indices:?})")]
    PaletteExhausted {
        triangle: usize,
        indices: [usize; 3],
        palette: u8,
    },
    /// The requested palette does not fit the per-vertex color set
    #[error("palette size must be between 1 and {max}, got {palette}")]
    InvalidPalette { palette: u8, max: u8 },
}

/// Top-level error of the render pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Coloring(#[from] ColoringError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
