//! Render configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard unit sphere with `h = 0.3`, the 0.6 front-face threshold, the
//! `[-1.5, 1.5]²` viewport and a 49-color palette.

use crate::coloring::{DEFAULT_PALETTE, MAX_PALETTE};
use crate::float_types::Real;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Sphere radius
    pub radius: Real,
    /// Target element size (maximum edge length)
    pub h: Real,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            h: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Triangles whose centroid depth key exceeds this are front-facing
    pub front_threshold: Real,
    /// Half the side of the square viewport used for culling
    pub viewport_half_extent: Real,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            front_threshold: 0.6,
            viewport_half_extent: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringConfig {
    /// Number of colors the greedy assignment may use
    pub palette: u8,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub wireframe: String,
    pub front_wireframe: String,
    pub coloring: String,
    pub svg: String,
    /// Fill opacity of wireframe triangles
    pub fill_opacity: Real,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            wireframe: "sphere.tex".into(),
            front_wireframe: "sphere-front.tex".into(),
            coloring: "sphere-colored.tex".into(),
            svg: "sphere-colored.svg".into(),
            fill_opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub mesh: MeshConfig,
    pub view: ViewConfig,
    pub coloring: ColoringConfig,
    pub output: OutputConfig,
}

impl RenderConfig {
    /// Parse a TOML document; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<RenderConfig, ConfigError> {
        let config: RenderConfig = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load_from_path(path: &Path) -> Result<RenderConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize every section, defaults included
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mesh.radius", self.mesh.radius),
            ("mesh.h", self.mesh.h),
            ("view.viewport_half_extent", self.view.viewport_half_extent),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        if !self.view.front_threshold.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "view.front_threshold must be finite, got {}",
                self.view.front_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.output.fill_opacity) {
            return Err(ConfigError::ValidationError(format!(
                "output.fill_opacity must be within [0, 1], got {}",
                self.output.fill_opacity
            )));
        }

        if self.coloring.palette == 0 || self.coloring.palette > MAX_PALETTE {
            return Err(ConfigError::ValidationError(format!(
                "coloring.palette must be between 1 and {MAX_PALETTE}, got {}",
                self.coloring.palette
            )));
        }

        let names = [
            &self.output.wireframe,
            &self.output.front_wireframe,
            &self.output.coloring,
            &self.output.svg,
        ];
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "output file names must not be empty".into(),
            ));
        }

        Ok(())
    }
}
