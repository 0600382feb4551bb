//! Plot and raster configuration.
//!
//! Both structures deserialize from TOML with every field optional:
//!
//! ```toml
//! [plot]
//! colormap = "plasma"
//! contour_levels = 20
//!
//! [raster]
//! width = 1024
//! height = 768
//! ```

use plainmesh_types::constants::{
    DEFAULT_CONTOUR_LEVELS, DEFAULT_RASTER_HEIGHT, DEFAULT_RASTER_WIDTH, DEFAULT_VIEW_MARGIN,
    DEFAULT_WIRE_ALPHA, DEFAULT_WIRE_COLOR, MAX_CONTOUR_LEVELS, MAX_RASTER_PIXELS,
};
use plainmesh_types::{MeshError, MeshResult};
use serde::{Deserialize, Serialize};

use crate::canvas::EdgeStyle;
use crate::colormap::Colormap;

/// Rendering options for [`plot`](crate::plot()).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Wireframe color as sRGB.
    pub wire_color: [u8; 3],

    /// Wireframe opacity (0.0 = invisible, 1.0 = opaque).
    pub wire_alpha: f32,

    /// Number of filled-contour bands for per-vertex fields.
    pub contour_levels: usize,

    /// Colormap for data fields.
    pub colormap: Colormap,

    /// View padding on each side as a fraction of the geometry extent.
    pub margin: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            wire_color: DEFAULT_WIRE_COLOR,
            wire_alpha: DEFAULT_WIRE_ALPHA,
            contour_levels: DEFAULT_CONTOUR_LEVELS,
            colormap: Colormap::default(),
            margin: DEFAULT_VIEW_MARGIN,
        }
    }
}

impl PlotOptions {
    /// Checks that every option is in range.
    pub fn validate(&self) -> MeshResult<()> {
        if !(0.0..=1.0).contains(&self.wire_alpha) {
            return Err(MeshError::InvalidConfig(format!(
                "wire_alpha must be within [0, 1], got {}",
                self.wire_alpha
            )));
        }
        if !(1..=MAX_CONTOUR_LEVELS).contains(&self.contour_levels) {
            return Err(MeshError::InvalidConfig(format!(
                "contour_levels must be within [1, {MAX_CONTOUR_LEVELS}], got {}",
                self.contour_levels
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(MeshError::InvalidConfig(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Wireframe stroke described by these options.
    pub fn edge_style(&self) -> EdgeStyle {
        EdgeStyle {
            color: self.wire_color,
            alpha: self.wire_alpha,
        }
    }
}

/// Size and background of a [`RasterCanvas`](crate::RasterCanvas).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    pub width: u32,
    pub height: u32,
    /// Background as sRGBA.
    pub background: [u8; 4],
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_RASTER_WIDTH,
            height: DEFAULT_RASTER_HEIGHT,
            background: [255, 255, 255, 255],
        }
    }
}

impl RasterOptions {
    pub fn validate(&self) -> MeshResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MeshError::InvalidConfig(format!(
                "raster size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_RASTER_PIXELS {
            return Err(MeshError::InvalidConfig(format!(
                "raster {}x{} exceeds {MAX_RASTER_PIXELS} pixels",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// A complete rendering configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub plot: PlotOptions,
    pub raster: RasterOptions,
}

impl RenderConfig {
    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(text: &str) -> MeshResult<Self> {
        let config: RenderConfig =
            toml::from_str(text).map_err(|e| MeshError::InvalidConfig(e.to_string()))?;
        config.plot.validate()?;
        config.raster.validate()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> MeshResult<String> {
        toml::to_string(self).map_err(|e| MeshError::InvalidConfig(e.to_string()))
    }
}
