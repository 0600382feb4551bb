//! Canvas trait and the value types passed to it.
//!
//! A canvas is the drawing surface a plot is rendered onto. It is always
//! passed explicitly; there is no process-wide "current" canvas.

use plainmesh_mesh::{Bounds, Mesh};
use plainmesh_types::constants::DEGENERATE_HALF_EXTENT;
use plainmesh_types::MeshResult;

use crate::colormap::Colormap;

/// Visible data-space rectangle. Canvases render it with equal aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl ViewBox {
    /// Pads `bounds` by `margin` times its extent on each side.
    ///
    /// An axis with zero extent is padded by a fixed half-width instead.
    pub fn around(bounds: Bounds, margin: f64) -> Self {
        let pad = |lo: f64, hi: f64| {
            let d = margin * (hi - lo);
            if hi - lo > 0.0 {
                [lo - d, hi + d]
            } else {
                [lo - DEGENERATE_HALF_EXTENT, hi + DEGENERATE_HALF_EXTENT]
            }
        };
        Self {
            x: pad(bounds.min[0], bounds.max[0]),
            y: pad(bounds.min[1], bounds.max[1]),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }
}

/// Wireframe stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub color: [u8; 3],
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

/// Linear value-to-`[0, 1]` mapping used for flat per-triangle colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    /// Spans the finite values of `values`. No finite values gives `[0, 0]`.
    pub fn spanning(values: &[f64]) -> Self {
        let (min, max) = finite_range(values).unwrap_or((0.0, 0.0));
        Self { min, max }
    }

    /// Maps `v` into `[0, 1]`. A constant scale maps everything to `0.5`.
    pub fn normalize(&self, v: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            ((v - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

/// Evenly spaced filled-contour bands.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevels {
    /// Band boundaries, ascending; `n` bands have `n + 1` boundaries.
    pub boundaries: Vec<f64>,
}

impl ContourLevels {
    /// `n` equal bands between `min` and `max`. A constant range
    /// collapses to a single band.
    pub fn linear(min: f64, max: f64, n: usize) -> Self {
        let n = if max > min { n.max(1) } else { 1 };
        let step = (max - min) / n as f64;
        let boundaries = (0..=n).map(|i| min + step * i as f64).collect();
        Self { boundaries }
    }

    /// Bands spanning the finite values of `values`.
    pub fn spanning(values: &[f64], n: usize) -> Self {
        let (min, max) = finite_range(values).unwrap_or((0.0, 0.0));
        Self::linear(min, max, n)
    }

    #[inline]
    pub fn band_count(&self) -> usize {
        self.boundaries.len().saturating_sub(1).max(1)
    }

    /// Index of the band containing `v`; values outside the range clamp
    /// to the first or last band.
    pub fn band(&self, v: f64) -> usize {
        let n = self.band_count();
        let (lo, hi) = (self.boundaries[0], self.boundaries[self.boundaries.len() - 1]);
        if hi <= lo || v.is_nan() {
            return 0;
        }
        let f = (v - lo) / (hi - lo) * n as f64;
        (f.floor().max(0.0) as usize).min(n - 1)
    }

    /// Colormap position of band `i`: its midpoint on `[0, 1]`.
    #[inline]
    pub fn band_position(&self, i: usize) -> f64 {
        (i as f64 + 0.5) / self.band_count() as f64
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// A drawing surface that plots are rendered onto.
///
/// # Implementations
/// - [`RecordingCanvas`]: Records each call
/// - [`RasterCanvas`](crate::RasterCanvas): RGBA raster with PNG output
pub trait Canvas {
    /// Sets the visible data-space rectangle. Called before any drawing.
    fn set_view(&mut self, view: &ViewBox) -> MeshResult<()>;

    /// Fills the mesh with banded contours of a per-vertex field,
    /// interpolated linearly across each triangle.
    fn fill_contours(
        &mut self,
        mesh: &Mesh,
        values: &[f64],
        levels: &ContourLevels,
        colormap: Colormap,
    ) -> MeshResult<()>;

    /// Fills each triangle with one color from a per-triangle field.
    fn fill_triangles(
        &mut self,
        mesh: &Mesh,
        values: &[f64],
        scale: &ColorScale,
        colormap: Colormap,
    ) -> MeshResult<()>;

    /// Strokes every unique mesh edge.
    fn draw_edges(&mut self, mesh: &Mesh, style: &EdgeStyle) -> MeshResult<()>;

    /// Returns the canvas name.
    fn name(&self) -> &str;
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    SetView(ViewBox),
    FillContours {
        values: usize,
        bands: usize,
        colormap: Colormap,
    },
    FillTriangles {
        values: usize,
        colormap: Colormap,
    },
    DrawEdges {
        edges: usize,
        style: EdgeStyle,
    },
}

/// Canvas that records calls instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Calls in the order they were made.
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn set_view(&mut self, view: &ViewBox) -> MeshResult<()> {
        self.calls.push(DrawCall::SetView(*view));
        Ok(())
    }

    fn fill_contours(
        &mut self,
        _mesh: &Mesh,
        values: &[f64],
        levels: &ContourLevels,
        colormap: Colormap,
    ) -> MeshResult<()> {
        self.calls.push(DrawCall::FillContours {
            values: values.len(),
            bands: levels.band_count(),
            colormap,
        });
        Ok(())
    }

    fn fill_triangles(
        &mut self,
        _mesh: &Mesh,
        values: &[f64],
        _scale: &ColorScale,
        colormap: Colormap,
    ) -> MeshResult<()> {
        self.calls.push(DrawCall::FillTriangles {
            values: values.len(),
            colormap,
        });
        Ok(())
    }

    fn draw_edges(&mut self, mesh: &Mesh, style: &EdgeStyle) -> MeshResult<()> {
        self.calls.push(DrawCall::DrawEdges {
            edges: mesh.edges().len(),
            style: *style,
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
