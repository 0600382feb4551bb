//! Raster canvas.
//!
//! Draws into an RGBA image. Data space maps to pixels with equal
//! aspect, centered, y pointing up. Triangles are filled by testing
//! pixel centers against barycentric coordinates; edges are stroked
//! one pixel wide with alpha blending.

use std::path::Path;

use image::{ImageError, Rgba, RgbaImage};
use plainmesh_mesh::Mesh;
use plainmesh_types::{MeshError, MeshResult};
use tracing::info;

use crate::canvas::{Canvas, ColorScale, ContourLevels, EdgeStyle, ViewBox};
use crate::colormap::Colormap;
use crate::options::RasterOptions;

/// Tolerance on barycentric weights so that shared edges leave no gaps.
const INSIDE_EPS: f64 = 1e-9;

/// Data-space to pixel-space mapping.
#[derive(Debug, Clone, Copy)]
struct Transform {
    scale: f64,
    x_min: f64,
    y_max: f64,
    offset: [f64; 2],
}

impl Transform {
    fn fit(view: &ViewBox, width: u32, height: u32) -> MeshResult<Self> {
        let (w, h) = (view.width(), view.height());
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(MeshError::InvalidConfig(format!(
                "view must have positive finite extent, got {w} x {h}"
            )));
        }
        let scale = (width as f64 / w).min(height as f64 / h);
        Ok(Self {
            scale,
            x_min: view.x[0],
            y_max: view.y[1],
            offset: [
                (width as f64 - w * scale) / 2.0,
                (height as f64 - h * scale) / 2.0,
            ],
        })
    }

    #[inline]
    fn apply(&self, p: [f64; 2]) -> [f64; 2] {
        [
            self.offset[0] + (p[0] - self.x_min) * self.scale,
            self.offset[1] + (self.y_max - p[1]) * self.scale,
        ]
    }
}

/// Canvas that rasterizes into an in-memory RGBA image.
pub struct RasterCanvas {
    image: RgbaImage,
    transform: Option<Transform>,
}

impl RasterCanvas {
    /// Creates a canvas filled with the background color.
    pub fn new(options: &RasterOptions) -> MeshResult<Self> {
        options.validate()?;
        Ok(Self {
            image: RgbaImage::from_pixel(options.width, options.height, Rgba(options.background)),
            transform: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at column `x`, row `y` (row 0 at the top).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Pixel position of a data-space point, once a view is set.
    pub fn to_pixel(&self, p: [f64; 2]) -> Option<[f64; 2]> {
        self.transform.map(|t| t.apply(p))
    }

    /// Writes the image as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> MeshResult<()> {
        let path = path.as_ref();
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| match e {
                ImageError::IoError(io) => MeshError::Io(io),
                other => MeshError::Image(other.to_string()),
            })?;
        info!(path = %path.display(), width = self.width(), height = self.height(), "saved plot");
        Ok(())
    }

    fn transform(&self) -> MeshResult<Transform> {
        self.transform.ok_or_else(|| {
            MeshError::InvalidConfig("set_view must be called before drawing".into())
        })
    }

    /// Fills one triangle, coloring each covered pixel by `shade` applied to
    /// the pixel's barycentric weights.
    fn fill_triangle(
        &mut self,
        transform: &Transform,
        corners: [[f64; 2]; 3],
        mut shade: impl FnMut([f64; 3]) -> [u8; 3],
    ) {
        let [a, b, c] = corners.map(|p| transform.apply(p));
        let area = edge_function(a, b, c);
        if area.abs() < f64::EPSILON {
            return;
        }

        let (w, h) = (self.image.width() as f64, self.image.height() as f64);
        let x0 = a[0].min(b[0]).min(c[0]).floor().max(0.0) as u32;
        let y0 = a[1].min(b[1]).min(c[1]).floor().max(0.0) as u32;
        let x1 = a[0].max(b[0]).max(c[0]).ceil().min(w) as u32;
        let y1 = a[1].max(b[1]).max(c[1]).ceil().min(h) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                let p = [px as f64 + 0.5, py as f64 + 0.5];
                let weights = [
                    edge_function(b, c, p) / area,
                    edge_function(c, a, p) / area,
                    edge_function(a, b, p) / area,
                ];
                if weights.iter().all(|&wt| wt >= -INSIDE_EPS) {
                    let [r, g, bl] = shade(weights);
                    self.image.put_pixel(px, py, Rgba([r, g, bl, 255]));
                }
            }
        }
    }

    fn blend(&mut self, x: i64, y: i64, color: [u8; 3], alpha: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let a = alpha.clamp(0.0, 1.0);
        for ch in 0..3 {
            let mixed = color[ch] as f32 * a + dst.0[ch] as f32 * (1.0 - a);
            dst.0[ch] = mixed.round() as u8;
        }
        dst.0[3] = (255.0 * a + dst.0[3] as f32 * (1.0 - a)).round() as u8;
    }

    fn stroke(&mut self, from: [f64; 2], to: [f64; 2], style: &EdgeStyle) {
        let (dx, dy) = (to[0] - from[0], to[1] - from[1]);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        let mut last = None;
        for s in 0..=steps {
            let t = s as f64 / steps as f64;
            let px = (from[0] + dx * t).floor() as i64;
            let py = (from[1] + dy * t).floor() as i64;
            // Each pixel of a segment is blended once.
            if last == Some((px, py)) {
                continue;
            }
            last = Some((px, py));
            self.blend(px, py, style.color, style.alpha);
        }
    }
}

fn expect_len(mesh: &Mesh, values: &[f64], expected: usize) -> MeshResult<()> {
    if values.len() != expected {
        return Err(MeshError::Shape {
            len: values.len(),
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
        });
    }
    Ok(())
}

/// Twice the signed area of triangle `(a, b, p)`.
#[inline]
fn edge_function(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> f64 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

impl Canvas for RasterCanvas {
    fn set_view(&mut self, view: &ViewBox) -> MeshResult<()> {
        self.transform = Some(Transform::fit(view, self.image.width(), self.image.height())?);
        Ok(())
    }

    fn fill_contours(
        &mut self,
        mesh: &Mesh,
        values: &[f64],
        levels: &ContourLevels,
        colormap: Colormap,
    ) -> MeshResult<()> {
        let transform = self.transform()?;
        expect_len(mesh, values, mesh.vertex_count())?;
        let palette: Vec<[u8; 3]> = (0..levels.band_count())
            .map(|i| colormap.sample(levels.band_position(i)))
            .collect();

        for t in mesh.triangle_ids() {
            let corner_values = mesh.triangle(t).map(|v| values[v.index()]);
            self.fill_triangle(&transform, mesh.corners(t), |w| {
                let v = w[0] * corner_values[0] + w[1] * corner_values[1] + w[2] * corner_values[2];
                palette[levels.band(v)]
            });
        }
        Ok(())
    }

    fn fill_triangles(
        &mut self,
        mesh: &Mesh,
        values: &[f64],
        scale: &ColorScale,
        colormap: Colormap,
    ) -> MeshResult<()> {
        let transform = self.transform()?;
        expect_len(mesh, values, mesh.triangle_count())?;
        for (t, &v) in mesh.triangle_ids().zip(values) {
            let color = colormap.sample(scale.normalize(v));
            self.fill_triangle(&transform, mesh.corners(t), |_| color);
        }
        Ok(())
    }

    fn draw_edges(&mut self, mesh: &Mesh, style: &EdgeStyle) -> MeshResult<()> {
        let transform = self.transform()?;
        for [u, v] in mesh.edges() {
            let from = transform.apply(mesh.vertex(u));
            let to = transform.apply(mesh.vertex(v));
            self.stroke(from, to, style);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "raster"
    }
}
