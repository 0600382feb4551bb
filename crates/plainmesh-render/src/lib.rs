//! # plainmesh-render
//!
//! Mesh plotting over an explicit drawing surface.
//!
//! [`plot()`] validates a mesh and an optional data field, then issues
//! draw calls against a [`Canvas`]:
//! - [`RecordingCanvas`]: Records calls (tests, headless inspection)
//! - [`RasterCanvas`]: Rasterizes into an RGBA image, saved as PNG

pub mod canvas;
pub mod colormap;
pub mod options;
pub mod plot;
pub mod raster;

pub use canvas::{Canvas, ColorScale, ContourLevels, DrawCall, EdgeStyle, RecordingCanvas, ViewBox};
pub use colormap::Colormap;
pub use options::{PlotOptions, RasterOptions, RenderConfig};
pub use plot::{field_location, plot, plot_attribute, FieldLocation};
pub use raster::RasterCanvas;
