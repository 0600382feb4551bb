//! Rendering defaults.

/// Number of filled-contour levels used for per-vertex fields.
pub const DEFAULT_CONTOUR_LEVELS: usize = 40;

/// Largest accepted number of contour levels.
pub const MAX_CONTOUR_LEVELS: usize = 1024;

/// Fraction of the geometry extent added on each side of the view.
pub const DEFAULT_VIEW_MARGIN: f64 = 0.1;

/// Wireframe color (black).
pub const DEFAULT_WIRE_COLOR: [u8; 3] = [0, 0, 0];

/// Wireframe transparency.
pub const DEFAULT_WIRE_ALPHA: f32 = 0.5;

/// Half-width of the view used when the geometry has zero extent along an axis.
pub const DEGENERATE_HALF_EXTENT: f64 = 0.5;

/// Default raster size in pixels.
pub const DEFAULT_RASTER_WIDTH: u32 = 800;
pub const DEFAULT_RASTER_HEIGHT: u32 = 600;

/// Largest accepted raster, in pixels (a 16384 x 16384 image).
pub const MAX_RASTER_PIXELS: u64 = 1 << 28;
