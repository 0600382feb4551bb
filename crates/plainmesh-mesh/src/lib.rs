//! # plainmesh-mesh
//!
//! Two-dimensional triangle mesh representation.
//!
//! ## Key Types
//!
//! - [`Mesh`]: Vertex coordinates, triangle connectivity, and optional
//!   named data fields.
//! - [`Attribute`]: A named per-vertex or per-triangle numeric array.
//! - Procedural generators ([`generators::rectangle_mesh`]).

pub mod attribute;
pub mod generators;
pub mod mesh;

pub use attribute::{Attribute, Center};
pub use mesh::{Bounds, Mesh};
