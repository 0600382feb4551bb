//! # plainmesh-types
//!
//! Shared types, identifiers, error types, and rendering defaults
//! for the plainmesh crates.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other plainmesh crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{MeshError, MeshResult};
pub use ids::{TriangleId, VertexId};
