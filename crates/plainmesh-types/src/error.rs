//! Error types for plainmesh.
//!
//! All crates return `MeshResult<T>` from fallible operations. Every
//! error aborts the operation that raised it; nothing is retried and no
//! partial mesh is ever returned.

use thiserror::Error;

/// Unified error type for plainmesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A capability the operation needs was not compiled in.
    #[error("Environment error: {0}")]
    Environment(String),

    /// The server answered with something other than `200 OK`.
    #[error("Cannot read from URL {url}: HTTP status {status}")]
    Transport { url: String, status: u16 },

    /// The HTTP client failed before a response status was available.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The document does not follow the expected XDMF structure.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A data field matches neither the vertex nor the triangle count.
    #[error("Data is wrong length: {len} (mesh has {vertices} vertices, {triangles} triangles)")]
    Shape {
        len: usize,
        vertices: usize,
        triangles: usize,
    },

    /// Arguments violate an operation's input contract.
    #[error("Invalid input: {0}")]
    InputContract(String),

    /// Mesh data is missing something an operation requires.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding failed.
    #[error("Image error: {0}")]
    Image(String),
}

impl MeshError {
    /// Builds a [`MeshError::Schema`] from anything displayable.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }
}

/// Convenience alias for `Result<T, MeshError>`.
pub type MeshResult<T> = Result<T, MeshError>;
