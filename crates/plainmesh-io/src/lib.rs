//! # plainmesh-io
//!
//! Mesh reader for the plain-text ("Light Data") variant of XDMF.
//!
//! - [`xdmf`]: Parses an in-memory document into a [`Mesh`].
//! - [`fetch`]: Transport seam ([`Fetch`]) and the HTTP implementation.
//! - [`reader`]: Entry points composing the two: [`get`], [`get_with`],
//!   [`read_file`].
//!
//! [`Mesh`]: plainmesh_mesh::Mesh

pub mod fetch;
pub mod reader;
pub mod xdmf;

#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use fetch::{Fetch, Response};
pub use reader::{get, get_with, read_file};
