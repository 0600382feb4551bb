//! Mesh reader entry points.

use std::path::Path;

use plainmesh_mesh::Mesh;
use plainmesh_types::{MeshError, MeshResult};
use tracing::info;

use crate::fetch::Fetch;
use crate::xdmf;

/// Reads a Light Data XDMF mesh from a URL over HTTP.
///
/// Fails with [`MeshError::Environment`] before touching the network
/// when the crate was built without the `http` feature.
#[cfg(feature = "http")]
pub fn get(url: &str) -> MeshResult<Mesh> {
    let fetcher = crate::fetch::HttpFetcher::new()?;
    get_with(&fetcher, url)
}

/// Reads a Light Data XDMF mesh from a URL over HTTP.
///
/// This build has no HTTP client; the call always fails with
/// [`MeshError::Environment`].
#[cfg(not(feature = "http"))]
pub fn get(url: &str) -> MeshResult<Mesh> {
    Err(MeshError::Environment(format!(
        "cannot fetch {url}: plainmesh-io was built without the `http` feature"
    )))
}

/// Reads a mesh through any transport.
///
/// A response other than `200 OK` is a [`MeshError::Transport`] and its
/// body is not parsed.
pub fn get_with<F: Fetch + ?Sized>(fetcher: &F, url: &str) -> MeshResult<Mesh> {
    info!(url, "fetching mesh");
    let response = fetcher.fetch(url)?;
    if !response.is_ok() {
        return Err(MeshError::Transport {
            url: url.to_string(),
            status: response.status,
        });
    }
    xdmf::parse(&response.body)
}

/// Reads a Light Data XDMF mesh from a local file.
pub fn read_file(path: impl AsRef<Path>) -> MeshResult<Mesh> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading mesh");
    let text = std::fs::read_to_string(path)?;
    xdmf::parse(&text)
}
