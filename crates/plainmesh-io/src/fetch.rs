//! Document transport.
//!
//! The reader never talks to the network directly; it goes through a
//! [`Fetch`] implementation so tests can substitute canned responses.

use plainmesh_types::MeshResult;

/// A completed request: status code plus the body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for `200 OK`, the only status the reader accepts.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Retrieves a document by URL.
pub trait Fetch {
    /// Issues a GET request. Implementations return the response even
    /// for non-success statuses; the caller decides what to accept.
    fn fetch(&self, url: &str) -> MeshResult<Response>;
}

/// Blocking HTTP transport backed by `reqwest`.
///
/// Redirects, proxies and TLS follow the client's defaults.
#[cfg(feature = "http")]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new() -> MeshResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| plainmesh_types::MeshError::Http(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "http")]
impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> MeshResult<Response> {
        use plainmesh_types::MeshError;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| MeshError::Http(e.to_string()))?;
        let status = resp.status().as_u16();
        tracing::debug!(url, status, "received response");

        // The body of a rejected response is never parsed.
        if status != 200 {
            return Ok(Response::new(status, String::new()));
        }
        let body = resp.text().map_err(|e| MeshError::Http(e.to_string()))?;
        Ok(Response::new(status, body))
    }
}
