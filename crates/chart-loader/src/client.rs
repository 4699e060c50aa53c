// File: crates/chart-loader/src/client.rs
// Summary: HTTP client seam.

use async_trait::async_trait;

use crate::error::LoadError;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Performs a single GET.
///
/// Implementations return `Ok` for any response the server produced, whatever its status;
/// `Err(LoadError::Connection)` is reserved for transport failures.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError>;
}

#[async_trait]
impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError> {
        (**self).get(url).await
    }
}
