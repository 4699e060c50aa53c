// File: crates/chart-loader/src/curl_client.rs
// Summary: libcurl-backed `HttpClient`.
// Notes:
// - The transfer is blocking, so it runs on tokio's blocking pool. Redirects are followed; no
//   timeout is set unless one is configured, leaving libcurl's defaults in charge.

use std::time::Duration;

use async_trait::async_trait;

use crate::client::{HttpClient, HttpResponse};
use crate::error::LoadError;

const USER_AGENT: &str = concat!("cyclist-chart/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default)]
pub struct CurlClient {
    /// Optional connect timeout; `None` keeps libcurl's default.
    pub connect_timeout: Option<Duration>,
}

impl CurlClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Performs the GET on the current thread.
    pub fn get_blocking(&self, url: &str) -> Result<HttpResponse, LoadError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(USER_AGENT)?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET completed");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for CurlClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError> {
        let client = self.clone();
        let url = url.to_owned();
        join_transfer(tokio::task::spawn_blocking(move || client.get_blocking(&url)).await)
    }
}

/// Unwrap a finished transfer task. Panics inside the task are re-raised here.
fn join_transfer(
    joined: Result<Result<HttpResponse, LoadError>, tokio::task::JoinError>,
) -> Result<HttpResponse, LoadError> {
    match joined {
        Ok(result) => result,
        Err(e) => match e.try_into_panic() {
            Ok(payload) => std::panic::resume_unwind(payload),
            Err(e) => Err(LoadError::Aborted(e.to_string())),
        },
    }
}
