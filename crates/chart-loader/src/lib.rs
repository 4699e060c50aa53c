// File: crates/chart-loader/src/lib.rs
// Summary: Data loader for the cyclist dataset.
// Notes:
// - One GET of a fixed JSON resource through an injectable `HttpClient`. The production client
//   is `CurlClient` (libcurl, run on tokio's blocking pool).

pub mod client;
pub mod curl_client;
pub mod error;
pub mod fetch;

pub use client::{HttpClient, HttpResponse};
pub use curl_client::CurlClient;
pub use error::LoadError;
pub use fetch::{fetch_json, fetch_records, is_success};

/// Source of the dataset.
pub const CYCLIST_DATA_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/cyclist-data.json";
