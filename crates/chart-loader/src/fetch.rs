// File: crates/chart-loader/src/fetch.rs
// Summary: The single fetch the program performs.

use cyclist_chart_core::{records_from_json, Record};
use serde_json::Value;

use crate::client::HttpClient;
use crate::error::LoadError;

/// Statuses in `[200, 400)` count as success.
pub fn is_success(status: u32) -> bool {
    (200..400).contains(&status)
}

/// GET `url` and parse the body as JSON. The value is returned unchanged; no schema check.
pub async fn fetch_json<C>(client: &C, url: &str) -> Result<Value, LoadError>
where
    C: HttpClient + ?Sized,
{
    tracing::info!(url, "fetching dataset");
    let response = client.get(url).await?;
    if !is_success(response.status) {
        return Err(LoadError::Server { status: response.status });
    }
    let value: Value = serde_json::from_slice(&response.body)?;
    Ok(value)
}

/// GET `url` and coerce the body into records, preserving source order.
pub async fn fetch_records<C>(client: &C, url: &str) -> Result<Vec<Record>, LoadError>
where
    C: HttpClient + ?Sized,
{
    let value = fetch_json(client, url).await?;
    let records = records_from_json(&value)?;
    tracing::info!(records = records.len(), "dataset loaded");
    Ok(records)
}
