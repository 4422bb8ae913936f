use leptos::prelude::*;
use thiserror::Error;
use treemap_shared::{Dataset, DatasetCell, DatasetError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}

/// Fetch and validate the sales hierarchy at `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))?;
    Ok(Dataset::from_json(&body)?)
}

/// Load `url` in the background and publish it into `cell`.
///
/// A failed load leaves the cell untouched, so the chart keeps showing
/// whatever it showed before (nothing, on first load).
pub fn load_into(cell: RwSignal<DatasetCell>, url: &'static str) {
    tracing::info!(url, "loading dataset");
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_dataset(url).await {
            Ok(dataset) => {
                tracing::info!(leaves = dataset.leaf_count(), "dataset loaded");
                cell.update(|c| c.publish(dataset));
            }
            Err(e) => tracing::error!(url, error = %e, "dataset load failed"),
        }
    });
}
