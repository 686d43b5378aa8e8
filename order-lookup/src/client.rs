//! HTTP client for the order API
//!
//! One lookup is one `GET <base>/order/<id>`: no retries, no timeout, no
//! request headers beyond reqwest's defaults. Every outcome is classified into
//! a `FetchResult`; nothing here returns early with a panic or an `anyhow`
//! error once the client is built.

use anyhow::{Context, Result};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;

use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::order::Order;

/// Anything that can look up an order by id
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_order(&self, id: &str) -> FetchResult;
}

/// HTTP client for communicating with the order API
#[derive(Clone)]
pub struct OrderClient {
    client: reqwest::Client,
    base_url: String,
}

impl OrderClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url)
    }

    /// Create a new client against an explicit base URL
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn order_url(&self, id: &str) -> String {
        format!("{}/order/{}", self.base_url, encode(id))
    }
}

#[async_trait]
impl OrderSource for OrderClient {
    async fn fetch_order(&self, id: &str) -> FetchResult {
        let url = self.order_url(id);
        tracing::debug!(%url, "Fetching order");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(%url, error = %e, "Order request failed"))?;

        handle_order_response(response).await
    }
}

async fn handle_order_response(response: reqwest::Response) -> FetchResult {
    let status = response.status();

    if status.is_success() {
        // Only a body that is not JSON at all counts as a failed request
        let body = response
            .json::<Value>()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to decode order body"))?;
        return Ok(Order::from_value(body));
    }

    tracing::warn!(status = status.as_u16(), "Order API returned an error status");

    let status_text = status_text(&response);
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(error) => Err(FetchError::Api {
            message: error.message,
        }),
        Err(_) => Err(FetchError::Http {
            code: status.as_u16(),
            status_text,
        }),
    }
}

/// Reason phrase from the status line, as the server wrote it
///
/// hyper only records the phrase when it differs from the canonical one.
fn status_text(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

// --- Response Types ---

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
