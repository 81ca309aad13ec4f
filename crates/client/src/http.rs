//! HTTP implementation of the store API over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use storefront_core::Product;

use crate::api::{FetchError, StoreApi};

/// Public demo store used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Store API client over HTTP.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpStoreApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStoreApi {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a non-default deployment (staging, local fixture
    /// server).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).send().await.map_err(from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn from_reqwest(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(error.to_string())
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json("products").await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, FetchError> {
        self.get_json("products/categories").await
    }

    async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, FetchError> {
        self.get_json(&format!("products/category/{category}")).await
    }
}
