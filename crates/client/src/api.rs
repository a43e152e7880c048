//! REST client for the product service.
//!
//! Wraps the product endpoints (create, update, retrieve, like, delete,
//! search) using [`reqwest`].

use serde::Deserialize;
use storefront_core::status::SERVER_ERROR;
use storefront_core::{Product, ProductBody};

use crate::config::ClientConfig;
use crate::transport::ProductTransport;

/// Errors from the product REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ProductApiError {
    /// The HTTP request itself failed (connection refused, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Product API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the JSON error body, if there was one.
        message: Option<String>,
    },

    /// A 2xx response whose body was not the expected JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl ProductApiError {
    /// Text to show in the status slot for this failure.
    ///
    /// The server's `message` when it sent one, otherwise the fixed
    /// fallback.
    pub fn status_message(&self) -> &str {
        match self {
            ProductApiError::Server {
                message: Some(message),
                ..
            } => message,
            _ => SERVER_ERROR,
        }
    }
}

/// Error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the product collection.
pub struct ProductApi {
    client: reqwest::Client,
    collection_url: String,
}

impl ProductApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            collection_url: config.collection_url(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn like_url(&self, id: &str) -> String {
        format!("{}/like/{}", self.collection_url, id)
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}?{}", self.collection_url, query)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`ProductApiError::Server`] carrying the body's `message` field.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ProductApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|error| error.message);

        tracing::debug!(status = status.as_u16(), body = %body, "Product API returned an error");

        Err(ProductApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ProductApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ProductApiError::Decode(e.to_string()))
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ProductApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductTransport for ProductApi {
    async fn create(&self, body: &ProductBody) -> Result<Product, ProductApiError> {
        tracing::debug!(url = %self.collection_url, "POST product");
        let response = self
            .client
            .post(&self.collection_url)
            .json(body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update(&self, id: &str, body: &ProductBody) -> Result<Product, ProductApiError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "PUT product");
        let response = self.client.put(url).json(body).send().await?;

        Self::parse_response(response).await
    }

    async fn retrieve(&self, id: &str) -> Result<Product, ProductApiError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "GET product");
        let response = self.client.get(url).send().await?;

        Self::parse_response(response).await
    }

    async fn like(&self, id: &str) -> Result<Product, ProductApiError> {
        let url = self.like_url(id);
        tracing::debug!(url = %url, "PUT product like");
        let response = self.client.put(url).send().await?;

        Self::parse_response(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ProductApiError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "DELETE product");
        let response = self.client.delete(url).send().await?;

        Self::check_status(response).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ProductApiError> {
        let url = self.search_url(query);
        tracing::debug!(url = %url, "GET products");
        let response = self.client.get(url).send().await?;

        Self::parse_response(response).await
    }
}
