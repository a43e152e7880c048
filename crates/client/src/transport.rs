//! Transport seam between the dispatcher and the product service.

use storefront_core::{Product, ProductBody};

use crate::api::ProductApiError;

/// The six calls the form makes against the product resource.
///
/// `id` is passed through exactly as it appears in the form.
#[async_trait::async_trait]
pub trait ProductTransport: Send + Sync {
    /// `POST {base}`
    async fn create(&self, body: &ProductBody) -> Result<Product, ProductApiError>;

    /// `PUT {base}/{id}`
    async fn update(&self, id: &str, body: &ProductBody) -> Result<Product, ProductApiError>;

    /// `GET {base}/{id}`
    async fn retrieve(&self, id: &str) -> Result<Product, ProductApiError>;

    /// `PUT {base}/like/{id}`
    async fn like(&self, id: &str) -> Result<Product, ProductApiError>;

    /// `DELETE {base}/{id}`
    async fn delete(&self, id: &str) -> Result<(), ProductApiError>;

    /// `GET {base}?{query}`
    async fn search(&self, query: &str) -> Result<Vec<Product>, ProductApiError>;
}
