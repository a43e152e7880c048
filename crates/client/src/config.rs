/// Client configuration loaded from environment variables.
///
/// Defaults point at a product service running locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service origin without a trailing slash, e.g. `http://localhost:8080`.
    pub api_url: String,
    /// Path of the product collection, e.g. `/products`.
    pub base_path: String,
}

impl ClientConfig {
    /// Build a configuration, normalizing slashes on both parts.
    pub fn new(api_url: impl Into<String>, base_path: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        let base_path = format!("/{}", base_path.into().trim_matches('/'));

        Self { api_url, base_path }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `PRODUCTS_API_URL`   | `http://localhost:8080` |
    /// | `PRODUCTS_BASE_PATH` | `/products`             |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("PRODUCTS_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let base_path = std::env::var("PRODUCTS_BASE_PATH").unwrap_or_else(|_| "/products".into());

        Self::new(api_url, base_path)
    }

    /// Full URL of the product collection.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.api_url, self.base_path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080", "/products")
    }
}
