//! In-memory product service for client integration tests.
//!
//! Serves the product routes with axum on an ephemeral local port, so the
//! real `reqwest` transport is exercised end to end.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::json;

use storefront_client::{ClientConfig, FormController, ProductApi};
use storefront_core::types::DbId;
use storefront_core::{Product, ProductBody};

#[derive(Default)]
struct Store {
    next_id: DbId,
    products: BTreeMap<DbId, Product>,
    delete_failure: Option<String>,
    raw_record: Option<serde_json::Value>,
}

type SharedStore = Arc<Mutex<Store>>;

/// Failure response: the service's `{ "message": ... }` body, or plain
/// text the way the router answers a malformed path.
enum ApiFailure {
    Message(StatusCode, String),
    Plain(StatusCode, &'static str),
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self {
            ApiFailure::Message(status, message) => {
                (status, Json(json!({ "message": message }))).into_response()
            }
            ApiFailure::Plain(status, text) => (status, text).into_response(),
        }
    }
}

fn not_found(id: &str) -> ApiFailure {
    ApiFailure::Message(
        StatusCode::NOT_FOUND,
        format!("Product with id '{id}' was not found."),
    )
}

fn today() -> String {
    chrono::Utc::now().date_naive().to_string()
}

fn record_from_body(id: DbId, body: ProductBody) -> Product {
    let or_today = |date: String| if date.is_empty() { today() } else { date };
    Product {
        id: Some(id),
        name: body.name,
        category: body.category,
        available: body.available,
        like: body.like.trim().parse::<i64>().unwrap_or(0).to_string(),
        color: body.color,
        size: body.size,
        create_date: or_today(body.create_date),
        last_modify_date: today(),
    }
}

fn parse_id(id: &str) -> Result<DbId, ApiFailure> {
    id.parse()
        .map_err(|_| ApiFailure::Plain(StatusCode::BAD_REQUEST, "Invalid product id"))
}

async fn create_product(
    State(store): State<SharedStore>,
    Json(body): Json<ProductBody>,
) -> Result<(StatusCode, Json<Product>), ApiFailure> {
    if body.name.is_empty() {
        return Err(ApiFailure::Message(
            StatusCode::BAD_REQUEST,
            "Invalid product: missing name".into(),
        ));
    }

    let mut store = store.lock().unwrap();
    store.next_id += 1;
    let id = store.next_id;
    let product = record_from_body(id, body);
    store.products.insert(id, product.clone());

    Ok((StatusCode::CREATED, Json(product)))
}

async fn list_products(
    State(store): State<SharedStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Product>> {
    let store = store.lock().unwrap();
    let matches = |product: &&Product| {
        params.get("name").map_or(true, |name| &product.name == name)
            && params
                .get("category")
                .map_or(true, |category| &product.category == category)
            && params
                .get("available")
                .map_or(true, |available| product.available.to_string() == *available)
    };

    Json(store.products.values().filter(matches).cloned().collect())
}

async fn get_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, ApiFailure> {
    let key = parse_id(&id)?;
    let store = store.lock().unwrap();
    if let Some(raw) = store.raw_record.clone() {
        return Ok(Json(raw).into_response());
    }
    let product = store.products.get(&key).cloned();
    drop(store);
    product
        .map(|product| Json(product).into_response())
        .ok_or_else(|| not_found(&id))
}

async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(body): Json<ProductBody>,
) -> Result<Json<Product>, ApiFailure> {
    let key = parse_id(&id)?;
    let mut store = store.lock().unwrap();
    let existing = store.products.get(&key).ok_or_else(|| not_found(&id))?;
    let create_date = existing.create_date.clone();

    let mut product = record_from_body(key, body);
    product.create_date = create_date;
    store.products.insert(key, product.clone());

    Ok(Json(product))
}

async fn like_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, ApiFailure> {
    let key = parse_id(&id)?;
    let mut store = store.lock().unwrap();
    if let Some(raw) = store.raw_record.clone() {
        return Ok(Json(raw).into_response());
    }
    let product = store.products.get_mut(&key).ok_or_else(|| not_found(&id))?;
    product.like = (product.like.parse::<i64>().unwrap_or(0) + 1).to_string();
    product.last_modify_date = today();

    Ok(Json(product.clone()).into_response())
}

async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiFailure> {
    let mut store = store.lock().unwrap();
    if let Some(message) = store.delete_failure.clone() {
        return Err(ApiFailure::Message(StatusCode::CONFLICT, message));
    }
    if let Ok(key) = id.parse::<DbId>() {
        store.products.remove(&key);
    }
    Ok(StatusCode::NO_CONTENT)
}

fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/like/{id}", put(like_product))
        .with_state(store)
}

/// A running fake product service.
pub struct FakeService {
    pub addr: SocketAddr,
    store: SharedStore,
}

impl FakeService {
    /// Bind to `127.0.0.1:0` and serve in the background.
    pub async fn start() -> Self {
        let store = SharedStore::default();
        let app = router(Arc::clone(&store));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, store }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(format!("http://{}", self.addr), "/products")
    }

    pub fn api(&self) -> ProductApi {
        ProductApi::new(&self.config())
    }

    pub fn controller(&self) -> FormController<ProductApi> {
        FormController::new(self.api())
    }

    /// Insert a product directly into the store.
    pub fn seed(&self, body: ProductBody) -> Product {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        let product = record_from_body(id, body);
        store.products.insert(id, product.clone());
        product
    }

    pub fn product(&self, id: DbId) -> Option<Product> {
        self.store.lock().unwrap().products.get(&id).cloned()
    }

    /// Answer every retrieve and like with this JSON body, as-is.
    pub fn respond_with_record(&self, raw: serde_json::Value) {
        self.store.lock().unwrap().raw_record = Some(raw);
    }

    /// Make every subsequent delete fail with the given message.
    pub fn fail_deletes_with(&self, message: &str) {
        self.store.lock().unwrap().delete_failure = Some(message.to_string());
    }
}

/// Config pointing at a local port with nothing listening on it.
pub async fn unreachable_config() -> ClientConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ClientConfig::new(format!("http://{addr}"), "/products")
}

/// Body used by the create scenario.
pub fn mug() -> ProductBody {
    ProductBody {
        name: "Mug".into(),
        category: "kitchen".into(),
        available: true,
        like: "0".into(),
        color: "red".into(),
        size: "M".into(),
        create_date: String::new(),
        last_modify_date: String::new(),
    }
}

pub fn product_body(name: &str, category: &str, available: bool) -> ProductBody {
    ProductBody {
        name: name.into(),
        category: category.into(),
        available,
        like: "0".into(),
        color: "blue".into(),
        size: "L".into(),
        create_date: "2024-01-15".into(),
        last_modify_date: "2024-01-15".into(),
    }
}
