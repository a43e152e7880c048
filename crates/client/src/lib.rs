//! Storefront product client.
//!
//! Talks to the product service over HTTP and folds each response back
//! into the form session:
//!
//! - [`api::ProductApi`] issues the REST calls.
//! - [`dispatch`] turns a button press into a request and its completion.
//! - [`controller::FormController`] owns the session and runs operations
//!   one at a time.

pub mod api;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod transport;

pub use api::{ProductApi, ProductApiError};
pub use config::ClientConfig;
pub use controller::FormController;
pub use dispatch::{Completion, FormSession, Operation, OperationError, Request};
pub use transport::ProductTransport;
