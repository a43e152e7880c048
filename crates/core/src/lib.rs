//! Storefront form core.
//!
//! The synchronous half of the product form: the record exchanged with the
//! product service, the single-record form that mirrors it, the search
//! filter derived from the form, the result table and the status slot.
//! Nothing in this crate performs I/O; `storefront-client` drives it.

pub mod form;
pub mod product;
pub mod query;
pub mod render;
pub mod status;
pub mod types;

pub use form::{Availability, FormError, FormField, FormState};
pub use product::{Product, ProductBody};
pub use query::SearchFilter;
pub use render::ResultTable;
pub use status::StatusSink;
