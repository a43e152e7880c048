//! Request dispatch for the form buttons.
//!
//! An operation runs in three steps:
//!
//! 1. [`Request::prepare`] snapshots what the request needs from the form
//!    (body, id or filter), so the form is free again before any I/O.
//! 2. [`Request::send`] performs the call and returns a [`Completion`].
//! 3. [`Completion::apply`] folds the outcome into the [`FormSession`].
//!
//! Completions overwrite the session wholesale; when several requests are
//! in flight, whichever completion is applied last wins.

use std::fmt;
use std::str::FromStr;

use storefront_core::status::{DELETED, LIKED, SERVER_ERROR, SUCCESS};
use storefront_core::{FormState, Product, ProductBody, ResultTable, SearchFilter, StatusSink};

use crate::api::ProductApiError;
use crate::transport::ProductTransport;

/// A button on the product form that talks to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Retrieve,
    Like,
    Delete,
    Search,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Create,
        Operation::Update,
        Operation::Retrieve,
        Operation::Like,
        Operation::Delete,
        Operation::Search,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Retrieve => "retrieve",
            Operation::Like => "like",
            Operation::Delete => "delete",
            Operation::Search => "search",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("Unknown operation: {0}")]
    Unknown(String),
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| OperationError::Unknown(s.to_string()))
    }
}

/// Everything the form page holds: the record being edited, the status
/// slot and the last rendered search result.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub form: FormState,
    pub status: StatusSink,
    pub results: Option<ResultTable>,
}

/// An owned snapshot of one request, taken from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create { body: ProductBody },
    Update { id: String, body: ProductBody },
    Retrieve { id: String },
    Like { id: String },
    Delete { id: String },
    Search { query: String },
}

impl Request {
    pub fn prepare(operation: Operation, form: &FormState) -> Self {
        match operation {
            Operation::Create => Request::Create {
                body: form.to_record(),
            },
            Operation::Update => Request::Update {
                id: form.id.clone(),
                body: form.to_record(),
            },
            Operation::Retrieve => Request::Retrieve {
                id: form.id.clone(),
            },
            Operation::Like => Request::Like {
                id: form.id.clone(),
            },
            Operation::Delete => Request::Delete {
                id: form.id.clone(),
            },
            Operation::Search => Request::Search {
                query: SearchFilter::from_form(form).to_query_string(),
            },
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Request::Create { .. } => Operation::Create,
            Request::Update { .. } => Operation::Update,
            Request::Retrieve { .. } => Operation::Retrieve,
            Request::Like { .. } => Operation::Like,
            Request::Delete { .. } => Operation::Delete,
            Request::Search { .. } => Operation::Search,
        }
    }

    pub async fn send<T>(self, transport: &T) -> Completion
    where
        T: ProductTransport + ?Sized,
    {
        let operation = self.operation();
        tracing::debug!(%operation, "Dispatching product request");

        let outcome = match self {
            Request::Create { body } => transport.create(&body).await.map(Completion::Saved),
            Request::Update { id, body } => {
                transport.update(&id, &body).await.map(Completion::Saved)
            }
            Request::Retrieve { id } => transport.retrieve(&id).await.map(Completion::Saved),
            Request::Like { id } => transport.like(&id).await.map(Completion::Liked),
            Request::Delete { id } => transport.delete(&id).await.map(|()| Completion::Deleted),
            Request::Search { query } => transport.search(&query).await.map(Completion::Found),
        };

        outcome.unwrap_or_else(|error| Completion::Failed { operation, error })
    }
}

/// Outcome of one request, ready to be applied to the session.
#[derive(Debug)]
pub enum Completion {
    /// Create, update or retrieve returned the record.
    Saved(Product),
    /// Like returned the updated record.
    Liked(Product),
    /// Delete succeeded.
    Deleted,
    /// Search returned records in server order.
    Found(Vec<Product>),
    /// The request failed.
    Failed {
        operation: Operation,
        error: ProductApiError,
    },
}

impl Completion {
    /// Fold this outcome into the session, replacing the status message.
    pub fn apply(self, session: &mut FormSession) {
        match self {
            Completion::Saved(product) => {
                tracing::info!(id = ?product.id, "Product loaded into form");
                session.form.fill_from(&product);
                session.status.set(SUCCESS);
            }
            Completion::Liked(product) => {
                tracing::info!(id = ?product.id, like = %product.like, "Product liked");
                session.form.fill_from(&product);
                session.status.set(LIKED);
            }
            Completion::Deleted => {
                tracing::info!(id = %session.form.id, "Product deleted");
                session.form.clear();
                session.status.set(DELETED);
            }
            Completion::Found(products) => {
                tracing::info!(count = products.len(), "Search returned products");
                session.results = Some(ResultTable::from_records(&products));
                if let Some(first) = products.first() {
                    session.form.fill_from(first);
                }
                session.status.set(SUCCESS);
            }
            Completion::Failed { operation, error } => {
                tracing::warn!(%operation, error = %error, "Product request failed");
                if matches!(operation, Operation::Retrieve | Operation::Like) {
                    session.form.clear();
                }
                // Delete failures never surface the server's detail.
                let message = match operation {
                    Operation::Delete => SERVER_ERROR,
                    _ => error.status_message(),
                };
                session.status.set(message);
            }
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Completion::Failed { .. })
    }
}
