//! The product form controller.

use storefront_core::{FormState, ResultTable, StatusSink};

use crate::dispatch::{Completion, FormSession, Operation, Request};
use crate::transport::ProductTransport;

/// Binds one [`FormSession`] to a product transport.
///
/// `run` takes `&mut self`, so a controller executes one operation at a
/// time. Callers that want overlapping requests can use [`Request`] and
/// [`Completion`] directly.
pub struct FormController<T> {
    transport: T,
    session: FormSession,
}

impl<T: ProductTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            session: FormSession::default(),
        }
    }

    /// Press one of the service buttons.
    ///
    /// The status slot is emptied before the request goes out and holds
    /// the outcome once this returns.
    pub async fn run(&mut self, operation: Operation) -> bool {
        let request = self.begin(operation);
        let completion: Completion = request.send(&self.transport).await;
        let success = completion.is_success();
        completion.apply(&mut self.session);

        success
    }

    /// Empty the status slot and snapshot the request from the form. Runs
    /// before anything is sent.
    pub fn begin(&mut self, operation: Operation) -> Request {
        self.session.status.clear();
        Request::prepare(operation, &self.session.form)
    }

    /// The "clear" button: empties the whole form, `id` included, and the
    /// status slot. Search results stay on screen.
    pub fn clear(&mut self) {
        self.session.form.reset();
        self.session.status.clear();
    }

    pub fn form(&self) -> &FormState {
        &self.session.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.session.form
    }

    pub fn status(&self) -> &StatusSink {
        &self.session.status
    }

    pub fn results(&self) -> Option<&ResultTable> {
        self.session.results.as_ref()
    }
}
