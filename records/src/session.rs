//! Headless driver that pairs a [`Workflow`] with an API handle.
//!
//! Every successful mutation is followed by a full reload before the call
//! returns ("refetch on settle"); nothing is patched into the list locally.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::RecordsApi;
use crate::workflow::{Entity, Settle, Workflow};

pub struct Session<E: Entity, A> {
    api: A,
    workflow: Workflow<E>,
}

impl<E: Entity, A: RecordsApi> Session<E, A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            workflow: Workflow::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn workflow(&self) -> &Workflow<E> {
        &self.workflow
    }

    /// Direct access for dialog and filter edits.
    pub fn workflow_mut(&mut self) -> &mut Workflow<E> {
        &mut self.workflow
    }

    /// Load the list with the current filter.
    pub async fn load(&mut self) {
        let ticket = self.workflow.begin_load();
        let result = E::list(&self.api, &ticket.query).await;
        self.workflow.finish_load(&ticket, result);
    }

    /// Replace the filter form and reload.
    pub async fn apply_filter(&mut self, filter: E::Filter) {
        self.workflow.filter = filter;
        let ticket = self.workflow.apply_filter();
        let result = E::list(&self.api, &ticket.query).await;
        self.workflow.finish_load(&ticket, result);
    }

    /// Reset the filter and reload unfiltered.
    pub async fn clear_filter(&mut self) {
        let ticket = self.workflow.clear_filter();
        let result = E::list(&self.api, &ticket.query).await;
        self.workflow.finish_load(&ticket, result);
    }

    /// Submit the open dialog. Reloads on success.
    pub async fn submit(&mut self) -> Settle {
        let Some(mutation) = self.workflow.begin_submit() else {
            return Settle::Stay;
        };
        let result = E::execute(&self.api, &mutation).await;
        let settle = self.workflow.settle_submit(&mutation, result);
        if settle == Settle::Reload {
            self.load().await;
        }
        settle
    }

    /// Delete `id` once the caller has confirmed. Reloads on success.
    ///
    /// An unconfirmed delete sends nothing and changes nothing.
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> Settle {
        if !confirmed || !self.workflow.begin_delete(id) {
            return Settle::Stay;
        }
        let result = E::remove(&self.api, id).await;
        let settle = self.workflow.settle_delete(id, result);
        if settle == Settle::Reload {
            self.load().await;
        }
        settle
    }
}
