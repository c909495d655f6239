//! Per-page list workflow: load, filter, create/edit, delete, notify.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns one [`Workflow`] for its entity type; nothing is shared
//! between pages. The workflow never mutates `items` locally after a create,
//! update, or delete. A successful mutation settles with [`Settle::Reload`]
//! and the caller must run a fresh load, so the list always mirrors the
//! backend's last full snapshot.
//!
//! Transitions are synchronous so a reactive UI can apply them inside a
//! signal update and await the network in between:
//!
//! ```text
//! begin_load  -> (await list)    -> finish_load
//! begin_submit -> (await mutate) -> settle_submit -> Reload? -> begin_load ...
//! begin_delete -> (await delete) -> settle_delete -> Reload? -> begin_load ...
//! ```

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::api::{QueryPairs, RecordsApi};
use crate::dialog::DialogState;
use crate::error::ApiError;
use crate::notice::NoticeSlot;

// =============================================================================
// ENTITY
// =============================================================================

/// A record type that has its own admin page.
#[async_trait(?Send)]
pub trait Entity: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Editable fields backing the dialog.
    type Draft: Clone + Default + Debug + PartialEq + Send + Sync;
    /// Server-side list constraints (`()` when the page has none).
    type Filter: Clone + Default + Debug + PartialEq + Send + Sync;
    /// Auxiliary lists loaded alongside the main list for display lookups.
    type Lookups: Clone + Default + Debug + PartialEq + Send + Sync;

    /// Lowercase singular noun used in messages, e.g. `"student"`.
    const NOUN: &'static str;
    const NOUN_PLURAL: &'static str;
    /// Capitalised singular noun, e.g. `"Student"`.
    const TITLE: &'static str;

    fn id(&self) -> &str;
    fn draft(&self) -> Self::Draft;

    /// Check a draft before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message describing the first invalid field.
    fn validate(draft: &Self::Draft) -> Result<(), String>;

    fn query(filter: &Self::Filter) -> QueryPairs;

    /// Sample records substituted when a load fails.
    fn fixtures() -> (Vec<Self>, Self::Lookups);

    /// Fetch the full (or filtered) list plus lookups.
    async fn list<A: RecordsApi + ?Sized>(
        api: &A,
        query: &[(&'static str, String)],
    ) -> Result<(Vec<Self>, Self::Lookups), ApiError>;

    /// Dispatch a create or update.
    async fn execute<A: RecordsApi + ?Sized>(api: &A, mutation: &Mutation<Self>) -> Result<(), ApiError>;

    async fn remove<A: RecordsApi + ?Sized>(api: &A, id: &str) -> Result<(), ApiError>;
}

/// A create or update ready to dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<E: Entity> {
    Create(E::Draft),
    Update { id: String, draft: E::Draft },
}

impl<E: Entity> Mutation<E> {
    /// Past-tense verb for the success message.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "created",
            Self::Update { .. } => "updated",
        }
    }
}

/// What the caller must do after a mutation settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// The backend changed: run a full list load.
    Reload,
    /// Nothing changed; keep the current list.
    Stay,
}

/// Identity of one list load; results for a superseded ticket are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    /// Cleaned query the load must send.
    pub query: QueryPairs,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// WORKFLOW
// =============================================================================

/// All mutable state of one admin page.
#[derive(Clone, Debug)]
pub struct Workflow<E: Entity> {
    /// Last full snapshot from the backend (or fixtures after a failure).
    pub items: Vec<E>,
    pub lookups: E::Lookups,
    pub loading: bool,
    pub dialog: DialogState<E::Draft>,
    pub notice: NoticeSlot,
    /// Filter form contents; only sent when a load begins.
    pub filter: E::Filter,
    generation: u64,
    submitting: bool,
    /// Ids with a confirmed delete still awaiting the backend.
    deleting: Vec<String>,
    showing_fixtures: bool,
}

impl<E: Entity> Default for Workflow<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            lookups: E::Lookups::default(),
            loading: false,
            dialog: DialogState::Closed,
            notice: NoticeSlot::default(),
            filter: E::Filter::default(),
            generation: 0,
            submitting: false,
            deleting: Vec::new(),
            showing_fixtures: false,
        }
    }
}

impl<E: Entity> Workflow<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `items` holds sample data from a failed load.
    #[must_use]
    pub fn showing_fixtures(&self) -> bool {
        self.showing_fixtures
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.iter().any(|pending| pending == id)
    }

    // -------------------------------------------------------------------------
    // List loader
    // -------------------------------------------------------------------------

    /// Start a load with the current filter. Supersedes any load in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
            query: E::query(&self.filter),
        }
    }

    /// Apply a load result. Returns `false` if the ticket was superseded.
    ///
    /// On failure the list is replaced with fixtures and an error notice is
    /// shown. `loading` is cleared either way.
    pub fn finish_load(&mut self, ticket: &LoadTicket, result: Result<(Vec<E>, E::Lookups), ApiError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                entity = E::NOUN_PLURAL,
                stale = ticket.generation,
                current = self.generation,
                "dropping superseded list response"
            );
            return false;
        }
        match result {
            Ok((items, lookups)) => {
                tracing::debug!(entity = E::NOUN_PLURAL, count = items.len(), "list loaded");
                self.items = items;
                self.lookups = lookups;
                self.showing_fixtures = false;
            }
            Err(error) => {
                tracing::warn!(entity = E::NOUN_PLURAL, %error, "list load failed; substituting sample data");
                self.notice
                    .error(format!("Failed to load {}; showing sample data", E::NOUN_PLURAL));
                let (items, lookups) = E::fixtures();
                self.items = items;
                self.lookups = lookups;
                self.showing_fixtures = true;
            }
        }
        self.loading = false;
        true
    }

    // -------------------------------------------------------------------------
    // Filter controller
    // -------------------------------------------------------------------------

    /// Reload with the filter as currently entered.
    pub fn apply_filter(&mut self) -> LoadTicket {
        self.begin_load()
    }

    /// Reset every constraint and reload unfiltered.
    pub fn clear_filter(&mut self) -> LoadTicket {
        self.filter = E::Filter::default();
        self.begin_load()
    }

    // -------------------------------------------------------------------------
    // Edit/create dialog
    // -------------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.dialog.open_create();
    }

    pub fn open_edit(&mut self, record: &E) {
        self.dialog.open_edit(record.id(), record.draft());
    }

    pub fn close_dialog(&mut self) {
        self.dialog.close();
    }

    /// Validate the open draft and mark a submit in flight.
    ///
    /// Returns `None` (and sends nothing) when the dialog is closed, a submit
    /// is already in flight, or validation fails; validation failures are
    /// reported through the notice slot and leave the dialog open.
    pub fn begin_submit(&mut self) -> Option<Mutation<E>> {
        if self.submitting {
            return None;
        }
        let mutation = match &self.dialog {
            DialogState::Closed => return None,
            DialogState::Creating(draft) => {
                if let Err(message) = E::validate(draft) {
                    self.notice.error(message);
                    return None;
                }
                Mutation::Create(draft.clone())
            }
            DialogState::Editing { id, draft } => {
                if let Err(message) = E::validate(draft) {
                    self.notice.error(message);
                    return None;
                }
                Mutation::Update {
                    id: id.clone(),
                    draft: draft.clone(),
                }
            }
        };
        self.submitting = true;
        Some(mutation)
    }

    /// Record the outcome of a dispatched create/update.
    pub fn settle_submit(&mut self, mutation: &Mutation<E>, result: Result<(), ApiError>) -> Settle {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.dialog.close();
                self.notice.success(format!("{} {}", E::TITLE, mutation.verb()));
                Settle::Reload
            }
            Err(error) => {
                tracing::warn!(entity = E::NOUN, %error, "save failed");
                self.notice
                    .error(error.user_message(&format!("Failed to save {}", E::NOUN)));
                Settle::Stay
            }
        }
    }

    // -------------------------------------------------------------------------
    // Delete action
    // -------------------------------------------------------------------------

    /// Mark a confirmed delete of `id` in flight.
    ///
    /// Deletes of different records may overlap. A second delete of a record
    /// already in flight is refused with an error notice and returns `false`.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.is_deleting(id) {
            self.notice.error(format!("{} is already being deleted", E::TITLE));
            return false;
        }
        self.deleting.push(id.to_owned());
        true
    }

    /// Record the outcome of the delete of `id`. The list is left untouched
    /// on failure.
    pub fn settle_delete(&mut self, id: &str, result: Result<(), ApiError>) -> Settle {
        self.deleting.retain(|pending| pending != id);
        match result {
            Ok(()) => {
                self.notice.success(format!("{} deleted", E::TITLE));
                Settle::Reload
            }
            Err(error) => {
                tracing::warn!(entity = E::NOUN, %id, %error, "delete failed");
                self.notice.error(format!("Failed to delete {}", E::NOUN));
                Settle::Stay
            }
        }
    }

    /// Record currently listed under `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }
}
