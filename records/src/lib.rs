//! Shared student-records model and list workflow.
//!
//! This crate owns everything the browser UI and the terminal client agree
//! on: the entity shapes returned by the records backend, the REST paths and
//! query rules, the [`RecordsApi`] client seam, and the per-page workflow
//! (list load, filter, create/edit dialog, delete, notification).
//!
//! DESIGN
//! ======
//! The workflow is split into synchronous state transitions on [`Workflow`]
//! (`begin_*` / `finish_*` / `settle_*`) so reactive UIs can drive it from a
//! signal, and an async [`Session`] that owns an API handle and performs the
//! "refetch on settle" sequence for headless callers and tests.

pub mod api;
pub mod dialog;
pub mod endpoints;
pub mod entities;
pub mod error;
#[cfg(test)]
mod fake;
pub mod fixtures;
pub mod notice;
pub mod query;
pub mod reports;
pub mod session;
pub mod types;
pub mod workflow;

pub use api::RecordsApi;
pub use dialog::DialogState;
pub use entities::GradeLookups;
pub use error::ApiError;
pub use notice::{Notice, NoticeSlot, NoticeToken, Severity};
pub use query::GradeFilter;
pub use session::Session;
pub use types::{Course, CourseDraft, Grade, GradeDraft, Student, StudentDraft, StudentUpdate};
pub use workflow::{Entity, LoadTicket, Mutation, Settle, Workflow};
