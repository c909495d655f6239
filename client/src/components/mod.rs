//! Reusable UI components shared by the record pages.
//!
//! ARCHITECTURE
//! ============
//! Components receive signals and callbacks as props and never reach for
//! page state directly.

pub mod notice_bar;
pub mod record_dialog;
