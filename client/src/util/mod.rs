//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `format` holds pure display/parse helpers; `dialog` wraps the browser's
//! blocking confirmation prompt.

pub mod dialog;
pub mod format;
