//! Networking for the records backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` supplies the browser [`records::api::Transport`]; request building,
//! decoding, and error mapping live in the `records` crate.

pub mod api;
