//! # client
//!
//! Leptos + WASM admin frontend for the student records backend.
//!
//! Three route-level pages (students, courses, grades) each drive one
//! `records::Workflow` held in a signal. All list/create/edit/delete
//! semantics live in the `records` crate; this crate renders them and
//! bridges browser events and HTTP to the workflow transitions.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
