//! Client-side page state.
//!
//! DESIGN
//! ======
//! Each page keeps a `RwSignal<Workflow<E>>` of its own. `page` holds the
//! async drivers that apply workflow transitions around network calls.

pub mod page;
