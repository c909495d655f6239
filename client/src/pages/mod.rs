//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its workflow signal and delegates the async sequencing to
//! `state::page` and the chrome to `components`.

pub mod courses;
pub mod grades;
pub mod students;
