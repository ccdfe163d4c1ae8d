//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `guard`, `auth_form`, etc.) so
//! individual components can depend on small focused models. Everything here
//! is plain Rust with no reactive types, so it tests natively.

pub mod auth_form;
pub mod dashboard;
pub mod forms;
pub mod guard;
pub mod session;
pub mod ui;
