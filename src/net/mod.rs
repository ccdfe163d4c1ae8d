//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console has a single remote dependency: the token validation endpoint
//! consulted once when a visitor lands on the auth view.

pub mod validate;
