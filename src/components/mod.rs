//! Reusable UI building blocks.
//!
//! ARCHITECTURE
//! ============
//! Components render from shared state in `state` and never touch browser
//! storage directly; session reads and writes go through `SessionStore`.

pub mod console_layout;
pub mod entrance_letter;
pub mod line_chart;
pub mod protected_route;
pub mod sidebar;
