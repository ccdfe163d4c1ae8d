//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Only `login` is public; the rest sit behind
//! `ProtectedRoute` in `app`.

pub mod dashboard;
pub mod login;
pub mod post_form;
pub mod product_form;
