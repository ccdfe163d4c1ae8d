//! Server-side rendering entry for a host binary.
//!
//! The host merges [`router`] into its own axum app and serves the
//! cargo-leptos `pkg/` output (WASM, JS, `rxq-console.css`) next to it.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};

use crate::app::{App, shell};

/// Axum router that server-renders every console route.
pub fn router(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || shell(opts.clone())
        })
        .with_state(options)
}
