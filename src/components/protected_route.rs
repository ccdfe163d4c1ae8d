//! Route wrapper that only renders its children for a live session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ConsoleConfig;
use crate::state::guard::{self, RouteDecision};
use crate::state::session::SessionStore;
use crate::util::clock;

/// Gate protected content behind the local session check.
///
/// The decision runs once the route mounts in the browser; until then a
/// placeholder renders, so server and hydrated markup agree. A blocked visit
/// replaces the history entry with the auth view.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let navigate = use_navigate();
    let access = RwSignal::new(None::<RouteDecision>);

    let store = SessionStore::browser(&config);
    let auth_path = config.auth_path.clone();
    Effect::new(move || {
        let decision = guard::protected_access(&store, clock::now_millis());
        if decision == RouteDecision::Redirect {
            navigate(&auth_path, NavigateOptions { replace: true, ..Default::default() });
        }
        access.set(Some(decision));
    });

    view! {
        <Show
            when=move || access.get() == Some(RouteDecision::Render)
            fallback=|| view! { <div class="console-loading"><p>"Loading..."</p></div> }
        >
            {children()}
        </Show>
    }
}
