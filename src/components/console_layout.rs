//! Sidebar + content frame shared by every protected page.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::ui::UiState;

#[component]
pub fn ConsoleLayout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let content_class = move || {
        let state = ui.get();
        let offset = if state.sidebar_open { "ml-64" } else { "ml-16" };
        format!("console-layout__content {offset} {}", state.surface_class())
    };

    view! {
        <div class="console-layout">
            <Sidebar/>
            <main class=content_class>{children()}</main>
        </div>
    }
}
