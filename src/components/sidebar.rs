//! Collapsible console navigation.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ConsoleConfig;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Boxicons class for the leading icon.
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub heading: Option<&'static str>,
    pub links: &'static [NavLink],
}

const fn link(href: &'static str, label: &'static str, icon: &'static str) -> NavLink {
    NavLink { href, label, icon }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { heading: None, links: &[link("/dashboard", "Dashboard", "bx-grid-alt")] },
    NavSection {
        heading: Some("Management"),
        links: &[
            link("/posts", "Post Table Info", "bx-file"),
            link("/projects", "Project Table Info", "bx-folder"),
            link("/categories", "Category & Tag Info", "bx-purchase-tag"),
            link("/visitors", "Visitors Info", "bx-show"),
        ],
    },
    NavSection {
        heading: Some("Forms"),
        links: &[
            link("/post-form", "Post Form", "bx-clipboard"),
            link("/product-form", "Product Form", "bx-clipboard"),
        ],
    },
    NavSection { heading: Some("Components"), links: &[link("/calendar", "Calendar", "bx-calendar")] },
    NavSection { heading: Some("Settings"), links: &[link("/faq", "FAQ Page", "bx-help-circle")] },
];

/// Width class for the sidebar in each expansion state.
pub fn width_class(open: bool) -> &'static str {
    if open { "w-64" } else { "w-16" }
}

/// Fixed left sidebar; labels and brand only show while expanded.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ConsoleConfig>();
    let navigate = use_navigate();

    let open = move || ui.get().sidebar_open;
    let toggle = move |_| ui.update(UiState::toggle_sidebar);

    let dark_key = config.dark_mode_storage_key.clone();
    let toggle_theme = move |_| {
        let next = dark_mode::toggle(&dark_key, ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let store = SessionStore::browser(&config);
    let auth_path = config.auth_path.clone();
    let on_logout = move |_| {
        store.clear();
        log::info!("signed out; session record cleared");
        navigate(&auth_path, NavigateOptions { replace: true, ..Default::default() });
    };

    let sections = NAV_SECTIONS
        .iter()
        .map(|section| {
            let heading = section.heading.map(|h| {
                view! {
                    <div class="sidebar__heading px-4 text-xs text-gray-400 uppercase">
                        <Show when=open>{h}</Show>
                    </div>
                }
            });
            let links = section
                .links
                .iter()
                .map(|l| {
                    view! {
                        <A href=l.href attr:class="sidebar__link flex items-center gap-3 px-4 py-2 rounded-md hover:bg-purple-700 transition">
                            <i class=format!("bx {} text-xl", l.icon)></i>
                            <Show when=open>
                                <span>{l.label}</span>
                            </Show>
                        </A>
                    }
                })
                .collect_view();
            view! {
                {heading}
                {links}
            }
        })
        .collect_view();

    view! {
        <aside class=move || {
            let state = ui.get();
            format!("sidebar {} {}", width_class(state.sidebar_open), state.surface_class())
        }>
            <div class="sidebar__header flex items-center justify-between px-4 py-4">
                <Show when=open>
                    <div class="sidebar__brand flex items-center gap-2">
                        <div class="sidebar__badge">"RQ"</div>
                        <span class="sidebar__title">"RxQ Console"</span>
                    </div>
                </Show>
                <button class="sidebar__toggle" aria-label="Toggle sidebar" on:click=toggle>
                    {move || if open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <nav class="sidebar__nav mt-4 flex flex-col space-y-4">{sections}</nav>
            <div class="sidebar__footer">
                <button class="sidebar__link" on:click=toggle_theme>
                    <i class="bx bx-moon text-xl"></i>
                    <Show when=open>
                        <span>{move || if ui.get().dark_mode { "Light Mode" } else { "Dark Mode" }}</span>
                    </Show>
                </button>
                <button class="sidebar__link" on:click=on_logout>
                    <i class="bx bx-log-out text-xl"></i>
                    <Show when=open>
                        <span>"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}
