//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::console_layout::ConsoleLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::config::ConsoleConfig;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, post_form::PostFormPage, product_form::ProductFormPage,
};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the console config and UI state, then routes the public auth view
/// and the protected console pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ConsoleConfig>().unwrap_or_default();
    let ui = RwSignal::new(UiState::default());

    // Theme preference is browser-only; apply it after hydration.
    let dark_key = config.dark_mode_storage_key.clone();
    Effect::new(move || {
        let enabled = dark_mode::read_preference(&dark_key);
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    provide_context(config);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/rxq-console.css"/>
        <Title text="RxQ Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=|| protected(DashboardPage)/>
                <Route path=StaticSegment("post-form") view=|| protected(PostFormPage)/>
                <Route path=StaticSegment("product-form") view=|| protected(ProductFormPage)/>
            </Routes>
        </Router>
    }
}

/// Wrap a page in the session gate and the console chrome.
fn protected<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <ProtectedRoute>
            <ConsoleLayout>{page()}</ConsoleLayout>
        </ProtectedRoute>
    }
}
