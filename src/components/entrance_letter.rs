//! Decorative mode glyph whose entrance animation gates the auth form.

use leptos::prelude::*;

use crate::state::auth_form::AuthMode;

/// Large `L`/`S` glyph that scales and tilts in over two seconds.
///
/// The element is rebuilt whenever `mode` changes so the CSS animation
/// restarts; `on_settled` fires with that mode when it ends. A timer of the
/// same length fires it too, so the gate opens even without the stylesheet.
#[component]
pub fn EntranceLetter(#[prop(into)] mode: Signal<AuthMode>, on_settled: Callback<AuthMode>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::state::auth_form::ENTRANCE_ANIMATION_MS;

        let timer = StoredValue::new_local(None::<Timeout>);
        Effect::new(move || {
            let current = mode.get();
            // Replacing the handle drops (and cancels) the previous mode's timer.
            timer.set_value(Some(Timeout::new(ENTRANCE_ANIMATION_MS, move || on_settled.run(current))));
        });
        on_cleanup(move || {
            let _ = timer.try_update_value(|t| *t = None);
        });
    }

    move || {
        let current = mode.get();
        view! {
            <div
                class="entrance-letter font-extrabold select-none z-10"
                aria-hidden="true"
                on:animationend=move |_| on_settled.run(current)
            >
                {current.glyph()}
            </div>
        }
    }
}
