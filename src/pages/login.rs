//! Auth page with animated login/signup switching.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the public entry route. On mount it validates any stored session
//! once against the remote validator and skips straight to the protected area
//! when the session holds. Otherwise the credential card appears after the
//! entrance glyph finishes animating.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::entrance_letter::EntranceLetter;
use crate::config::ConsoleConfig;
use crate::state::auth_form::{AuthField, AuthFormState, AuthMode, SubmitOutcome};
use crate::state::guard::GuardPhase;
use crate::state::session::SessionStore;

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ConsoleConfig>();
    let navigate = use_navigate();
    let phase = RwSignal::new(GuardPhase::Loading);
    let form = RwSignal::new(AuthFormState::default());

    #[cfg(feature = "hydrate")]
    {
        let store = SessionStore::browser(&config);
        let validator = crate::net::validate::HttpTokenValidator::new(config.validate_endpoint.clone());
        let (check, abort) =
            crate::state::guard::abortable_check_token(store, validator, crate::util::clock::now_millis());
        on_cleanup(move || abort.abort());
        leptos::task::spawn_local(async move {
            if let Some(next) = check.await {
                phase.set(next);
            }
        });
    }

    let protected_path = config.protected_path.clone();
    Effect::new(move || {
        if phase.get() == GuardPhase::Authenticated {
            navigate(&protected_path, replace());
        }
    });

    let mode = Memo::new(move |_| form.with(|f| f.mode));
    let on_settled = Callback::new(move |settled: AuthMode| {
        form.try_update(|f| f.settle_animation_for(settled));
    });

    let store = StoredValue::new(SessionStore::browser(&config));
    let submit_config = StoredValue::new(config.clone());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = store.with_value(|store| {
            submit_config.with_value(|cfg| form.try_update(|f| f.submit(store, cfg)))
        });
        if outcome == Some(SubmitOutcome::Authenticated) {
            phase.set(GuardPhase::Authenticated);
        }
    };

    let set_field = move |field: AuthField| {
        move |ev: leptos::ev::Event| form.update(|f| f.update_field(field, event_target_value(&ev)))
    };
    let switch_mode = move |_| {
        let next = mode.get_untracked().other();
        form.update(|f| f.set_mode(next));
    };

    view! {
        <Show
            when=move || phase.get().shows_form()
            fallback=|| {
                view! {
                    <div class="auth-page auth-page--loading flex items-center justify-center h-screen bg-gray-900 text-white">
                        <h2>"Loading..."</h2>
                    </div>
                }
            }
        >
            <div class="auth-page flex flex-col items-center justify-center h-screen bg-gray-900 text-white relative overflow-hidden">
                <Show when=move || form.with(AuthFormState::is_ready)>
                    <form class="auth-card w-80 p-8 rounded-lg bg-gray-800 shadow-lg relative z-20" on:submit=on_submit>
                        <h2 class="auth-card__title text-2xl font-semibold mb-6 text-center">
                            {move || mode.get().title()}
                        </h2>
                        <Show when=move || mode.get() == AuthMode::Signup>
                            <input
                                class="auth-input auth-input--enter"
                                type="text"
                                placeholder="Username"
                                prop:value=move || form.with(|f| f.fields.username.clone())
                                on:input=set_field(AuthField::Username)
                            />
                        </Show>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || form.with(|f| f.fields.email.clone())
                            on:input=set_field(AuthField::Email)
                        />
                        {move || {
                            form.with(|f| f.email_error().map(str::to_owned))
                                .map(|msg| view! { <p class="auth-card__error text-red-500 text-sm mb-2">{msg}</p> })
                        }}
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || form.with(|f| f.fields.password.clone())
                            on:input=set_field(AuthField::Password)
                        />
                        <button class="auth-card__submit" type="submit">
                            {move || mode.get().title()}
                        </button>
                        <div class="auth-card__switch mt-4 text-center text-sm text-gray-400">
                            {move || match mode.get() {
                                AuthMode::Login => "Don\u{2019}t have an account? ",
                                AuthMode::Signup => "Already have an account? ",
                            }}
                            <button type="button" class="underline hover:text-indigo-400" on:click=switch_mode>
                                {move || mode.get().other().title()}
                            </button>
                        </div>
                    </form>
                </Show>
                <EntranceLetter mode=mode on_settled=on_settled/>
            </div>
        </Show>
    }
}
