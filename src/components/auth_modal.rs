//! Login / registration dialog.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::auth_flow::{self, AuthDialogState, AuthMode};
use crate::state::session::SessionState;

/// Modal dialog for logging in or registering.
///
/// Registration is validated locally (password policy plus confirmation)
/// before any request leaves the client. The submit button is disabled
/// while a request is in flight. Closing the dialog discards everything
/// that was typed.
#[component]
pub fn AuthModal() -> impl IntoView {
    let dialog = expect_context::<RwSignal<AuthDialogState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();

    let is_register = move || dialog.get().mode == AuthMode::Register;
    let in_flight = move || dialog.get().in_flight;

    let on_close = move |_| dialog.update(AuthDialogState::close);

    let submit = Callback::new(move |()| {
        let mut current = dialog.get_untracked();
        // Single-flight: refuse while a request is pending.
        if !current.begin_request() {
            return;
        }

        // Registration preconditions are checked before any network call.
        if current.mode == AuthMode::Register {
            current.issues =
                auth_flow::validate_registration(&current.password, &current.confirm);
            if !current.issues.is_empty() {
                current.finish_request();
                dialog.set(current);
                return;
            }
        }

        #[cfg(feature = "csr")]
        {
            dialog.set(current.clone());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let mut state = current;
                match state.mode {
                    AuthMode::Login => {
                        let mut sessions = crate::state::session::SessionStore::new(
                            crate::storage::LocalStorage,
                        );
                        auth_flow::submit_login(&mut state, &mut sessions, &api).await;
                        session.set(sessions.state().clone());
                    }
                    AuthMode::Register => {
                        auth_flow::submit_registration(&mut state, &api).await;
                    }
                }
                state.finish_request();
                dialog.set(state);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &session);
            current.finish_request();
            dialog.set(current);
        }
    });

    view! {
        <Show when=move || dialog.get().open>
            <div class="dialog-backdrop" on:click=on_close>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>{move || if is_register() { "Register" } else { "Log in" }}</h2>

                    <Show when=is_register>
                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || dialog.get().username
                                on:input=move |ev| {
                                    dialog.update(|d| d.username = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                prop:value=move || dialog.get().email
                                on:input=move |ev| {
                                    dialog.update(|d| d.email = event_target_value(&ev));
                                }
                            />
                        </label>
                    </Show>

                    <Show when=move || !is_register()>
                        <label class="dialog__label">
                            "Username or email"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || dialog.get().username
                                on:input=move |ev| {
                                    dialog.update(|d| d.username = event_target_value(&ev));
                                }
                            />
                        </label>
                    </Show>

                    <label class="dialog__label">
                        "Password"
                        <input
                            class="dialog__input"
                            type="password"
                            prop:value=move || dialog.get().password
                            on:input=move |ev| {
                                dialog.update(|d| d.password = event_target_value(&ev));
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    submit.run(());
                                }
                            }
                        />
                    </label>

                    <Show when=is_register>
                        <label class="dialog__label">
                            "Confirm password"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || dialog.get().confirm
                                on:input=move |ev| {
                                    dialog.update(|d| d.confirm = event_target_value(&ev));
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        submit.run(());
                                    }
                                }
                            />
                        </label>
                        <Show when=move || !dialog.get().issues.is_empty()>
                            <ul class="dialog__issues">
                                {move || {
                                    dialog
                                        .get()
                                        .issues
                                        .into_iter()
                                        .map(|issue| view! { <li>{issue.message()}</li> })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                        <p class="dialog__terms">
                            "By registering you accept our terms and conditions."
                        </p>
                    </Show>

                    <Show when=move || !is_register()>
                        <label class="dialog__remember">
                            <input
                                type="checkbox"
                                prop:checked=move || dialog.get().remember
                                on:change=move |ev| {
                                    dialog.update(|d| d.remember = event_target_checked(&ev));
                                }
                            />
                            "Keep me signed in"
                        </label>
                    </Show>

                    <Show when=move || dialog.get().error.is_some()>
                        <p class="dialog__error">
                            {move || dialog.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <div class="dialog__actions">
                        <button
                            class="dialog__mode-switch"
                            on:click=move |_| {
                                dialog
                                    .update(|d| {
                                        let next = if d.mode == AuthMode::Register {
                                            AuthMode::Login
                                        } else {
                                            AuthMode::Register
                                        };
                                        d.switch_mode(next);
                                    });
                            }
                        >
                            {move || {
                                if is_register() {
                                    "Already have an account? Log in"
                                } else {
                                    "Need an account? Register"
                                }
                            }}
                        </button>
                        <span class="dialog__spacer"></span>
                        <button class="btn" on:click=on_close>"Cancel"</button>
                        <button
                            class="btn btn--primary"
                            prop:disabled=in_flight
                            on:click=move |_| submit.run(())
                        >
                            {move || if is_register() { "Register" } else { "Log in" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
