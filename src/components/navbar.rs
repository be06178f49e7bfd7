//! Top navigation bar with the app title, nav links, theme picker, and
//! session controls.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::theme_picker::ThemePicker;
use crate::net::api::ApiClient;
use crate::state::auth_flow::{AuthDialogState, AuthMode};
use crate::state::session::SessionState;

/// Navigation bar.
///
/// Logged out it shows Login/Register buttons opening the auth dialog;
/// logged in, the user id and a Logout button. Logout notifies the backend
/// best-effort and always clears the local session; dependent views
/// re-render from the session signal rather than a page reload.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dialog = expect_context::<RwSignal<AuthDialogState>>();
    // Held in a `Copy` StoredValue so the logout handler stays `Fn`.
    let api = StoredValue::new(expect_context::<ApiClient>());

    let user_id = move || session.get().user_id.unwrap_or_default();
    let notice = move || dialog.get().notice;

    let on_login = move |_| dialog.update(|d| d.open(AuthMode::Login));
    let on_register = move |_| dialog.update(|d| d.open(AuthMode::Register));

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let api = api.get_value();
            leptos::task::spawn_local(async move {
                let mut sessions =
                    crate::state::session::SessionStore::new(crate::storage::LocalStorage);
                sessions.logout(&api).await;
                session.set(sessions.state().clone());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = api;
        }
    };

    view! {
        <header class="navbar">
            <a href="/" class="navbar__title">"Grimoire"</a>
            <nav class="navbar__links">
                <a href="/">"Home"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <span class="navbar__spacer"></span>
            <ThemePicker/>
            <Show
                when=move || session.get().is_logged_in()
                fallback=move || {
                    view! {
                        <button class="btn" on:click=on_login>"Login"</button>
                        <button class="btn btn--primary" on:click=on_register>"Register"</button>
                    }
                }
            >
                <span class="navbar__user">{user_id}</span>
                <button class="btn" on:click=on_logout>"Logout"</button>
            </Show>
            <Show when=move || notice().is_some()>
                <div class="navbar__notice">
                    <span>{move || notice().unwrap_or_default()}</span>
                    <button
                        class="navbar__notice-dismiss"
                        on:click=move |_| dialog.update(|d| d.notice = None)
                    >
                        "\u{00d7}"
                    </button>
                </div>
            </Show>
        </header>
    }
}
