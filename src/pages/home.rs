//! Landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Home page — greets the visitor and reflects the session state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <main class="home-page">
            <h1>"Grimoire"</h1>
            <p>"Your campaign companion: characters, spells, and notes in one place."</p>
            <Show
                when=move || session.get().is_logged_in()
                fallback=|| view! { <p class="home-page__hint">"Log in to open your grimoire."</p> }
            >
                <p class="home-page__hint">"Welcome back, adventurer."</p>
            </Show>
        </main>
    }
}
