//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_modal::AuthModal;
use crate::components::navbar::Navbar;
use crate::net::api::ApiClient;
use crate::pages::home::HomePage;
use crate::state::auth_flow::AuthDialogState;
use crate::state::session::SessionStore;
use crate::state::store::Store;
use crate::storage::LocalStorage;
use crate::util::theme_class;

/// Root application component.
///
/// Builds the initial preference and session state from durable storage,
/// provides the shared contexts, and sets up client-side routing. Both
/// reads happen at construction, so a reloaded tab reconciles with whatever
/// another instance persisted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(Store::new(LocalStorage).state());
    let session = RwSignal::new(SessionStore::new(LocalStorage).state().clone());
    let dialog = RwSignal::new(AuthDialogState::default());
    let api = ApiClient::default();

    provide_context(store);
    provide_context(session);
    provide_context(dialog);
    provide_context(api);

    // Re-apply the document theme class whenever the preference changes.
    Effect::new(move || theme_class::apply(store.get().theme));

    view! {
        <Title text="Grimoire"/>

        <Router>
            <Navbar/>
            <AuthModal/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
