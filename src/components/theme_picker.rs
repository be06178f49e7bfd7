//! Theme switcher buttons.

use leptos::prelude::*;

use crate::state::store::{Action, Store, StoreState};
use crate::state::theme::Theme;
use crate::storage::LocalStorage;

/// One button per theme; the active one is highlighted.
///
/// Selection goes through the preference store so the choice is persisted
/// before the signal (and with it the document class) updates.
#[component]
pub fn ThemePicker() -> impl IntoView {
    let store = expect_context::<RwSignal<StoreState>>();

    view! {
        <div class="theme-picker">
            {Theme::ALL
                .into_iter()
                .map(|theme| {
                    let on_select = move |_| {
                        let mut prefs = Store::new(LocalStorage);
                        prefs.dispatch(Action::SetTheme(theme));
                        store.set(prefs.state());
                    };
                    view! {
                        <button
                            class="theme-picker__option"
                            class=("theme-picker__option--active", move || store.get().theme == theme)
                            title=theme.label()
                            on:click=on_select
                        >
                            {theme.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
