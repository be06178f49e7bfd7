#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::state::theme::Theme;
use crate::storage::{StorageBackend, THEME_KEY};

/// Reducer state for the preference store. Currently the active theme only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreState {
    pub theme: Theme,
}

/// Actions accepted by [`Store::dispatch`].
///
/// A closed enum: the reducer match is total, so there is no unknown-action
/// case to ignore at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SetTheme(Theme),
}

/// Preference store over durable storage.
///
/// Construction reads the persisted theme, falling back to the default when
/// the key is absent or holds an unknown name. [`Store::dispatch`] persists
/// the payload first, then replaces the in-memory state.
#[derive(Clone, Debug)]
pub struct Store<S> {
    storage: S,
    state: StoreState,
}

impl<S: StorageBackend> Store<S> {
    pub fn new(storage: S) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .and_then(|name| Theme::parse(&name))
            .unwrap_or_default();
        Self {
            storage,
            state: StoreState { theme },
        }
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Apply an action: persist its payload, then update the state.
    pub fn dispatch(&mut self, action: Action) {
        self.state = match action {
            Action::SetTheme(theme) => {
                self.storage.set(THEME_KEY, theme.as_str());
                StoreState { theme }
            }
        };
    }
}
