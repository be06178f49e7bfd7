use super::*;
use crate::storage::MemoryStorage;

// =============================================================
// Initialization
// =============================================================

#[test]
fn new_store_defaults_to_light_when_nothing_persisted() {
    let store = Store::new(MemoryStorage::default());
    assert_eq!(store.state().theme, Theme::Light);
}

#[test]
fn new_store_falls_back_to_default_on_unknown_persisted_value() {
    let storage = MemoryStorage::default();
    storage.set(THEME_KEY, "neon");

    let store = Store::new(storage.clone());
    assert_eq!(store.state().theme, Theme::Light);
    // The garbage value is only ignored, not rewritten.
    assert_eq!(storage.get(THEME_KEY), Some("neon".to_owned()));
}

#[test]
fn new_store_reads_persisted_theme() {
    let storage = MemoryStorage::default();
    storage.set(THEME_KEY, "forest");

    let store = Store::new(storage);
    assert_eq!(store.state().theme, Theme::Forest);
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn dispatch_persists_every_theme_and_survives_reinitialization() {
    let storage = MemoryStorage::default();
    let mut store = Store::new(storage.clone());

    for theme in Theme::ALL {
        store.dispatch(Action::SetTheme(theme));
        assert_eq!(store.state().theme, theme);
        assert_eq!(storage.get(THEME_KEY), Some(theme.as_str().to_owned()));

        let reopened = Store::new(storage.clone());
        assert_eq!(reopened.state().theme, theme);
    }
}

#[test]
fn dispatch_writes_storage_before_state_is_observable() {
    let storage = MemoryStorage::default();
    let mut store = Store::new(storage.clone());

    store.dispatch(Action::SetTheme(Theme::Dark));
    assert_eq!(storage.get(THEME_KEY), Some("dark".to_owned()));
    assert_eq!(store.state(), StoreState { theme: Theme::Dark });
}
