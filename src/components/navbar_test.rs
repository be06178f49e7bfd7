use super::*;

use crate::state::store::StoreState;

// =============================================================
// Construction
// =============================================================

#[test]
fn navbar_builds_with_provided_contexts() {
    let owner = Owner::new();
    owner.set();

    provide_context(RwSignal::new(StoreState::default()));
    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(AuthDialogState::default()));
    provide_context(ApiClient::default());

    // Building the view must leave the handlers re-invocable: `Show`
    // re-runs its children closure, so nothing owned may be moved out.
    let _view = Navbar();
}
