//! Theme class application on the document element.
//!
//! Each theme maps to a `theme-<name>` class on `<html>`; the stylesheet
//! keys its token sets off that class. Requires a browser environment.

use crate::state::theme::Theme;

/// Apply the class for `theme`, removing the other theme classes.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                for other in Theme::ALL {
                    if other != theme {
                        let _ = class_list.remove_1(&format!("theme-{}", other.as_str()));
                    }
                }
                let _ = class_list.add_1(&format!("theme-{}", theme.as_str()));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
