//! UI components shared across pages.

pub mod auth_modal;
pub mod navbar;
pub mod theme_picker;
