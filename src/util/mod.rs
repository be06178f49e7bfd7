//! Browser-facing utilities.

pub mod theme_class;
