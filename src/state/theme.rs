#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Available display themes.
///
/// The persisted value is the lowercase name. Anything else found in
/// storage falls back to the default at read time; unknown values can
/// never be written because [`crate::state::store::Action`] carries the
/// enum itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Forest,
}

impl Theme {
    /// All themes, in picker display order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Forest];

    /// Parse a persisted theme name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "forest" => Some(Theme::Forest),
            _ => None,
        }
    }

    /// The persisted name, also the document class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Forest => "forest",
        }
    }

    /// Human-readable label for the theme picker.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Forest => "Forest",
        }
    }
}
