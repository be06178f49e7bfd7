use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_known_names() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("forest"), Some(Theme::Forest));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("neon"), None);
    assert_eq!(Theme::parse("Light"), None);
    assert_eq!(Theme::parse(" dark"), None);
}

#[test]
fn as_str_matches_parse_for_all_themes() {
    for theme in Theme::ALL {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn labels_are_distinct() {
    assert_ne!(Theme::Light.label(), Theme::Dark.label());
    assert_ne!(Theme::Dark.label(), Theme::Forest.label());
}
