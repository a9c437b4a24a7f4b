use super::*;

#[test]
fn card_hue_uses_last_character() {
    // '1' is 49: 49 * 37 % 360 = 13
    assert_eq!(card_hue("app1"), 13);
    assert_eq!(card_hue("x1"), card_hue("app1"));
    assert_eq!(card_hue(""), 0);
}

#[test]
fn card_style_switches_palette_with_theme() {
    let dark = card_style("app1", ThemeMode::Dark);
    assert!(dark.contains("rgba(30, 30, 38, 0.85)"));
    assert!(dark.contains("hsla(13, 75%, 55%, 1.0)"));
    let light = card_style("app1", ThemeMode::Light);
    assert!(light.contains("rgba(240, 240, 245, 1.0)"));
    assert!(light.contains("hsla(13, 85%, 55%, 1.0)"));
}

#[test]
fn placeholder_hues_spread_by_golden_angle() {
    assert_eq!(placeholder_hue(0), 0);
    assert_eq!(placeholder_hue(1), 137);
    assert_eq!(placeholder_hue(3), 51);
}

#[test]
fn placeholder_icon_is_svg_data_uri_with_label() {
    let uri = placeholder_icon(1);
    assert!(uri.starts_with("data:image/svg+xml,"));
    assert!(uri.contains("App2"));
    assert!(uri.contains("hsl%28137%2C%2070%25%2C%2060%25%29"));
}

#[test]
fn banner_gradient_differs_per_theme() {
    assert!(banner_gradient(ThemeMode::Dark).contains("#092635"));
    assert!(banner_gradient(ThemeMode::Light).contains("#ADB2D4"));
}
