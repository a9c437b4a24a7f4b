//! Theme-dependent color and placeholder helpers for catalog cards.

use widgets::theme::ThemeMode;

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Border hue for an app card, seeded by the last UTF-16 unit of its id.
pub fn card_hue(app_id: &str) -> u32 {
    app_id
        .encode_utf16()
        .last()
        .map_or(0, |unit| u32::from(unit) * 37 % 360)
}

/// Inline style for an app card under `mode`.
pub fn card_style(app_id: &str, mode: ThemeMode) -> String {
    let hue = card_hue(app_id);
    match mode {
        ThemeMode::Dark => {
            format!("background-color: rgba(30, 30, 38, 0.85); border-left: 5px solid hsla({hue}, 75%, 55%, 1.0);")
        }
        ThemeMode::Light => {
            format!("background-color: rgba(240, 240, 245, 1.0); border-left: 5px solid hsla({hue}, 85%, 55%, 1.0);")
        }
    }
}

/// Placeholder hue for the icon at `index`, spread by the golden angle.
pub fn placeholder_hue(index: usize) -> usize {
    index * 137 % 360
}

/// 80x80 SVG data URI standing in for an icon that failed to load.
pub fn placeholder_icon(index: usize) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='80' height='80'>\
         <rect width='80' height='80' fill='hsl({}, 70%, 60%)'/>\
         <text x='40' y='40' fill='white' font-family='Arial' font-weight='bold' font-size='24' \
         text-anchor='middle' dominant-baseline='middle'>App{}</text></svg>",
        placeholder_hue(index),
        index + 1
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

/// Banner background for the app details header.
pub fn banner_gradient(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "background: linear-gradient(135deg, #092635 0%, #1B4242 30%, #5C8374 70%, #9EC8B9 100%);",
        ThemeMode::Light => "background: linear-gradient(135deg, #ADB2D4 0%, #C7D9DD 30%, #D5E5D5 70%, #EEF1DA 100%);",
    }
}
