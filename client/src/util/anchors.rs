//! Markup contract between rendered components and `widgets` anchors.
//!
//! Components render these ids and classes; [`DomView`](super::dom_view)
//! resolves anchors through [`selector`] within its scope element.

use widgets::view::Anchor;

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const CAROUSEL_CONTAINER_CLASS: &str = "carousel-container";
pub const CAROUSEL_TRACK_CLASS: &str = "carousel-track";
pub const CAROUSEL_SLIDE_CLASS: &str = "carousel-slide";
pub const CAROUSEL_INDICATOR_CLASS: &str = "indicator";

/// How an anchor is found in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// `<html>`.
    Root,
    /// The document itself (event target only).
    Document,
    /// The window (event target only).
    Window,
    /// First match of a CSS selector within the scope.
    First(&'static str),
    /// n-th match of a CSS selector within the scope.
    Nth(&'static str, usize),
}

/// Resolution rule for `anchor`.
pub fn selector(anchor: Anchor) -> Selector {
    match anchor {
        Anchor::Root => Selector::Root,
        Anchor::Document => Selector::Document,
        Anchor::Window => Selector::Window,
        Anchor::ThemeToggle => Selector::First("#themeToggle"),
        Anchor::LightIcon => Selector::First("#themeToggle .light-icon"),
        Anchor::DarkIcon => Selector::First("#themeToggle .dark-icon"),
        Anchor::Container => Selector::First(".carousel-container"),
        Anchor::Track => Selector::First(".carousel-track"),
        Anchor::Previous => Selector::First(".carousel-button.prev"),
        Anchor::Next => Selector::First(".carousel-button.next"),
        Anchor::Slide(i) => Selector::Nth(".carousel-slide", i),
        Anchor::Indicator(i) => Selector::Nth(".carousel-indicators .indicator", i),
    }
}
