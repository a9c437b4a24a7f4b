//! DOM capability seam.
//!
//! Components never hold browser handles. They name the elements they care
//! about with an [`Anchor`] and ask a [`View`] to mutate them. The host
//! resolves anchors against the real document and routes the DOM events a
//! component registered for back into that component as [`ViewEvent`]s.
//!
//! Anchors that cannot be resolved are not an error at this layer: writes to
//! them are dropped and [`View::has`] reports `false`, which is how components
//! feature-detect optional markup.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// A named element (or global event target) a component can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The document root (`<html>`).
    Root,
    /// The theme toggle button.
    ThemeToggle,
    /// Icon shown while the light theme is active.
    LightIcon,
    /// Icon shown while the dark theme is active.
    DarkIcon,
    /// Carousel hover region.
    Container,
    /// Carousel track translated to reveal the current window.
    Track,
    /// "Previous" carousel button.
    Previous,
    /// "Next" carousel button.
    Next,
    /// The n-th carousel slide.
    Slide(usize),
    /// The n-th carousel group indicator.
    Indicator(usize),
    /// Document-level keyboard target.
    Document,
    /// Window-level resize target.
    Window,
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::ThemeToggle => f.write_str("theme toggle"),
            Self::LightIcon => f.write_str("light icon"),
            Self::DarkIcon => f.write_str("dark icon"),
            Self::Container => f.write_str("carousel container"),
            Self::Track => f.write_str("carousel track"),
            Self::Previous => f.write_str("previous button"),
            Self::Next => f.write_str("next button"),
            Self::Slide(i) => write!(f, "slide {i}"),
            Self::Indicator(i) => write!(f, "indicator {i}"),
            Self::Document => f.write_str("document"),
            Self::Window => f.write_str("window"),
        }
    }
}

/// Event types a component can subscribe to on an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
    TouchStart,
    TouchEnd,
    PointerEnter,
    PointerLeave,
    Resize,
}

impl EventKind {
    /// DOM event name the host listens for.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyDown => "keydown",
            Self::TouchStart => "touchstart",
            Self::TouchEnd => "touchend",
            Self::PointerEnter => "mouseenter",
            Self::PointerLeave => "mouseleave",
            Self::Resize => "resize",
        }
    }
}

/// An input routed back from the host, already reduced to what components need.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Click,
    /// Key name as reported by the browser (e.g. `"ArrowLeft"`).
    KeyDown(String),
    /// Horizontal screen position of the first changed touch.
    TouchStart(f64),
    TouchEnd(f64),
    PointerEnter,
    PointerLeave,
    /// New viewport width in CSS pixels.
    Resize(f64),
}

/// Mutation and event-registration capability over a rendered document.
pub trait View {
    /// Whether `anchor` resolves to an element.
    fn has(&self, anchor: Anchor) -> bool;

    /// Set an attribute on `anchor`.
    fn set_attribute(&mut self, anchor: Anchor, name: &str, value: &str);

    /// Set an inline style property on `anchor`.
    fn set_style(&mut self, anchor: Anchor, property: &str, value: &str);

    /// Add (`enabled`) or remove a CSS class on `anchor`.
    fn set_class(&mut self, anchor: Anchor, class: &str, enabled: bool);

    /// Rendered width of `anchor` in CSS pixels, `0.0` when unresolved.
    fn measure_width(&self, anchor: Anchor) -> f64;

    /// Route `kind` events on `anchor` back to the owning component.
    fn on(&mut self, anchor: Anchor, kind: EventKind);
}
