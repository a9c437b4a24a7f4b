//! Light/dark theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active mode is reflected as a `data-theme` attribute on the document
//! root; stylesheets key off that attribute. The user's choice persists in a
//! single storage slot so it survives reloads and is shared by every page.
//!
//! DESIGN
//! ======
//! `ThemePreference` is the only writer of the mode. It is constructed once
//! per page by [`ThemePreference::initialize`], before any content renders,
//! and picks up the header controls through
//! [`ThemePreference::attach_controls`] once they exist. The mode changes
//! only through [`ThemePreference::toggle`]. Hosts that need to react to a
//! change (re-styling cards, playing the overlay transition) register through
//! [`ThemePreference::subscribe`] instead of polling.
//!
//! The toggle button and the two icons are optional markup. When they are
//! missing the corresponding behavior is skipped without a diagnostic.

use crate::consts::{
    OVERLAY_FADE_MS, OVERLAY_HOLD_MS, OVERLAY_PEAK_OPACITY, THEME_ATTRIBUTE, THEME_STORAGE_KEY,
};
use crate::store::PreferenceStore;
use crate::view::{Anchor, EventKind, View, ViewEvent};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Active color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Persisted and attribute form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Mode implied by the host's `prefers-color-scheme` signal.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// One stage of the full-screen overlay shown while the theme switches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayPhase {
    /// Overlay inserted and faded up.
    FadeIn,
    /// Overlay fading back to transparent.
    FadeOut,
    /// Overlay removed from the document.
    Remove,
}

impl OverlayPhase {
    /// Target opacity, `None` once the overlay is gone.
    #[must_use]
    pub fn opacity(self) -> Option<f64> {
        match self {
            Self::FadeIn => Some(OVERLAY_PEAK_OPACITY),
            Self::FadeOut => Some(0.0),
            Self::Remove => None,
        }
    }
}

/// A phase and its offset from the moment the toggle happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStep {
    pub at_ms: u32,
    pub phase: OverlayPhase,
}

/// Overlay schedule played after every toggle.
pub const TRANSITION: [TransitionStep; 3] = [
    TransitionStep { at_ms: 0, phase: OverlayPhase::FadeIn },
    TransitionStep { at_ms: OVERLAY_HOLD_MS, phase: OverlayPhase::FadeOut },
    TransitionStep { at_ms: OVERLAY_HOLD_MS + OVERLAY_FADE_MS, phase: OverlayPhase::Remove },
];

type Subscriber = Box<dyn FnMut(ThemeMode)>;

/// Persisted theme controller bound to one document.
pub struct ThemePreference<S, V> {
    store: S,
    view: V,
    mode: ThemeMode,
    toggle_bound: bool,
    subscribers: Vec<Subscriber>,
}

impl<S: PreferenceStore, V: View> ThemePreference<S, V> {
    /// Resolve the starting mode and render it.
    ///
    /// A stored value wins. Without one, the mode follows `prefers_dark` and
    /// is written back so later loads skip the system check.
    pub fn initialize(store: S, prefers_dark: bool, view: V) -> Self {
        let stored = store.get(THEME_STORAGE_KEY).as_deref().and_then(ThemeMode::parse);
        let mut this = Self {
            store,
            view,
            mode: stored.unwrap_or_else(|| ThemeMode::from_system(prefers_dark)),
            toggle_bound: false,
            subscribers: Vec::new(),
        };
        if stored.is_none() {
            this.persist();
        }
        this.apply();
        this.bind_toggle();
        this
    }

    /// Render the icons and bind the toggle for markup mounted after
    /// initialization. Binding happens at most once.
    pub fn attach_controls(&mut self) {
        self.apply();
        self.bind_toggle();
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Flip the mode, render and persist it, then notify subscribers.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.apply();
        self.persist();
        for subscriber in &mut self.subscribers {
            subscriber(self.mode);
        }
        self.mode
    }

    /// Register a callback run with the new mode after each toggle.
    pub fn subscribe(&mut self, callback: impl FnMut(ThemeMode) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Route a host event. Returns the new mode when it caused a toggle.
    pub fn dispatch(&mut self, anchor: Anchor, event: &ViewEvent) -> Option<ThemeMode> {
        match (anchor, event) {
            (Anchor::ThemeToggle, ViewEvent::Click) => Some(self.toggle()),
            _ => None,
        }
    }

    fn bind_toggle(&mut self) {
        if self.toggle_bound || !self.view.has(Anchor::ThemeToggle) {
            return;
        }
        self.view.on(Anchor::ThemeToggle, EventKind::Click);
        self.toggle_bound = true;
    }

    fn apply(&mut self) {
        self.view.set_attribute(Anchor::Root, THEME_ATTRIBUTE, self.mode.as_str());
        if self.view.has(Anchor::LightIcon) && self.view.has(Anchor::DarkIcon) {
            let (light, dark) = if self.mode.is_dark() { ("none", "block") } else { ("block", "none") };
            self.view.set_style(Anchor::LightIcon, "display", light);
            self.view.set_style(Anchor::DarkIcon, "display", dark);
        }
    }

    fn persist(&mut self) {
        self.store.set(THEME_STORAGE_KEY, self.mode.as_str());
    }
}
