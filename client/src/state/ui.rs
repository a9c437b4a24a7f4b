//! Local UI chrome state (theme mode, transition overlay).
//!
//! DESIGN
//! ======
//! The persisted preference lives in `widgets::theme::ThemePreference`; this
//! is its reactive mirror for components that restyle on a mode change.

use widgets::theme::{OverlayPhase, ThemeMode};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through a `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: ThemeMode,
    /// Opacity of the theme transition overlay; `None` when not mounted.
    pub overlay_opacity: Option<f64>,
}

impl UiState {
    /// Insert the overlay fully transparent so the fade-in animates.
    pub fn mount_overlay(&mut self) {
        self.overlay_opacity = Some(0.0);
    }

    pub fn apply_overlay(&mut self, phase: OverlayPhase) {
        self.overlay_opacity = phase.opacity();
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}
