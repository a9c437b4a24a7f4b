//! Shared constants for the widgets crate.

// ── Carousel layout ─────────────────────────────────────────────

/// Viewport widths below this show one slide per view.
pub const BREAKPOINT_SMALL_PX: f64 = 576.0;

/// Viewport widths below this (and at least [`BREAKPOINT_SMALL_PX`]) show two.
pub const BREAKPOINT_MEDIUM_PX: f64 = 992.0;

/// Slides per view at or above [`BREAKPOINT_MEDIUM_PX`].
pub const MAX_ITEMS_PER_VIEW: usize = 3;

// ── Carousel input ──────────────────────────────────────────────

/// Autoplay period in milliseconds.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// Minimum horizontal travel for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// CSS class toggled on the active indicator.
pub const ACTIVE_CLASS: &str = "active";

// ── Theme ───────────────────────────────────────────────────────

/// Storage slot holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "app-theme";

/// Root attribute carrying the active mode.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Peak overlay opacity during the theme transition.
pub const OVERLAY_PEAK_OPACITY: f64 = 0.5;

/// Delay before the overlay starts fading out.
pub const OVERLAY_HOLD_MS: u32 = 100;

/// Fade-out duration; the overlay is removed once it elapses.
pub const OVERLAY_FADE_MS: u32 = 300;
