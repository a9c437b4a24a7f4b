//! Screenshot carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! App detail pages show their screenshots as a horizontal track of slides,
//! of which `items_per_view` are visible at once. The host renders the
//! markup (track, prev/next buttons, one indicator per group) and hands the
//! controller a [`View`] over it plus a [`Ticker`] for autoplay.
//!
//! DESIGN
//! ======
//! Window math lives in the plain [`CarouselState`] value so the wraparound
//! rules are testable in isolation. [`CarouselController`] owns the state,
//! the view and the ticker, and turns routed [`ViewEvent`]s into moves.
//!
//! Wraparound: with `max = len - items_per_view`, a target past `max` goes
//! to the start; a negative target goes to `max - (items_per_view - 1)`.
//!
//! ERROR HANDLING
//! ==============
//! Missing required markup makes [`CarouselController::attach`] return a
//! [`CarouselError`] before any listener is registered or any style written.
//! The page still renders, just without a working carousel.
//!
//! TRADE-OFFS
//! ==========
//! A change of `items_per_view` on resize is not patched in place. The
//! controller reports [`Dispatch::Relayout`] and the host rebuilds the
//! markup and a fresh controller, since the indicator count changes.

use crate::consts::{
    ACTIVE_CLASS, AUTOPLAY_INTERVAL_MS, BREAKPOINT_MEDIUM_PX, BREAKPOINT_SMALL_PX,
    MAX_ITEMS_PER_VIEW, SWIPE_THRESHOLD_PX,
};
use crate::view::{Anchor, EventKind, View, ViewEvent};

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Error returned by [`CarouselController::attach`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    NoSlides,
    #[error("carousel markup is missing its {0}")]
    MissingAnchor(Anchor),
}

/// One image position in the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub position: usize,
}

impl Slide {
    /// Number each image by its position in the list.
    #[must_use]
    pub fn from_images(images: &[String]) -> Vec<Self> {
        images
            .iter()
            .enumerate()
            .map(|(position, image)| Self { image: image.clone(), position })
            .collect()
    }

    /// `"n/len"` caption shown on the slide.
    #[must_use]
    pub fn caption(&self, len: usize) -> String {
        format!("{}/{len}", self.position + 1)
    }
}

/// Slides visible at once for a viewport `width` in CSS pixels.
#[must_use]
pub fn items_per_view(width: f64) -> usize {
    if width < BREAKPOINT_SMALL_PX {
        1
    } else if width < BREAKPOINT_MEDIUM_PX {
        2
    } else {
        MAX_ITEMS_PER_VIEW
    }
}

/// Window position over a fixed-length slide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    items_per_view: usize,
    index: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize, items_per_view: usize) -> Self {
        Self { len, items_per_view: items_per_view.max(1), index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Largest index that still fills the window.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.len.saturating_sub(self.items_per_view)
    }

    /// Number of indicators, one per `items_per_view` block.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.len.div_ceil(self.items_per_view)
    }

    /// Indicator owning the current index.
    #[must_use]
    pub fn active_group(&self) -> usize {
        self.index / self.items_per_view
    }

    /// Apply the wraparound rule to a requested index.
    #[must_use]
    pub fn resolve(&self, target: i64) -> usize {
        let max = i64::try_from(self.max_index()).unwrap_or(i64::MAX);
        if target > max {
            0
        } else if target < 0 {
            let ipv = i64::try_from(self.items_per_view).unwrap_or(1);
            usize::try_from(max - (ipv - 1)).unwrap_or(0)
        } else {
            usize::try_from(target).unwrap_or(0)
        }
    }

    /// Resolve `target` and make it current.
    pub fn move_to(&mut self, target: i64) -> usize {
        self.index = self.resolve(target);
        self.index
    }

    fn offset(&self, delta: i64) -> i64 {
        i64::try_from(self.index).unwrap_or(i64::MAX).saturating_add(delta)
    }

    fn group_start(&self, group: usize) -> i64 {
        i64::try_from(group.saturating_mul(self.items_per_view)).unwrap_or(i64::MAX)
    }
}

/// Recurring autoplay timer supplied by the host.
///
/// The controller always cancels before starting, so an implementation only
/// ever needs to track one timer.
pub trait Ticker {
    fn start(&mut self, period_ms: u32);
    fn cancel(&mut self);
}

/// Outcome of routing an event into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing changed.
    Ignored,
    /// The window now starts at this index (possibly unchanged).
    Moved(usize),
    /// Autoplay stopped while the pointer hovers.
    Paused,
    /// Autoplay restarted with a fresh period.
    Resumed,
    /// The viewport crossed a breakpoint; the host must rebuild the carousel.
    Relayout { items_per_view: usize },
}

/// Live carousel bound to rendered markup.
pub struct CarouselController<V, T> {
    state: CarouselState,
    view: V,
    ticker: T,
    paused: bool,
    retired: bool,
    touch_start_x: Option<f64>,
}

impl<V: View, T: Ticker> CarouselController<V, T> {
    /// Validate the markup, render the first window and start autoplay.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::NoSlides`] for an empty sequence and
    /// [`CarouselError::MissingAnchor`] when the track, either button or the
    /// first slide is absent. Nothing is written to the view in either case.
    pub fn attach(
        slides: Vec<Slide>,
        view: V,
        ticker: T,
        viewport_width: f64,
    ) -> Result<Self, CarouselError> {
        if let Err(err) = check_markup(&slides, &view) {
            log::warn!("carousel not initialized: {err}");
            return Err(err);
        }
        let state = CarouselState::new(slides.len(), items_per_view(viewport_width));
        let mut this = Self {
            state,
            view,
            ticker,
            paused: false,
            retired: false,
            touch_start_x: None,
        };
        this.bind_inputs();
        this.render();
        this.restart_autoplay();
        Ok(this)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.state.index()
    }

    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.state.items_per_view()
    }

    #[must_use]
    pub fn active_group(&self) -> usize {
        self.state.active_group()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.state.group_count()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    // --- Navigation ---

    /// Move the window to `target`, wrapping out-of-range values.
    ///
    /// Requesting the current index is a no-op for the view.
    pub fn move_to(&mut self, target: i64) -> usize {
        let index = self.state.resolve(target);
        if index != self.state.index() {
            self.state.move_to(target);
            self.render();
        }
        index
    }

    pub fn next(&mut self) -> usize {
        self.move_to(self.state.offset(1))
    }

    pub fn previous(&mut self) -> usize {
        self.move_to(self.state.offset(-1))
    }

    pub fn jump_to_group(&mut self, group: usize) -> usize {
        self.move_to(self.state.group_start(group))
    }

    // --- Autoplay ---

    /// Advance on an autoplay tick; ignored while hovered.
    pub fn tick(&mut self) -> Dispatch {
        if self.paused || self.retired {
            return Dispatch::Ignored;
        }
        Dispatch::Moved(self.next())
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.ticker.cancel();
    }

    /// Clear the pause and start a fresh autoplay period.
    pub fn resume(&mut self) {
        self.paused = false;
        self.restart_autoplay();
    }

    // --- Events ---

    /// Route a host event into the matching operation.
    pub fn dispatch(&mut self, anchor: Anchor, event: &ViewEvent) -> Dispatch {
        if self.retired {
            return Dispatch::Ignored;
        }
        match (anchor, event) {
            (Anchor::Previous, ViewEvent::Click) => Dispatch::Moved(self.previous()),
            (Anchor::Next, ViewEvent::Click) => Dispatch::Moved(self.next()),
            (Anchor::Indicator(group), ViewEvent::Click) => Dispatch::Moved(self.jump_to_group(group)),
            (Anchor::Document, ViewEvent::KeyDown(key)) => match key.as_str() {
                "ArrowLeft" => Dispatch::Moved(self.previous()),
                "ArrowRight" => Dispatch::Moved(self.next()),
                _ => Dispatch::Ignored,
            },
            (Anchor::Track, ViewEvent::TouchStart(x)) => {
                self.touch_start_x = Some(*x);
                Dispatch::Ignored
            }
            (Anchor::Track, ViewEvent::TouchEnd(x)) => self.finish_swipe(*x),
            (Anchor::Container, ViewEvent::PointerEnter) => {
                self.pause();
                Dispatch::Paused
            }
            (Anchor::Container, ViewEvent::PointerLeave) => {
                self.resume();
                Dispatch::Resumed
            }
            (Anchor::Window, ViewEvent::Resize(width)) => self.resize(*width),
            _ => Dispatch::Ignored,
        }
    }

    /// Recompute `items_per_view`; a change retires this controller.
    pub fn resize(&mut self, viewport_width: f64) -> Dispatch {
        let next = items_per_view(viewport_width);
        if next == self.state.items_per_view() {
            return Dispatch::Ignored;
        }
        log::debug!(
            "carousel relayout: {} -> {next} items per view",
            self.state.items_per_view()
        );
        self.retired = true;
        self.ticker.cancel();
        Dispatch::Relayout { items_per_view: next }
    }

    fn finish_swipe(&mut self, end_x: f64) -> Dispatch {
        let Some(start_x) = self.touch_start_x.take() else {
            return Dispatch::Ignored;
        };
        if start_x - end_x > SWIPE_THRESHOLD_PX {
            Dispatch::Moved(self.next())
        } else if end_x - start_x > SWIPE_THRESHOLD_PX {
            Dispatch::Moved(self.previous())
        } else {
            Dispatch::Ignored
        }
    }

    fn restart_autoplay(&mut self) {
        self.ticker.cancel();
        self.ticker.start(AUTOPLAY_INTERVAL_MS);
    }

    fn bind_inputs(&mut self) {
        self.view.on(Anchor::Previous, EventKind::Click);
        self.view.on(Anchor::Next, EventKind::Click);
        for group in 0..self.state.group_count() {
            if self.view.has(Anchor::Indicator(group)) {
                self.view.on(Anchor::Indicator(group), EventKind::Click);
            }
        }
        self.view.on(Anchor::Document, EventKind::KeyDown);
        self.view.on(Anchor::Track, EventKind::TouchStart);
        self.view.on(Anchor::Track, EventKind::TouchEnd);
        if self.view.has(Anchor::Container) {
            self.view.on(Anchor::Container, EventKind::PointerEnter);
            self.view.on(Anchor::Container, EventKind::PointerLeave);
        }
        self.view.on(Anchor::Window, EventKind::Resize);
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self) {
        let slide_width = self.view.measure_width(Anchor::Slide(0));
        let offset = self.state.index() as f64 * slide_width;
        self.view
            .set_style(Anchor::Track, "transform", &format!("translateX(-{offset}px)"));
        let active = self.state.active_group();
        for group in 0..self.state.group_count() {
            if self.view.has(Anchor::Indicator(group)) {
                self.view.set_class(Anchor::Indicator(group), ACTIVE_CLASS, group == active);
            }
        }
    }
}

fn check_markup(slides: &[Slide], view: &impl View) -> Result<(), CarouselError> {
    if slides.is_empty() {
        return Err(CarouselError::NoSlides);
    }
    for anchor in [Anchor::Track, Anchor::Previous, Anchor::Next, Anchor::Slide(0)] {
        if !view.has(anchor) {
            return Err(CarouselError::MissingAnchor(anchor));
        }
    }
    Ok(())
}
