//! Screenshot carousel bridge between Leptos markup and the `widgets`
//! carousel controller.
//!
//! ARCHITECTURE
//! ============
//! Leptos renders the static markup (track, slides, buttons, indicators) for
//! the current items-per-view. Once the frame is mounted, an effect attaches a
//! [`CarouselController`] over a scoped [`DomView`] and an [`IntervalTicker`].
//! Input events and autoplay ticks reach the controller through weak handles,
//! so dropping the frame drops the controller, its listeners and its timer.
//!
//! When the controller reports a breakpoint change it retires itself and the
//! new items-per-view is written to `layout`, which remounts the frame with
//! the matching indicator count.
//!
//! [`CarouselController`]: widgets::carousel::CarouselController
//! [`DomView`]: crate::util::dom_view::DomView
//! [`IntervalTicker`]: crate::util::ticker::IntervalTicker

use leptos::prelude::*;
use widgets::carousel::{Slide, items_per_view};

use crate::util::anchors::{
    CAROUSEL_CONTAINER_CLASS, CAROUSEL_INDICATOR_CLASS, CAROUSEL_SLIDE_CLASS, CAROUSEL_TRACK_CLASS,
};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::{Rc, Weak};

#[cfg(feature = "csr")]
use widgets::carousel::{CarouselController, Dispatch};
#[cfg(feature = "csr")]
use widgets::view::{Anchor, ViewEvent};

#[cfg(feature = "csr")]
use crate::util::dom_view::{DomView, EventSink, viewport_width};
#[cfg(feature = "csr")]
use crate::util::ticker::IntervalTicker;

#[cfg(test)]
#[path = "screenshot_carousel_test.rs"]
mod screenshot_carousel_test;

#[cfg(feature = "csr")]
type Carousel = CarouselController<DomView, IntervalTicker>;
#[cfg(feature = "csr")]
type CarouselSlot = Rc<RefCell<Option<Carousel>>>;

/// Shown instead of the carousel when an app has no screenshots.
pub const NO_SCREENSHOTS_MESSAGE: &str = "No screenshots available";

/// Indicator count for `len` slides shown `per_view` at a time.
pub fn indicator_count(len: usize, per_view: usize) -> usize {
    len.div_ceil(per_view.max(1))
}

/// Alt text for the screenshot at zero-based `position`.
pub fn screenshot_alt(app_name: &str, position: usize) -> String {
    format!("{app_name} Screenshot {}", position + 1)
}

#[component]
pub fn ScreenshotCarousel(screenshots: Vec<String>, #[prop(into)] app_name: String) -> impl IntoView {
    if screenshots.is_empty() {
        return view! { <p class="no-screenshots">{NO_SCREENSHOTS_MESSAGE}</p> }.into_any();
    }

    let slides = Slide::from_images(&screenshots);
    let layout = RwSignal::new(items_per_view(initial_width()));

    view! {
        <div class="screenshots-carousel">
            {move || {
                view! {
                    <CarouselFrame
                        slides=slides.clone()
                        per_view=layout.get()
                        layout=layout
                        app_name=app_name.clone()
                    />
                }
            }}
        </div>
    }
    .into_any()
}

/// One mounted layout of the carousel.
#[component]
fn CarouselFrame(slides: Vec<Slide>, per_view: usize, layout: RwSignal<usize>, app_name: String) -> impl IntoView {
    let frame_ref = NodeRef::<leptos::html::Div>::new();
    let len = slides.len();
    let groups = indicator_count(len, per_view);

    #[cfg(feature = "csr")]
    {
        let slot: CarouselSlot = Rc::new(RefCell::new(None));
        let slides = slides.clone();
        Effect::new(move || {
            if slot.borrow().is_some() {
                return;
            }
            let Some(frame) = frame_ref.get() else {
                return;
            };
            attach(&slot, frame.into(), slides.clone(), layout);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = layout;
    }

    view! {
        <div class="carousel-frame" node_ref=frame_ref style=format!("--items-per-view: {per_view};")>
            <div class=CAROUSEL_CONTAINER_CLASS>
                <div class=CAROUSEL_TRACK_CLASS>
                    {slides
                        .iter()
                        .map(|slide| {
                            view! {
                                <div class=CAROUSEL_SLIDE_CLASS>
                                    <img src=slide.image.clone() alt=screenshot_alt(&app_name, slide.position) loading="lazy"/>
                                    <div class="slide-number">{slide.caption(len)}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="carousel-button prev" aria-label="Previous screenshots">"‹"</button>
                <button class="carousel-button next" aria-label="Next screenshots">"›"</button>
            </div>
            <div class="carousel-indicators">
                {(0..groups)
                    .map(|group| {
                        view! {
                            <button class=CAROUSEL_INDICATOR_CLASS aria-label=format!("Show screenshot group {}", group + 1)></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn initial_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        viewport_width()
    }
    #[cfg(not(feature = "csr"))]
    {
        widgets::consts::BREAKPOINT_MEDIUM_PX
    }
}

#[cfg(feature = "csr")]
fn attach(slot: &CarouselSlot, frame: web_sys::Element, slides: Vec<Slide>, layout: RwSignal<usize>) {
    let events = Rc::downgrade(slot);
    let sink: EventSink = Rc::new(move |anchor: Anchor, event: ViewEvent| {
        let outcome = with_carousel(&events, |carousel| carousel.dispatch(anchor, &event));
        if let Some(Dispatch::Relayout { items_per_view }) = outcome {
            layout.set(items_per_view);
        }
    });

    let ticks = Rc::downgrade(slot);
    let ticker = IntervalTicker::new(move || {
        with_carousel(&ticks, Carousel::tick);
    });

    let Some(view) = DomView::scoped(frame, sink) else {
        log::warn!("carousel not initialized: no document");
        return;
    };
    // attach logs the reason on failure
    if let Ok(carousel) = CarouselController::attach(slides, view, ticker, viewport_width()) {
        *slot.borrow_mut() = Some(carousel);
    }
}

/// Run `f` on the live controller, skipping re-entrant and post-drop calls.
#[cfg(feature = "csr")]
fn with_carousel<R>(slot: &Weak<RefCell<Option<Carousel>>>, f: impl FnOnce(&mut Carousel) -> R) -> Option<R> {
    let slot = slot.upgrade()?;
    let mut guard = slot.try_borrow_mut().ok()?;
    guard.as_mut().map(f)
}
