//! Autoplay ticker backed by `gloo_timers::callback::Interval`.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use widgets::carousel::Ticker;

/// Runs `on_tick` every period while started. Dropping the ticker stops it.
pub struct IntervalTicker {
    on_tick: Rc<dyn Fn()>,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self { on_tick: Rc::new(on_tick), interval: None }
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, period_ms: u32) {
        let on_tick = Rc::clone(&self.on_tick);
        self.interval = Some(Interval::new(period_ms, move || on_tick()));
    }

    fn cancel(&mut self) {
        // Dropping an Interval clears it.
        self.interval = None;
    }
}
