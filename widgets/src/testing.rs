//! Recording fakes for the view and ticker seams.

use std::collections::{HashMap, HashSet};

use crate::carousel::Ticker;
use crate::store::{MemoryStore, PreferenceStore};
use crate::view::{Anchor, EventKind, View};

/// A single mutation a component asked the view to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Attribute(Anchor, String, String),
    Style(Anchor, String, String),
    Class(Anchor, String, bool),
}

/// In-memory document: a set of present anchors plus their current state.
#[derive(Debug, Default)]
pub struct FakeView {
    present: HashSet<Anchor>,
    widths: HashMap<Anchor, f64>,
    attributes: HashMap<(Anchor, String), String>,
    styles: HashMap<(Anchor, String), String>,
    classes: HashSet<(Anchor, String)>,
    pub writes: Vec<Write>,
    pub listeners: Vec<(Anchor, EventKind)>,
}

impl FakeView {
    pub fn with(anchors: &[Anchor]) -> Self {
        Self { present: anchors.iter().copied().collect(), ..Self::default() }
    }

    /// Full carousel markup: container, track, buttons, slides and indicators.
    pub fn carousel(slides: usize, indicators: usize, slide_width: f64) -> Self {
        let mut view = Self::with(&[
            Anchor::Container,
            Anchor::Track,
            Anchor::Previous,
            Anchor::Next,
            Anchor::Document,
            Anchor::Window,
        ]);
        view.present.extend((0..slides).map(Anchor::Slide));
        view.present.extend((0..indicators).map(Anchor::Indicator));
        view.widths.insert(Anchor::Slide(0), slide_width);
        view
    }

    /// Simulate markup mounted after the component attached.
    pub fn insert(&mut self, anchor: Anchor) {
        self.present.insert(anchor);
    }

    pub fn remove(&mut self, anchor: Anchor) {
        self.present.remove(&anchor);
    }

    pub fn attribute(&self, anchor: Anchor, name: &str) -> Option<&str> {
        self.attributes.get(&(anchor, name.to_owned())).map(String::as_str)
    }

    pub fn style(&self, anchor: Anchor, property: &str) -> Option<&str> {
        self.styles.get(&(anchor, property.to_owned())).map(String::as_str)
    }

    pub fn has_class(&self, anchor: Anchor, class: &str) -> bool {
        self.classes.contains(&(anchor, class.to_owned()))
    }

    pub fn listens(&self, anchor: Anchor, kind: EventKind) -> bool {
        self.listeners.contains(&(anchor, kind))
    }

    pub fn listener_count(&self, anchor: Anchor, kind: EventKind) -> usize {
        self.listeners.iter().filter(|l| **l == (anchor, kind)).count()
    }
}

impl View for FakeView {
    fn has(&self, anchor: Anchor) -> bool {
        self.present.contains(&anchor)
    }

    fn set_attribute(&mut self, anchor: Anchor, name: &str, value: &str) {
        self.writes.push(Write::Attribute(anchor, name.to_owned(), value.to_owned()));
        self.attributes.insert((anchor, name.to_owned()), value.to_owned());
    }

    fn set_style(&mut self, anchor: Anchor, property: &str, value: &str) {
        self.writes.push(Write::Style(anchor, property.to_owned(), value.to_owned()));
        self.styles.insert((anchor, property.to_owned()), value.to_owned());
    }

    fn set_class(&mut self, anchor: Anchor, class: &str, enabled: bool) {
        self.writes.push(Write::Class(anchor, class.to_owned(), enabled));
        if enabled {
            self.classes.insert((anchor, class.to_owned()));
        } else {
            self.classes.remove(&(anchor, class.to_owned()));
        }
    }

    fn measure_width(&self, anchor: Anchor) -> f64 {
        self.widths.get(&anchor).copied().unwrap_or(0.0)
    }

    fn on(&mut self, anchor: Anchor, kind: EventKind) {
        self.listeners.push((anchor, kind));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerCall {
    Start(u32),
    Cancel,
}

/// Ticker that records calls and flags overlapping timers.
#[derive(Debug, Default)]
pub struct FakeTicker {
    pub calls: Vec<TickerCall>,
    pub running: bool,
    pub overlapped: bool,
}

impl Ticker for FakeTicker {
    fn start(&mut self, period_ms: u32) {
        if self.running {
            self.overlapped = true;
        }
        self.running = true;
        self.calls.push(TickerCall::Start(period_ms));
    }

    fn cancel(&mut self) {
        self.running = false;
        self.calls.push(TickerCall::Cancel);
    }
}

/// Store that keeps every `set` call on top of a [`MemoryStore`].
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    pub sets: Vec<(String, String)>,
}

impl RecordingStore {
    pub fn with(key: &str, value: &str) -> Self {
        Self { inner: MemoryStore::with(key, value), sets: Vec::new() }
    }
}

impl PreferenceStore for RecordingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.sets.push((key.to_owned(), value.to_owned()));
        self.inner.set(key, value);
    }
}
