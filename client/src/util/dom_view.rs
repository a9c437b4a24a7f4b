//! Browser implementation of [`widgets::view::View`].
//!
//! ARCHITECTURE
//! ============
//! A `DomView` resolves anchors lazily on every call, so it tolerates markup
//! that Leptos re-renders underneath it. Registered listeners forward reduced
//! [`ViewEvent`]s to an [`EventSink`] and are removed again when the view is
//! dropped, which is how a carousel unmounts cleanly.

use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};
use widgets::view::{Anchor, EventKind, View, ViewEvent};

use super::anchors::{Selector, selector};

/// Receives every event a component registered for.
pub type EventSink = Rc<dyn Fn(Anchor, ViewEvent)>;

struct Listener {
    target: EventTarget,
    name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.name, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::debug!("failed to remove {} listener", self.name);
        }
    }
}

pub struct DomView {
    document: Document,
    scope: Option<Element>,
    sink: EventSink,
    listeners: Vec<Listener>,
}

impl DomView {
    /// View resolving anchors against the whole document.
    pub fn document(sink: EventSink) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document, scope: None, sink, listeners: Vec::new() })
    }

    /// View resolving anchors inside `scope` only.
    pub fn scoped(scope: Element, sink: EventSink) -> Option<Self> {
        let mut view = Self::document(sink)?;
        view.scope = Some(scope);
        Some(view)
    }

    fn query(&self, css: &str) -> Option<Element> {
        let found = match &self.scope {
            Some(scope) => scope.query_selector(css),
            None => self.document.query_selector(css),
        };
        found.ok().flatten()
    }

    fn query_all(&self, css: &str) -> Option<NodeList> {
        let found = match &self.scope {
            Some(scope) => scope.query_selector_all(css),
            None => self.document.query_selector_all(css),
        };
        found.ok()
    }

    fn element(&self, anchor: Anchor) -> Option<Element> {
        match selector(anchor) {
            Selector::Root => self.document.document_element(),
            Selector::Document | Selector::Window => None,
            Selector::First(css) => self.query(css),
            Selector::Nth(css, index) => {
                let index = u32::try_from(index).ok()?;
                self.query_all(css)?.item(index)?.dyn_into::<Element>().ok()
            }
        }
    }

    fn html(&self, anchor: Anchor) -> Option<HtmlElement> {
        self.element(anchor)?.dyn_into::<HtmlElement>().ok()
    }

    fn target(&self, anchor: Anchor) -> Option<EventTarget> {
        match selector(anchor) {
            Selector::Document => Some(self.document.clone().into()),
            Selector::Window => web_sys::window().map(Into::into),
            _ => self.element(anchor).map(Into::into),
        }
    }
}

impl View for DomView {
    fn has(&self, anchor: Anchor) -> bool {
        match selector(anchor) {
            Selector::Document => true,
            Selector::Window => web_sys::window().is_some(),
            _ => self.element(anchor).is_some(),
        }
    }

    fn set_attribute(&mut self, anchor: Anchor, name: &str, value: &str) {
        if let Some(el) = self.element(anchor) {
            if el.set_attribute(name, value).is_err() {
                log::debug!("failed to set {name} on {anchor}");
            }
        }
    }

    fn set_style(&mut self, anchor: Anchor, property: &str, value: &str) {
        if let Some(el) = self.html(anchor) {
            if el.style().set_property(property, value).is_err() {
                log::debug!("failed to set style {property} on {anchor}");
            }
        }
    }

    fn set_class(&mut self, anchor: Anchor, class: &str, enabled: bool) {
        if let Some(el) = self.element(anchor) {
            if el.class_list().toggle_with_force(class, enabled).is_err() {
                log::debug!("failed to toggle class {class} on {anchor}");
            }
        }
    }

    fn measure_width(&self, anchor: Anchor) -> f64 {
        self.html(anchor).map_or(0.0, |el| f64::from(el.offset_width()))
    }

    fn on(&mut self, anchor: Anchor, kind: EventKind) {
        let Some(target) = self.target(anchor) else {
            return;
        };
        let sink = Rc::clone(&self.sink);
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(view_event) = read_event(kind, &event) {
                sink(anchor, view_event);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let name = kind.dom_name();
        if target
            .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to listen for {name} on {anchor}");
            return;
        }
        self.listeners.push(Listener { target, name, callback });
    }
}

fn read_event(kind: EventKind, event: &web_sys::Event) -> Option<ViewEvent> {
    match kind {
        EventKind::Click => Some(ViewEvent::Click),
        EventKind::KeyDown => event
            .dyn_ref::<web_sys::KeyboardEvent>()
            .map(|e| ViewEvent::KeyDown(e.key())),
        EventKind::TouchStart => first_touch_x(event).map(ViewEvent::TouchStart),
        EventKind::TouchEnd => first_touch_x(event).map(ViewEvent::TouchEnd),
        EventKind::PointerEnter => Some(ViewEvent::PointerEnter),
        EventKind::PointerLeave => Some(ViewEvent::PointerLeave),
        EventKind::Resize => Some(ViewEvent::Resize(viewport_width())),
    }
}

fn first_touch_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<web_sys::TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}

/// Current `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
