//! Browser host for the persisted light/dark theme.
//!
//! Wires [`widgets::theme::ThemePreference`] to `localStorage`, the
//! `prefers-color-scheme` media query and the header's `#themeToggle` button,
//! and mirrors every change into the `UiState` signal. Requires a browser
//! environment.
//!
//! The mode is applied in [`bootstrap`] before the app mounts, so the first
//! render already carries it. The header controls are bound afterwards by
//! [`attach_controls`].
//!
//! TRADE-OFFS
//! ==========
//! The controller lives in a thread-local for the whole page. Native builds
//! (tests) no-op and report the default light mode.

use leptos::prelude::*;
use widgets::theme::ThemeMode;

use crate::state::ui::UiState;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use widgets::store::{MemoryStore, PreferenceStore};
#[cfg(feature = "csr")]
use widgets::theme::{TRANSITION, ThemePreference};
#[cfg(feature = "csr")]
use widgets::view::{Anchor, ViewEvent};

#[cfg(feature = "csr")]
use super::dom_view::{DomView, EventSink};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Media query for the OS dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage`, or process memory when the browser denies access.
#[cfg(feature = "csr")]
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

#[cfg(feature = "csr")]
impl BrowserStore {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            _ => {
                log::warn!("localStorage unavailable; theme will not persist");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Local(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("failed to persist {key}");
                }
            }
            Self::Memory(store) => store.set(key, value),
        }
    }
}

#[cfg(feature = "csr")]
thread_local! {
    static THEME: RefCell<Option<ThemePreference<BrowserStore, DomView>>> = const { RefCell::new(None) };
}

/// Whether the OS asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Resolve and apply the starting mode to `<html>`. Call before mounting.
///
/// Returns the resolved starting mode.
pub fn bootstrap(ui: RwSignal<UiState>) -> ThemeMode {
    #[cfg(feature = "csr")]
    {
        let sink: EventSink = Rc::new(|anchor: Anchor, event: ViewEvent| {
            THEME.with(|slot| {
                let Ok(mut guard) = slot.try_borrow_mut() else {
                    return;
                };
                if let Some(theme) = guard.as_mut() {
                    theme.dispatch(anchor, &event);
                }
            });
        });
        let Some(view) = DomView::document(sink) else {
            log::warn!("theme not initialized: no document");
            return ThemeMode::default();
        };
        let mut theme = ThemePreference::initialize(BrowserStore::open(), prefers_dark(), view);
        let mode = theme.mode();
        ui.update(|u| u.theme = mode);
        theme.subscribe(move |mode| {
            ui.update(|u| u.theme = mode);
            play_transition(ui);
        });
        THEME.with(|slot| *slot.borrow_mut() = Some(theme));
        mode
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ui;
        ThemeMode::default()
    }
}

/// Bind the header's toggle and icons. Call after mounting.
pub fn attach_controls() {
    #[cfg(feature = "csr")]
    THEME.with(|slot| {
        if let Some(theme) = slot.borrow_mut().as_mut() {
            theme.attach_controls();
        }
    });
}

#[cfg(feature = "csr")]
fn play_transition(ui: RwSignal<UiState>) {
    ui.update(UiState::mount_overlay);
    for step in TRANSITION {
        Timeout::new(step.at_ms, move || ui.update(|u| u.apply_overlay(step.phase))).forget();
    }
}
