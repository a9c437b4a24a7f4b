use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::store::MemoryStore;
use crate::testing::{FakeView, RecordingStore};

// =============================================================
// Helpers
// =============================================================

fn full_view() -> FakeView {
    FakeView::with(&[Anchor::Root, Anchor::ThemeToggle, Anchor::LightIcon, Anchor::DarkIcon])
}

fn stored(theme: &ThemePreference<MemoryStore, FakeView>) -> Option<String> {
    theme.store().get(THEME_STORAGE_KEY)
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn mode_parse_accepts_known_values_only() {
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse(" light "), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("true"), None);
}

#[test]
fn mode_toggled_flips() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
}

// =============================================================
// Initialize
// =============================================================

#[test]
fn stored_mode_wins_over_system() {
    let theme = ThemePreference::initialize(MemoryStore::with(THEME_STORAGE_KEY, "light"), true, full_view());
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(theme.view().attribute(Anchor::Root, "data-theme"), Some("light"));
}

#[test]
fn stored_mode_is_applied_without_writing_back() {
    let theme = ThemePreference::initialize(RecordingStore::with(THEME_STORAGE_KEY, "dark"), false, full_view());
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert_eq!(theme.view().attribute(Anchor::Root, "data-theme"), Some("dark"));
    assert!(theme.store().sets.is_empty());
}

#[test]
fn toggle_after_stored_mode_writes_once() {
    let mut theme = ThemePreference::initialize(RecordingStore::with(THEME_STORAGE_KEY, "dark"), false, full_view());
    theme.toggle();
    assert_eq!(theme.store().sets, vec![(THEME_STORAGE_KEY.to_owned(), "light".to_owned())]);
}

#[test]
fn absent_mode_follows_system_and_persists() {
    let theme = ThemePreference::initialize(MemoryStore::new(), true, full_view());
    assert_eq!(theme.mode(), ThemeMode::Dark);
    assert_eq!(stored(&theme).as_deref(), Some("dark"));
    assert_eq!(theme.view().style(Anchor::LightIcon, "display"), Some("none"));
    assert_eq!(theme.view().style(Anchor::DarkIcon, "display"), Some("block"));
}

#[test]
fn garbage_stored_value_is_treated_as_absent() {
    let theme = ThemePreference::initialize(MemoryStore::with(THEME_STORAGE_KEY, "purple"), false, full_view());
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(stored(&theme).as_deref(), Some("light"));
}

#[test]
fn toggle_control_registered_once() {
    let theme = ThemePreference::initialize(MemoryStore::new(), false, full_view());
    assert_eq!(theme.view().listener_count(Anchor::ThemeToggle, EventKind::Click), 1);
}

#[test]
fn missing_toggle_control_registers_nothing() {
    let theme = ThemePreference::initialize(MemoryStore::new(), false, FakeView::with(&[Anchor::Root]));
    assert!(theme.view().listeners.is_empty());
    assert_eq!(theme.view().attribute(Anchor::Root, "data-theme"), Some("light"));
}

#[test]
fn controls_mounted_later_are_bound_once() {
    let store = MemoryStore::with(THEME_STORAGE_KEY, "dark");
    let mut theme = ThemePreference::initialize(store, false, FakeView::with(&[Anchor::Root]));
    assert_eq!(theme.view().attribute(Anchor::Root, "data-theme"), Some("dark"));
    assert!(theme.view().listeners.is_empty());

    for anchor in [Anchor::ThemeToggle, Anchor::LightIcon, Anchor::DarkIcon] {
        theme.view_mut().insert(anchor);
    }
    theme.attach_controls();
    theme.attach_controls();

    assert_eq!(theme.view().listener_count(Anchor::ThemeToggle, EventKind::Click), 1);
    assert_eq!(theme.view().style(Anchor::DarkIcon, "display"), Some("block"));
    assert_eq!(theme.mode(), ThemeMode::Dark);
}

#[test]
fn missing_icon_skips_icon_updates() {
    let view = FakeView::with(&[Anchor::Root, Anchor::ThemeToggle, Anchor::LightIcon]);
    let mut theme = ThemePreference::initialize(MemoryStore::new(), false, view);
    theme.toggle();
    assert_eq!(theme.view().style(Anchor::LightIcon, "display"), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_twice_round_trips_to_light() {
    let mut theme = ThemePreference::initialize(MemoryStore::new(), false, full_view());
    assert_eq!(theme.toggle(), ThemeMode::Dark);
    assert_eq!(stored(&theme).as_deref(), Some("dark"));
    assert_eq!(theme.toggle(), ThemeMode::Light);
    assert_eq!(stored(&theme).as_deref(), Some("light"));
    assert_eq!(theme.view().attribute(Anchor::Root, "data-theme"), Some("light"));
    assert_eq!(theme.view().style(Anchor::DarkIcon, "display"), Some("none"));
    assert_eq!(theme.view().style(Anchor::LightIcon, "display"), Some("block"));
}

#[test]
fn subscribers_see_each_new_mode() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut theme = ThemePreference::initialize(MemoryStore::new(), false, full_view());
    let sink = Rc::clone(&seen);
    theme.subscribe(move |mode| sink.borrow_mut().push(mode));
    theme.toggle();
    theme.toggle();
    assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
}

#[test]
fn dispatch_toggles_only_on_toggle_click() {
    let mut theme = ThemePreference::initialize(MemoryStore::new(), false, full_view());
    assert_eq!(theme.dispatch(Anchor::Root, &ViewEvent::Click), None);
    assert_eq!(theme.dispatch(Anchor::ThemeToggle, &ViewEvent::PointerEnter), None);
    assert_eq!(theme.dispatch(Anchor::ThemeToggle, &ViewEvent::Click), Some(ThemeMode::Dark));
}

// =============================================================
// Transition
// =============================================================

#[test]
fn transition_fades_in_holds_then_removes() {
    let at: Vec<u32> = TRANSITION.iter().map(|s| s.at_ms).collect();
    assert_eq!(at, vec![0, 100, 400]);
    assert_eq!(TRANSITION[0].phase.opacity(), Some(0.5));
    assert_eq!(TRANSITION[1].phase.opacity(), Some(0.0));
    assert_eq!(TRANSITION[2].phase.opacity(), None);
}
