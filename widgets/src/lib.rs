//! Interactive page widgets for the showcase site.
//!
//! This crate holds the two stateful components the site is built around: the
//! persisted light/dark [`theme::ThemePreference`] and the group-based
//! [`carousel::CarouselController`]. Neither touches the browser directly.
//! Every DOM mutation goes through the [`view::View`] capability and every
//! persisted value through [`store::PreferenceStore`], so the host (the Leptos
//! `client` crate) supplies browser implementations while tests supply
//! recording fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`view`] | DOM capability trait, element anchors and input events |
//! | [`store`] | Key/value preference store trait and in-memory store |
//! | [`theme`] | Theme mode, preference controller and transition schedule |
//! | [`carousel`] | Sliding-window math, autoplay ticker seam and controller |
//! | [`consts`] | Shared constants (breakpoints, timings, storage key) |

pub mod carousel;
pub mod consts;
pub mod store;
pub mod theme;
pub mod view;

#[cfg(test)]
mod testing;
