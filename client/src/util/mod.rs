//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability. The `csr`-only modules implement
//! the `widgets` seams (`View`, `Ticker`) on top of `web-sys` and `gloo`.

pub mod anchors;
pub mod color;
pub mod dark_mode;
#[cfg(feature = "csr")]
pub mod dom_view;
pub mod mailto;
pub mod modal;
pub mod phone;
pub mod policy;
#[cfg(feature = "csr")]
pub mod ticker;
pub mod typewriter;
