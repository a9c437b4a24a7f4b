//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`site` data, `ui` chrome, per-page `blog` and
//! `contact` models) so components depend on small focused models and the
//! transitions stay testable without a browser.

pub mod blog;
pub mod contact;
pub mod site;
pub mod ui;
