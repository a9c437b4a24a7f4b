//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (query parameters, document
//! title, per-page state) and delegates rendering details to `components`.

pub mod app_details;
pub mod blog;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod privacy_policy;
pub mod titles;
