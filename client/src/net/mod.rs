//! Networking for the static data source.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend API. `api` performs the one-shot GETs for the
//! catalog document and for privacy-policy HTML files served next to it.

pub mod api;
