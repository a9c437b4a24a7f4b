//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog surfaces while reading shared
//! state from Leptos context providers. `screenshot_carousel` is the bridge to
//! the imperative `widgets` carousel controller.

pub mod app_card;
pub mod error_panel;
pub mod faq_modal;
pub mod screenshot_carousel;
pub mod site_footer;
pub mod site_header;
pub mod store_links;
pub mod success_toast;
pub mod theme_overlay;
pub mod typewriter_text;
pub mod video_gallery;
