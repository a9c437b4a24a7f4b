//! # client
//!
//! Leptos + WASM frontend for the app showcase site: catalog grid, app
//! details with screenshot carousel and video gallery, blog, contact and
//! privacy policy pages.
//!
//! This crate contains pages, components, application state and the static
//! data fetch. It integrates with the `widgets` crate for the imperative
//! theme and carousel controllers through the `DomView` bridge in `util`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::state::ui::UiState;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }

    let ui = RwSignal::new(UiState::default());
    let mode = util::dark_mode::bootstrap(ui);
    log::info!("theme initialized: {}", mode.as_str());
    leptos::mount::mount_to_body(move || view! { <App ui=ui/> });
    util::dark_mode::attach_controls();
}
