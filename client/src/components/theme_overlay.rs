//! Full-page wash played while the theme switches.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Rendered only while `UiState::overlay_opacity` is set.
#[component]
pub fn ThemeOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        ui.get().overlay_opacity.map(|opacity| {
            view! {
                <div
                    class="theme-transition-overlay"
                    style=format!(
                        "position: fixed; inset: 0; background-color: rgba(255, 255, 255, 0.1); \
                         z-index: 9999; pointer-events: none; transition: opacity 0.3s ease; opacity: {opacity};",
                    )
                ></div>
            }
        })
    }
}
