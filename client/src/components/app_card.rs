//! Catalog grid card for one app.
//!
//! DESIGN
//! ======
//! The whole card navigates to the details route. Store links and the
//! "More Info" link stop propagation so they act on their own. A broken icon
//! is replaced by a generated placeholder keyed on the card's position.

use catalog::App;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::store_links::StoreLinks;
use crate::state::ui::UiState;
use crate::util::color::{card_style, placeholder_icon};

#[cfg(test)]
#[path = "app_card_test.rs"]
mod app_card_test;

/// Route of the details page for `app_id`.
pub fn details_href(app_id: &str) -> String {
    format!("/app-details?id={}", urlencoding::encode(app_id))
}

#[component]
pub fn AppCard(app: App, index: usize) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let href = details_href(&app.id);
    let style = {
        let id = app.id.clone();
        move || card_style(&id, ui.get().theme)
    };

    let icon_failed = RwSignal::new(false);
    let icon = app.icon.clone();
    let icon_src = move || if icon_failed.get() { placeholder_icon(index) } else { icon.clone() };

    let on_card_click = {
        let href = href.clone();
        move |_| navigate(&href, NavigateOptions::default())
    };

    let banner = app.landscape().map(str::to_owned).map(|src| {
        let alt = format!("{} Banner", app.name);
        view! {
            <div class="app-landscape-container">
                <img class="app-landscape-image" src=src alt=alt/>
                <div class="app-landscape-overlay"></div>
            </div>
        }
    });

    view! {
        <article class="app-card" id=app.id.clone() style=style on:click=on_card_click>
            {banner}
            <div class="app-icon">
                <img src=icon_src alt=format!("{} Icon", app.name) on:error=move |_| icon_failed.set(true)/>
            </div>
            <div class="app-details">
                <h3>{app.name.clone()}</h3>
                <p class="app-description">{app.short_description.clone()}</p>
                <div class="app-features">
                    {app
                        .features
                        .iter()
                        .map(|feature| view! { <span class="feature-tag">{feature.clone()}</span> })
                        .collect_view()}
                </div>
                <StoreLinks stores=app.stores.clone()/>
                <a class="more-info-btn" href=href on:click=|ev| ev.stop_propagation()>
                    "More Info"
                </a>
            </div>
        </article>
    }
}
