//! App details route: `/app-details?id=<app id>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the app from the shared catalog by its query id and renders the
//! banner, store actions, screenshot carousel, videos and long description.
//! A missing or unknown id renders an error panel instead.

use catalog::App;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::error_panel::ErrorPanel;
use crate::components::screenshot_carousel::ScreenshotCarousel;
use crate::components::store_links::StoreLinks;
use crate::components::video_gallery::VideoGallery;
use crate::pages::titles::details_title;
use crate::state::site::SiteState;
use crate::state::ui::UiState;
use crate::util::color::banner_gradient;

#[cfg(test)]
#[path = "app_details_test.rs"]
mod app_details_test;

/// Alert text when an app publishes no privacy policy.
pub const POLICY_UNAVAILABLE_ALERT: &str = "Privacy policy is not available for this application.";

/// Route of the policy viewer for `app_id`.
pub fn policy_viewer_href(app_id: &str) -> String {
    format!("/privacy-policy?id={}", urlencoding::encode(app_id))
}

#[component]
pub fn AppDetailsPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let query = use_query_map();

    let app = Memo::new(move |_| {
        let state = site.get();
        let catalog = state.catalog?;
        let id = query.get().get("id");
        Some(catalog.find_app(id.as_deref()).cloned().map_err(|e| e.to_string()))
    });

    let title = move || match app.get() {
        Some(Ok(app)) => details_title(&app.name),
        _ => details_title("App"),
    };

    let body = move || {
        let state = site.get();
        match app.get() {
            Some(Ok(app)) => view! { <AppDetails app=app/> }.into_any(),
            Some(Err(message)) => view! { <ErrorPanel message=message/> }.into_any(),
            None if state.loading => view! { <p class="loading">"Loading app details..."</p> }.into_any(),
            None => view! { <ErrorPanel message=state.error.unwrap_or_default()/> }.into_any(),
        }
    };

    view! {
        <Title text=title/>
        <div class="app-details-container">{body}</div>
    }
}

#[component]
fn AppDetails(app: App) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let banner_style = move || banner_gradient(ui.get().theme);
    let banner = match app.landscape().map(str::to_owned) {
        Some(src) => view! {
            <img src=src alt=format!("{} Banner", app.name) class="app-landscape-image"/>
            <div class="app-landscape-overlay"></div>
        }
        .into_any(),
        None => view! { <div class="landscape-app-name">{app.name.clone()}</div> }.into_any(),
    };

    let policy_target = app.privacy_policy().map(|_| policy_viewer_href(&app.id));
    let on_privacy = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        open_policy(policy_target.as_deref());
    };

    view! {
        <div class="app-header-with-landscape">
            <div class="app-landscape-container" style=banner_style>
                <div class="landscape-pattern"></div>
                {banner}
            </div>
            <div class="app-header">
                <img src=app.icon.clone() alt=format!("{} Icon", app.name) class="app-icon-large"/>
                <div class="app-title-section">
                    <h1 class="app-title">{app.name.clone()}</h1>
                    <p class="app-summary">{app.short_description.clone()}</p>
                </div>
            </div>
        </div>

        <div class="app-features-list">
            {app.features.iter().map(|f| view! { <span class="app-feature">{f.clone()}</span> }).collect_view()}
        </div>

        <div class="app-actions">
            <StoreLinks stores=app.stores.clone()/>
            <button class="privacy-button" on:click=on_privacy>
                "Privacy Policy"
            </button>
        </div>

        <h2>"Screenshots"</h2>
        <ScreenshotCarousel screenshots=app.screenshots.clone() app_name=app.name.clone()/>

        {(!app.videos.is_empty()).then(|| view! { <VideoGallery videos=app.videos.clone()/> })}

        <h2>"Description"</h2>
        <div class="app-description">
            <p>{app.detailed_description.clone()}</p>
        </div>
    }
}

/// Open the policy viewer in a new tab, or explain that there is none.
fn open_policy(target: Option<&str>) {
    #[cfg(feature = "csr")]
    {
        let result = match target {
            Some(href) => window().open_with_url_and_target(href, "_blank").map(|_| ()),
            None => window().alert_with_message(POLICY_UNAVAILABLE_ALERT),
        };
        if result.is_err() {
            log::warn!("privacy policy action blocked by the browser");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
    }
}
