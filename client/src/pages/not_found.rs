//! Fallback route.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::titles::not_found_title;
use crate::state::site::SiteState;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let title = move || not_found_title(&site.get().company_name());

    view! {
        <Title text=title/>
        <section class="not-found">
            <h2>"404"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a href="/" class="back-button">"Return to App List"</a>
        </section>
    }
}
