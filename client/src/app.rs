//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route reads the same catalog document. `App` starts the one-shot
//! fetch, provides the shared state signals and renders the chrome (header,
//! footer, theme overlay) around the routed page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{site_footer::SiteFooter, site_header::SiteHeader, theme_overlay::ThemeOverlay};
use crate::config::SiteConfig;
use crate::pages::{
    app_details::AppDetailsPage, blog::BlogPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage,
    privacy_policy::PrivacyPolicyPage,
};
use crate::state::{site::SiteState, ui::UiState};

/// Root application component.
///
/// `ui` is created by the entry point so the theme is resolved before the
/// first render.
#[component]
pub fn App(ui: RwSignal<UiState>) -> impl IntoView {
    provide_meta_context();

    let site = RwSignal::new(SiteState::default());
    let config = SiteConfig::from_build_env();

    provide_context(ui);
    provide_context(site);
    provide_context(config.clone());

    load_catalog(site, &config);

    view! {
        <Title text="App Showcase"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("app-details") view=AppDetailsPage/>
                    <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <SiteFooter/>
            <ThemeOverlay/>
        </Router>
    }
}

fn load_catalog(site: RwSignal<SiteState>, config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        let url = config.data_url.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_catalog(&url).await;
            match &result {
                Ok(catalog) => log::info!("catalog loaded: {} apps, {} posts", catalog.apps.len(), catalog.blog.len()),
                Err(e) => log::warn!("could not load app data from {url}: {e}"),
            }
            site.update(|s| s.finish_load(result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (site, config);
    }
}
