//! Privacy policy viewer: `/privacy-policy?id=<app id>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Policies are standalone HTML files referenced by the catalog. The viewer
//! fetches the app's file, keeps only the configured content region and
//! renders it after sanitization (see `util::policy`).
//!
//! ERROR HANDLING
//! ==============
//! A missing or unknown id renders the generic error panel. An app without a
//! policy and a failed fetch each get their own message.

use catalog::App;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::error_panel::ErrorPanel;
use crate::config::SiteConfig;
use crate::pages::titles::policy_title;
use crate::state::site::SiteState;
use crate::util::policy::PolicyError;

#[cfg(test)]
#[path = "privacy_policy_test.rs"]
mod privacy_policy_test;

/// Load state of the policy document.
#[derive(Clone, Debug, PartialEq)]
pub enum PolicyState {
    Loading,
    Ready(String),
    Failed(PolicyError),
}

/// Heading and explanation shown for a policy error.
pub fn failure_text(error: &PolicyError) -> (&'static str, &'static str) {
    match error {
        PolicyError::NotAvailable => {
            ("No Privacy Policy Available", "Privacy policy information is not available for this application.")
        }
        PolicyError::ContentMissing | PolicyError::Load(_) => {
            ("Error Loading Privacy Policy", "Failed to load privacy policy. Please try again later.")
        }
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let config = expect_context::<SiteConfig>();
    let query = use_query_map();

    let app = Memo::new(move |_| {
        let catalog = site.get().catalog?;
        let id = query.get().get("id");
        Some(catalog.find_app(id.as_deref()).cloned().map_err(|e| e.to_string()))
    });

    let policy = RwSignal::new(PolicyState::Loading);
    let requested = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(Ok(app)) = app.get() else {
            return;
        };
        if requested.get_untracked().as_deref() == Some(app.id.as_str()) {
            return;
        }
        requested.set(Some(app.id.clone()));
        load_policy(&app, &config.policy_selector, policy);
    });

    let title = move || match app.get() {
        Some(Ok(app)) => policy_title(&app.name),
        _ => format!("{} - Privacy Policy", site.get().company_name()),
    };

    let body = move || {
        let state = site.get();
        match app.get() {
            Some(Ok(app)) => view! {
                <h1 class="policy-app-name">{format!("{} Privacy Policy", app.name)}</h1>
                <div class="privacy-policy-content">{move || render_policy(policy.get())}</div>
            }
            .into_any(),
            Some(Err(message)) => view! { <ErrorPanel message=message/> }.into_any(),
            None if state.loading => view! { <p class="loading">"Loading privacy policy..."</p> }.into_any(),
            None => view! { <ErrorPanel message=state.error.unwrap_or_default()/> }.into_any(),
        }
    };

    view! {
        <Title text=title/>
        <section class="privacy-policy-viewer">{body}</section>
    }
}

fn render_policy(state: PolicyState) -> AnyView {
    match state {
        PolicyState::Loading => view! {
            <div class="loading-container">
                <p>"Loading privacy policy..."</p>
            </div>
        }
        .into_any(),
        PolicyState::Ready(html) => view! { <div class="policy-body" inner_html=html></div> }.into_any(),
        PolicyState::Failed(error) => {
            let (heading, explanation) = failure_text(&error);
            let detail = match &error {
                PolicyError::NotAvailable => None,
                other => Some(format!("Error: {other}")),
            };
            view! {
                <div class="error-message">
                    <h3>{heading}</h3>
                    <p>{explanation}</p>
                    {detail.map(|d| view! { <p>{d}</p> })}
                </div>
            }
            .into_any()
        }
    }
}

fn load_policy(app: &App, selector: &str, policy: RwSignal<PolicyState>) {
    let Some(url) = app.privacy_policy().map(str::to_owned) else {
        policy.set(PolicyState::Failed(PolicyError::NotAvailable));
        return;
    };
    policy.set(PolicyState::Loading);

    #[cfg(feature = "csr")]
    {
        let selector = selector.to_owned();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_text(&url)
                .await
                .map_err(|e| PolicyError::Load(e.to_string()))
                .and_then(|html| crate::util::policy::extract_policy(&html, &selector));
            match result {
                Ok(html) => policy.set(PolicyState::Ready(html)),
                Err(e) => {
                    log::warn!("could not load privacy policy {url}: {e}");
                    policy.set(PolicyState::Failed(e));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
        policy.set(PolicyState::Failed(PolicyError::Load(format!("cannot fetch {url} outside the browser"))));
    }
}
