//! Landing page: company intro, the app grid and contact details.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::app_card::AppCard;
use crate::pages::titles::home_title;
use crate::state::site::{LOAD_FAILED_MESSAGE, LOCAL_SERVER_HINT, SiteState};
use crate::util::mailto::mailto_href;
use crate::util::phone::{format_phone, tel_href};

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();

    let title = move || home_title(&site.get().company_name());
    let welcome = move || format!("Welcome to {}", site.get().company_name());
    let description = move || site.get().catalog.map(|c| c.company.description).unwrap_or_default();

    let apps = move || {
        let state = site.get();
        if state.loading {
            return view! { <p class="loading">"Loading apps..."</p> }.into_any();
        }
        if let Some(error) = state.error {
            return view! {
                <div class="error-message">
                    <h3>{LOAD_FAILED_MESSAGE}</h3>
                    <p>"Error details: " {error}</p>
                    <p>{LOCAL_SERVER_HINT}</p>
                </div>
            }
            .into_any();
        }
        let apps = state.catalog.map(|c| c.apps).unwrap_or_default();
        view! {
            <div class="app-grid">
                {apps.into_iter().enumerate().map(|(index, app)| view! { <AppCard app=app index=index/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    let contact = move || {
        site.get().catalog.map(|catalog| {
            let email = catalog.support_email().unwrap_or_default().to_owned();
            let phone = catalog.contact.phone.clone();
            let address = catalog.contact.address.clone();
            view! {
                <section class="contact-section">
                    <h2>"Get in Touch"</h2>
                    <div class="contact-item">
                        <a href=mailto_href(&email, "", "")>
                            <span>{email.clone()}</span>
                        </a>
                    </div>
                    <div class="contact-item">
                        <a href=tel_href(&phone)>
                            <span>{format_phone(&phone)}</span>
                        </a>
                    </div>
                    <div class="contact-item">
                        <span>{address}</span>
                    </div>
                </section>
            }
        })
    };

    view! {
        <Title text=title/>
        <section class="intro-section">
            <h2>{welcome}</h2>
            <p>{description}</p>
        </section>
        <section class="apps-section">{apps}</section>
        {contact}
    }
}
