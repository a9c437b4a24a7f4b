//! Site footer with branding and the copyright line.

use leptos::prelude::*;

use crate::pages::contact::social_title;
use crate::state::site::{SiteState, copyright_line};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let year = current_year();

    let company = move || site.get().company_name();
    let logo = move || site.get().catalog.map(|c| c.company.logo).filter(|l| !l.is_empty());
    let socials = move || {
        site.get()
            .catalog
            .map(|c| {
                c.contact
                    .social
                    .links()
                    .into_iter()
                    .map(|(network, url)| {
                        view! {
                            <a href=url.to_owned() target="_blank" rel="noopener" title=social_title(network)>
                                {network}
                            </a>
                        }
                    })
                    .collect_view()
            })
    };

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                {move || logo().map(|src| view! { <img class="footer-logo-img" src=src alt=move || format!("{} Logo", company())/> })}
                <span class="footer-company-name">{company}</span>
            </div>
            <div class="footer-links">
                <a href="/blog">"Blog"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <div class="footer-social">{socials}</div>
            <div class="footer-copyright">
                <p>{move || copyright_line(year, &company())}</p>
            </div>
        </footer>
    }
}

fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(1970)
    }
    #[cfg(not(feature = "csr"))]
    {
        1970
    }
}
