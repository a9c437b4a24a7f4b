//! Site header with branding, navigation and the theme toggle.
//!
//! The toggle button carries the `#themeToggle` id and icon classes from
//! `util::anchors`; its click handling is attached by `util::dark_mode`, not
//! here.

use leptos::prelude::*;

use crate::state::site::SiteState;
use crate::state::ui::UiState;
use crate::util::anchors::THEME_TOGGLE_ID;

const NAV_LINKS: &[(&str, &str)] = &[("/", "Apps"), ("/blog", "Blog"), ("/contact", "Contact")];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let title = move || format!("{} Applications", site.get().company_name());
    let logo = move || site.get().catalog.map(|c| c.company.logo).filter(|l| !l.is_empty());
    let logo_alt = move || format!("{} Logo", site.get().company_name());

    view! {
        <header class="site-header">
            <a class="header-brand" href="/">
                {move || logo().map(|src| view! { <img class="header-logo" src=src alt=logo_alt/> })}
                <h1 class="header-title">{title}</h1>
            </a>
            <nav class="header-nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <a class="header-nav__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <button
                id=THEME_TOGGLE_ID
                class="theme-toggle"
                title="Toggle dark mode"
                aria-label="Toggle dark mode"
                aria-pressed=move || ui.get().is_dark().to_string()
            >
                <span class="light-icon">"☀"</span>
                <span class="dark-icon">"☾"</span>
            </button>
        </header>
    }
}
