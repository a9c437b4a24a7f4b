//! Download buttons for the stores an app is published on.

use catalog::Stores;
use leptos::prelude::*;

/// Links open in a new tab and do not bubble to an enclosing clickable card.
#[component]
pub fn StoreLinks(stores: Stores) -> impl IntoView {
    let links: Vec<_> = stores.links().into_iter().map(|(kind, url)| (kind, url.to_owned())).collect();

    view! {
        <div class="app-links">
            {links
                .into_iter()
                .map(|(kind, url)| {
                    view! {
                        <a
                            href=url
                            class=format!("app-link {}", kind.class())
                            target="_blank"
                            rel="noopener"
                            on:click=|ev| ev.stop_propagation()
                        >
                            {kind.label()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
