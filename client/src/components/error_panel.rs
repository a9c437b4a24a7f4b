//! Error message block with a way back to the catalog.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-message">
            <h2>"Error"</h2>
            <p>{message}</p>
            <a href="/" class="back-button">"Return to App List"</a>
        </div>
    }
}
