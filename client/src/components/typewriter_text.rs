//! Text revealed one character at a time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::util::typewriter::{is_complete, typed_prefix};
#[cfg(feature = "csr")]
use crate::util::typewriter::TYPEWRITER_STEP_MS;

/// Types `text` out at [`crate::util::typewriter::TYPEWRITER_STEP_MS`] per character with a caret
/// that disappears when done.
#[component]
pub fn TypewriterText(#[prop(into)] text: String) -> impl IntoView {
    let shown = RwSignal::new(0usize);
    let alive = Arc::new(AtomicBool::new(true));

    #[cfg(feature = "csr")]
    {
        let total = text.chars().count();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            for n in 1..=total {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TYPEWRITER_STEP_MS))).await;
                if !alive.load(Ordering::Relaxed) {
                    break;
                }
                shown.set(n);
            }
        });
    }
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let typed = {
        let text = text.clone();
        move || typed_prefix(&text, shown.get())
    };
    let done = move || is_complete(&text, shown.get());

    view! { <span class="typewriter" class:typewriter--typing=move || !done()>{typed}</span> }
}
