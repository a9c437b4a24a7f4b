//! Confirmation toast shown after the contact form hands off to the mail
//! client.
//!
//! The toast slides out after [`TOAST_VISIBLE_MS`] or on the close button, and
//! reports `on_close` once the exit animation has finished.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

pub const TOAST_VISIBLE_MS: u64 = 5000;
pub const TOAST_EXIT_MS: u64 = 500;

#[component]
pub fn SuccessToast(#[prop(into)] message: String, on_close: Callback<()>) -> impl IntoView {
    let closing = RwSignal::new(false);
    let alive = Arc::new(AtomicBool::new(true));

    let dismiss = Callback::new({
        let alive = alive.clone();
        move |()| {
            if closing.get_untracked() {
                return;
            }
            closing.set(true);
            after(TOAST_EXIT_MS, alive.clone(), move || on_close.run(()));
        }
    });
    after(TOAST_VISIBLE_MS, alive.clone(), move || dismiss.run(()));
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    view! {
        <div class="success-message" class:success-message--closing=move || closing.get() role="status">
            <div class="success-icon">"✓"</div>
            <div class="success-content">
                <h4>"Message Sent!"</h4>
                <p>{message}</p>
            </div>
            <button class="success-close" title="Dismiss" on:click=move |_| dismiss.run(())>
                "×"
            </button>
        </div>
    }
}

/// Run `f` after `ms` unless the owning component has been cleaned up.
fn after(ms: u64, alive: Arc<AtomicBool>, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
        if alive.load(Ordering::Relaxed) {
            f();
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ms, alive, f);
    }
}
