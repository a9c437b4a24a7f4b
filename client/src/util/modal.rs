//! Keyboard dismissal shared by the page's modals.

use leptos::prelude::*;

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Whether `key` dismisses an open modal.
pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

/// Run `on_close` on Escape anywhere in the page until the calling
/// component is cleaned up.
///
/// The listener sits on the window, so Escape still closes the modal while
/// focus is on the page but outside the dialog.
pub fn close_on_escape(on_close: Callback<()>) {
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_close_key(&ev.key()) {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_close;
    }
}
