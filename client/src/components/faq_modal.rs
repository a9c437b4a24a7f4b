//! Modal answering the common support questions.

use leptos::prelude::*;

use crate::util::modal::close_on_escape;

#[derive(Clone, Copy)]
struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I download your apps?",
        answer: "Our apps are available on the App Store for iOS devices and Google Play Store for Android devices. \
                 Simply search for the app name or visit the app details page on our website.",
    },
    FaqEntry {
        question: "Do you offer technical support?",
        answer: "Yes, we provide technical support for all our applications. You can contact us via email, phone, \
                 or by submitting a support ticket through our website.",
    },
    FaqEntry {
        question: "How do I request a feature?",
        answer: "We welcome feature requests! Please send us an email with your suggestion or use the contact form \
                 on this page.",
    },
    FaqEntry {
        question: "Are your apps free to use?",
        answer: "Some of our apps offer free versions with basic functionality, while others require a one-time \
                 purchase or subscription. Please check the individual app pages for pricing details.",
    },
];

/// Closes on the close button, a backdrop click or Escape.
#[component]
pub fn FaqModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    close_on_escape(on_close);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            if dialog.focus().is_err() {
                log::debug!("faq modal could not take focus");
            }
        }
    });

    view! {
        <div class="faq-modal" on:click=on_backdrop>
            <div
                class="faq-modal-content"
                node_ref=dialog_ref
                on:click=move |ev| ev.stop_propagation()
                tabindex="0"
            >
                <div class="faq-modal-header">
                    <h3>"Frequently Asked Questions"</h3>
                    <button class="faq-modal-close" on:click=on_close_click title="Close">
                        "×"
                    </button>
                </div>
                <div class="faq-modal-body">
                    {FAQ
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="faq-item">
                                    <h4>{entry.question}</h4>
                                    <p>{entry.answer}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
