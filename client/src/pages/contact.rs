//! Contact page: company details, support shortcuts, social links and the
//! mail-client contact form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::faq_modal::FaqModal;
use crate::components::success_toast::SuccessToast;
use crate::components::typewriter_text::TypewriterText;
use crate::pages::titles::contact_title;
use crate::state::contact::{ContactForm, INCOMPLETE_MESSAGE};
use crate::state::site::SiteState;
use crate::util::mailto::{maps_href, mailto_href, support_ticket_href};
use crate::util::phone::{format_phone, tel_href};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Tooltip for a social network link, e.g. `"Follow us on Twitter"`.
pub fn social_title(network: &str) -> String {
    let mut chars = network.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("Follow us on {name}")
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let title = move || contact_title(&site.get().company_name());
    let support_email = move || {
        site.get()
            .catalog
            .and_then(|c| c.support_email().map(str::to_owned))
            .unwrap_or_default()
    };

    let show_faq = RwSignal::new(false);
    let close_faq = Callback::new(move |()| show_faq.set(false));

    let details = move || {
        site.get().catalog.map(|catalog| {
            let email = catalog.support_email().unwrap_or_default().to_owned();
            let phone = catalog.contact.phone.clone();
            let address = catalog.contact.address.clone();
            let socials: Vec<(String, String)> =
                catalog.contact.social.links().into_iter().map(|(n, u)| (n.to_owned(), u.to_owned())).collect();
            view! {
                <div class="contact-info">
                    <div class="contact-info-item">
                        <h3>"Email"</h3>
                        <a id="contact-email" href=mailto_href(&email, "", "") title="Click to send us an email">
                            <TypewriterText text=email.clone()/>
                        </a>
                    </div>
                    <div class="contact-info-item">
                        <h3>"Phone"</h3>
                        <a id="contact-phone" href=tel_href(&phone) title="Click to call us">
                            <TypewriterText text=format_phone(&phone)/>
                        </a>
                    </div>
                    <div class="contact-info-item">
                        <h3>"Address"</h3>
                        <a
                            id="contact-address"
                            href=maps_href(&address)
                            target="_blank"
                            rel="noopener"
                            title="Click to view on map"
                        >
                            <TypewriterText text=address.clone()/>
                        </a>
                    </div>
                    <div class="contact-info-item">
                        <h3>"Support"</h3>
                        <a id="create-ticket" href=support_ticket_href(&email) rel="external">
                            "Create a support ticket"
                        </a>
                        <a
                            id="view-faq"
                            href="#"
                            on:click=move |ev| {
                                ev.prevent_default();
                                show_faq.set(true);
                            }
                        >
                            "View FAQ"
                        </a>
                    </div>
                    <div class="contact-social" id="contact-social-icons">
                        {socials
                            .into_iter()
                            .map(|(network, url)| {
                                view! {
                                    <a
                                        class=format!("social-icon social-icon--{network}")
                                        href=url
                                        target="_blank"
                                        rel="noopener"
                                        title=social_title(&network)
                                        data-platform=network.clone()
                                    >
                                        {network.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    };

    view! {
        <Title text=title/>
        <section class="contact-header">
            <h1>"Contact Us"</h1>
            <p>"Questions, feedback or support requests: we'd love to hear from you."</p>
        </section>
        <div class="contact-layout">
            {details}
            <ContactFormPanel support_email=Signal::derive(support_email)/>
        </div>
        <Show when=move || show_faq.get()>
            <FaqModal on_close=close_faq/>
        </Show>
    }
}

#[component]
fn ContactFormPanel(support_email: Signal<String>) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let form = RwSignal::new(ContactForm::default());
    let error = RwSignal::new(None::<&'static str>);
    let toast = RwSignal::new(None::<String>);
    let close_toast = Callback::new(move |()| toast.set(None));

    let apps = move || site.get().catalog.map(|c| c.apps).unwrap_or_default();

    let on_app_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let name = apps().into_iter().find(|a| a.id == id).map(|a| a.name).unwrap_or_default();
        form.update(|f| {
            f.app_id = id;
            f.app_name = name;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if !current.is_complete() {
            error.set(Some(INCOMPLETE_MESSAGE));
            return;
        }
        let to = support_email.get_untracked();
        open_mail_client(&current.mailto(&to));
        toast.set(Some(current.confirmation(&to)));
        error.set(None);
        form.set(ContactForm::default());
    };

    view! {
        <form class="contact-form" id="contactForm" on:submit=on_submit>
            <h2>"Send us a message"</h2>
            <label for="name">"Name"</label>
            <input
                id="name"
                type="text"
                required
                prop:value=move || form.get().name
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <label for="email">"Email"</label>
            <input
                id="email"
                type="email"
                required
                prop:value=move || form.get().email
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <label for="app">"App (optional)"</label>
            <select id="app" prop:value=move || form.get().app_id on:change=on_app_change>
                <option value="">"General enquiry"</option>
                {move || {
                    apps()
                        .into_iter()
                        .map(|app| view! { <option value=app.id.clone()>{app.name.clone()}</option> })
                        .collect_view()
                }}
            </select>
            <label for="subject">"Subject"</label>
            <input
                id="subject"
                type="text"
                required
                prop:value=move || form.get().subject
                on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
            />
            <label for="message">"Message"</label>
            <textarea
                id="message"
                rows="6"
                required
                prop:value=move || form.get().message
                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" class="submit-button">"Send Message"</button>
        </form>
        {move || toast.get().map(|message| view! { <SuccessToast message=message on_close=close_toast/> })}
    }
}

fn open_mail_client(href: &str) {
    #[cfg(feature = "csr")]
    {
        if window().location().set_href(href).is_err() {
            log::warn!("could not open the mail client");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}
