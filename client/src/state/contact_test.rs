use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ann".to_owned(),
        email: "ann@example.test".to_owned(),
        app_id: String::new(),
        app_name: String::new(),
        subject: "Hello".to_owned(),
        message: "Great apps".to_owned(),
    }
}

#[test]
fn body_without_app_skips_app_line() {
    assert_eq!(filled().body(), "Name: Ann\nEmail: ann@example.test\nSubject: Hello\n\nGreat apps");
}

#[test]
fn body_with_app_names_it() {
    let form = ContactForm { app_id: "app1".to_owned(), app_name: "Budget Buddy".to_owned(), ..filled() };
    assert_eq!(
        form.body(),
        "Name: Ann\nEmail: ann@example.test\nApp: Budget Buddy\nSubject: Hello\n\nGreat apps"
    );
}

#[test]
fn mailto_encodes_subject_and_body() {
    let href = filled().mailto("hello@acme.test");
    assert!(href.starts_with("mailto:hello@acme.test?subject=Hello&body=Name%3A%20Ann%0AEmail"));
}

#[test]
fn completeness_requires_every_text_field() {
    assert!(filled().is_complete());
    let blank = ContactForm { message: "   ".to_owned(), ..filled() };
    assert!(!blank.is_complete());
}

#[test]
fn confirmation_mentions_app_when_selected() {
    let general = filled().confirmation("hello@acme.test");
    assert_eq!(
        general,
        "Thank you for your message! Your email client should open to send this message to hello@acme.test."
    );
    let about = ContactForm { app_id: "app1".to_owned(), app_name: "Budget Buddy".to_owned(), ..filled() }
        .confirmation("hello@acme.test");
    assert!(about.starts_with("Thank you for your message about Budget Buddy!"));
}
