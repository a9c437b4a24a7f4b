use super::*;

#[test]
fn mailto_without_fields_is_bare_address() {
    assert_eq!(mailto_href("a@b.test", "", ""), "mailto:a@b.test");
}

#[test]
fn mailto_encodes_spaces_and_newlines() {
    assert_eq!(mailto_href("a@b.test", "Hi there", "x\ny"), "mailto:a@b.test?subject=Hi%20there&body=x%0Ay");
}

#[test]
fn mailto_body_only_uses_question_mark() {
    assert_eq!(mailto_href("a@b.test", "", "hey"), "mailto:a@b.test?body=hey");
}

#[test]
fn support_ticket_prefills_subject_and_body() {
    let href = support_ticket_href("help@acme.test");
    assert!(href.starts_with("mailto:help@acme.test?subject=Support%20Ticket%20Request&body=I%20would%20like"));
    assert!(href.ends_with("issue%3A%0A%0A"));
}

#[test]
fn maps_href_encodes_address() {
    assert_eq!(maps_href("1 Main St, Springfield"), "https://maps.google.com/?q=1%20Main%20St%2C%20Springfield");
}
