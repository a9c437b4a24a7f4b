use super::*;

#[test]
fn social_title_capitalizes_the_network() {
    assert_eq!(social_title("twitter"), "Follow us on Twitter");
    assert_eq!(social_title("linkedin"), "Follow us on Linkedin");
}

#[test]
fn social_title_tolerates_empty_network() {
    assert_eq!(social_title(""), "Follow us on ");
}
