use super::*;

#[test]
fn details_href_carries_the_id() {
    assert_eq!(details_href("app1"), "/app-details?id=app1");
}

#[test]
fn details_href_encodes_reserved_characters() {
    assert_eq!(details_href("a b&c"), "/app-details?id=a%20b%26c");
}
