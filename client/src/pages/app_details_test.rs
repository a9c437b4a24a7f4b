use super::*;

#[test]
fn policy_viewer_href_carries_the_app_id() {
    assert_eq!(policy_viewer_href("app1"), "/privacy-policy?id=app1");
}

#[test]
fn policy_viewer_href_encodes_the_app_id() {
    assert_eq!(policy_viewer_href("my app"), "/privacy-policy?id=my%20app");
}
