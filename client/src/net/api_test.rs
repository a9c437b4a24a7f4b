use super::*;

#[test]
fn status_error_message_matches_site_copy() {
    assert_eq!(FetchError::Status(404).to_string(), "HTTP error! status: 404");
}

#[test]
fn decode_catalog_accepts_minimal_document() {
    let catalog = decode_catalog(r#"{ "company": { "name": "Acme" }, "contact": {} }"#).expect("valid");
    assert_eq!(catalog.company.name, "Acme");
    assert!(catalog.apps.is_empty());
}

#[test]
fn decode_catalog_maps_parse_failure() {
    let err = decode_catalog("<html>").expect_err("not json");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn fetch_outside_browser_is_unavailable() {
    let result = block_on_ready(fetch_text("/data/apps.json"));
    assert_eq!(result, Err(FetchError::Unavailable));
}

/// Poll a future that is ready on first poll (the native stubs never await).
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("native fetch stub should resolve immediately"),
    }
}
