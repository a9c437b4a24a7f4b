use super::*;

fn sample_json() -> &'static str {
    r#"{
        "company": {
            "name": "Acme Apps",
            "logo": "images/logo.png",
            "description": "We build apps.",
            "email": "hello@acme.test"
        },
        "contact": {
            "email": "support@acme.test",
            "phone": "5551234567",
            "address": "1 Main St",
            "social": { "twitter": "https://twitter.com/acme", "linkedin": "" }
        },
        "apps": [
            {
                "id": "app1",
                "name": "Budget Buddy",
                "icon": "images/app1.png",
                "shortDescription": "Track spending",
                "detailedDescription": "Long text",
                "features": ["Charts", "Sync"],
                "stores": { "ios": "https://apps.apple.com/x", "windows": "" },
                "screenshots": ["s1.png", "s2.png"],
                "videos": [{ "youtubeId": "abc123", "title": "Tour" }],
                "privacyPolicyUrl": "privacy/app1.html"
            },
            { "id": "app2", "name": "Bare" }
        ]
    }"#
}

fn sample() -> Catalog {
    parse_catalog(sample_json()).expect("sample should parse")
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_reads_camel_case_fields() {
    let catalog = sample();
    let app = &catalog.apps[0];
    assert_eq!(app.short_description, "Track spending");
    assert_eq!(app.detailed_description, "Long text");
    assert_eq!(app.videos[0].youtube_id, "abc123");
    assert_eq!(app.privacy_policy_url.as_deref(), Some("privacy/app1.html"));
}

#[test]
fn parse_defaults_missing_collections() {
    let catalog = sample();
    let bare = &catalog.apps[1];
    assert!(bare.features.is_empty());
    assert!(bare.screenshots.is_empty());
    assert!(bare.videos.is_empty());
    assert_eq!(bare.stores, Stores::default());
    assert!(catalog.blog.is_empty());
}

#[test]
fn parse_rejects_malformed_document() {
    let err = parse_catalog("{ not json").expect_err("should fail");
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn parse_rejects_document_without_company() {
    let err = parse_catalog(r#"{ "contact": {}, "apps": [] }"#).expect_err("should fail");
    assert!(matches!(err, CatalogError::Decode(_)));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_app_returns_matching_entry() {
    let catalog = sample();
    let app = catalog.find_app(Some("app2")).expect("app2 exists");
    assert_eq!(app.name, "Bare");
}

#[test]
fn find_app_trims_id() {
    let catalog = sample();
    assert!(catalog.find_app(Some("  app1 ")).is_ok());
}

#[test]
fn find_app_without_id_is_missing_id() {
    let catalog = sample();
    assert!(matches!(catalog.find_app(None), Err(CatalogError::MissingAppId)));
    assert!(matches!(catalog.find_app(Some("   ")), Err(CatalogError::MissingAppId)));
}

#[test]
fn find_app_unknown_id_reports_id() {
    let catalog = sample();
    let err = catalog.find_app(Some("nope")).expect_err("unknown id");
    assert_eq!(err.to_string(), "App with ID \"nope\" not found");
}

// =============================================================
// Derived views
// =============================================================

#[test]
fn store_links_skip_absent_and_blank_urls() {
    let catalog = sample();
    let links = catalog.apps[0].stores.links();
    assert_eq!(links, vec![(StoreKind::AppStore, "https://apps.apple.com/x")]);
    assert_eq!(links[0].0.label(), "App Store");
}

#[test]
fn social_links_skip_blank_entries() {
    let catalog = sample();
    assert_eq!(catalog.contact.social.links(), vec![("twitter", "https://twitter.com/acme")]);
}

#[test]
fn landscape_ignores_blank_image() {
    let mut app = sample().apps[0].clone();
    assert_eq!(app.landscape(), None);
    app.landscape_image = Some(" ".to_owned());
    assert_eq!(app.landscape(), None);
    app.landscape_image = Some("wide.png".to_owned());
    assert_eq!(app.landscape(), Some("wide.png"));
}

#[test]
fn privacy_policy_ignores_blank_url() {
    let mut app = sample().apps[0].clone();
    assert_eq!(app.privacy_policy(), Some("privacy/app1.html"));
    app.privacy_policy_url = Some("  ".to_owned());
    assert_eq!(app.privacy_policy(), None);
}

#[test]
fn support_email_prefers_company_address() {
    let mut catalog = sample();
    assert_eq!(catalog.support_email(), Some("hello@acme.test"));
    catalog.company.email = None;
    assert_eq!(catalog.support_email(), Some("support@acme.test"));
    catalog.contact.email = None;
    assert_eq!(catalog.support_email(), None);
}
