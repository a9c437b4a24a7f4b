use super::*;

#[test]
fn typed_prefix_counts_characters_not_bytes() {
    assert_eq!(typed_prefix("Straße 1", 6), "Straße");
    assert_eq!(typed_prefix("abc", 0), "");
    assert_eq!(typed_prefix("abc", 10), "abc");
}

#[test]
fn completion_tracks_character_count() {
    assert!(!is_complete("héllo", 4));
    assert!(is_complete("héllo", 5));
    assert!(is_complete("", 0));
}
