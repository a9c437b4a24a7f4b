use super::*;

#[test]
fn only_escape_closes() {
    assert!(is_close_key("Escape"));
    assert!(!is_close_key("Esc"));
    assert!(!is_close_key("Enter"));
    assert!(!is_close_key("ArrowLeft"));
}

#[test]
fn registering_outside_browser_does_not_close() {
    let owner = Owner::new();
    owner.with(|| {
        let closed = RwSignal::new(false);
        close_on_escape(Callback::new(move |()| closed.set(true)));
        assert!(!closed.get_untracked());
    });
}
