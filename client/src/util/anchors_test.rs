use super::*;

#[test]
fn global_targets_are_not_css_selectors() {
    assert_eq!(selector(Anchor::Root), Selector::Root);
    assert_eq!(selector(Anchor::Document), Selector::Document);
    assert_eq!(selector(Anchor::Window), Selector::Window);
}

#[test]
fn theme_anchors_live_under_the_toggle() {
    for anchor in [Anchor::ThemeToggle, Anchor::LightIcon, Anchor::DarkIcon] {
        let Selector::First(css) = selector(anchor) else {
            panic!("{anchor} should be a single element");
        };
        assert!(css.starts_with(&format!("#{THEME_TOGGLE_ID}")));
    }
}

#[test]
fn carousel_selectors_match_rendered_classes() {
    assert_eq!(selector(Anchor::Track), Selector::First(".carousel-track"));
    assert_eq!(format!(".{CAROUSEL_TRACK_CLASS}"), ".carousel-track");
    assert_eq!(format!(".{CAROUSEL_CONTAINER_CLASS}"), ".carousel-container");
    assert_eq!(selector(Anchor::Slide(4)), Selector::Nth(".carousel-slide", 4));
    assert_eq!(format!(".{CAROUSEL_SLIDE_CLASS}"), ".carousel-slide");
    let Selector::Nth(css, 2) = selector(Anchor::Indicator(2)) else {
        panic!("indicator should be positional");
    };
    assert!(css.ends_with(&format!(".{CAROUSEL_INDICATOR_CLASS}")));
}
