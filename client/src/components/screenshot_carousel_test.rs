use super::*;

#[test]
fn indicator_count_rounds_partial_groups_up() {
    assert_eq!(indicator_count(7, 3), 3);
    assert_eq!(indicator_count(6, 3), 2);
    assert_eq!(indicator_count(5, 2), 3);
    assert_eq!(indicator_count(4, 1), 4);
}

#[test]
fn indicator_count_treats_zero_per_view_as_one() {
    assert_eq!(indicator_count(3, 0), 3);
}

#[test]
fn screenshot_alt_is_one_based() {
    assert_eq!(screenshot_alt("Habit Tracker", 0), "Habit Tracker Screenshot 1");
    assert_eq!(screenshot_alt("Habit Tracker", 4), "Habit Tracker Screenshot 5");
}
