use super::*;

#[test]
fn window_covers_all_pages_when_few() {
    assert_eq!(page_window(1, 3), vec![1, 2, 3]);
}

#[test]
fn window_centers_on_current_page() {
    assert_eq!(page_window(10, 20), vec![8, 9, 10, 11, 12]);
}

#[test]
fn window_clamps_at_the_start() {
    assert_eq!(page_window(1, 20), vec![1, 2, 3, 4, 5]);
}

#[test]
fn window_clamps_at_the_end() {
    assert_eq!(page_window(20, 20), vec![16, 17, 18, 19, 20]);
}

#[test]
fn window_is_empty_for_zero_pages() {
    assert!(page_window(1, 0).is_empty());
}
