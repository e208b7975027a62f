//! Resize engine (`spec.md` §4.5): column/row growth and shrink, cursor
//! slide, tab-stop re-seeding, and scroll-region reset.

use super::TestTerm;

#[test]
fn growing_rows_extends_the_screen_without_moving_content() {
    let mut t = TestTerm::new(10, 3);
    t.feed("hello");
    t.term.resize(10, 5, 0, 0, &mut t.host);
    assert_eq!(t.term.rows(), 5);
    t.assert_visible_contents(0, "hello");
}

#[test]
fn shrinking_rows_slides_content_up_to_keep_the_cursor_visible() {
    let mut t = TestTerm::new(10, 5);
    t.feed("\x1b[5;1H"); // cursor on the last row
    t.feed("bottom");
    t.term.resize(10, 2, 0, 0, &mut t.host);
    assert_eq!(t.term.rows(), 2);
    t.assert_visible_contents(1, "bottom");
}

#[test]
fn growing_columns_reseeds_tab_stops_every_8_from_the_last_stop() {
    let mut t = TestTerm::new(10, 2);
    t.term.resize(20, 2, 0, 0, &mut t.host);
    t.feed("\r\t\t");
    t.assert_cursor_pos(16, 0);
}

#[test]
fn shrinking_columns_truncates_rows_and_clamps_cursor() {
    let mut t = TestTerm::new(10, 2);
    t.feed("\x1b[1;10H");
    t.term.resize(4, 2, 0, 0, &mut t.host);
    assert_eq!(t.term.cols(), 4);
    t.assert_cursor_pos(3, 0);
}

#[test]
fn resize_notifies_the_host_with_the_new_cell_geometry() {
    let mut t = TestTerm::new(10, 2);
    t.term.resize(12, 4, 640, 480, &mut t.host);
    assert_eq!(t.host.resizes.last(), Some(&(4u16, 12u16, 640, 480)));
}
