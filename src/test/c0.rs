//! C0 control handling (`spec.md` §4.2.7).

use super::TestTerm;

#[test]
fn tab_advances_to_next_stop() {
    let mut t = TestTerm::new(20, 3);
    t.feed("a\t");
    t.assert_cursor_pos(8, 0);
}

#[test]
fn backspace_moves_left_one_column() {
    let mut t = TestTerm::new(20, 3);
    t.feed("abc\x08");
    t.assert_cursor_pos(2, 0);
}

#[test]
fn backspace_at_column_zero_is_a_no_op() {
    let mut t = TestTerm::new(20, 3);
    t.feed("\x08\x08");
    t.assert_cursor_pos(0, 0);
}

#[test]
fn carriage_return_clears_wrapnext() {
    let mut t = TestTerm::new(4, 3);
    t.feed("abcd"); // fills the last column, sets wrapnext
    t.feed("\r");
    t.assert_cursor_pos(0, 0);
    t.feed("X");
    // with wrapnext cleared, X overwrites column 0 instead of wrapping.
    t.assert_visible_contents(0, "Xbcd");
}

#[test]
fn linefeed_scrolls_region_at_bottom_row() {
    let mut t = TestTerm::new(4, 2);
    t.feed("ab\r\ncd\r\n");
    t.assert_visible_contents(0, "ab");
    t.assert_visible_contents(1, "cd");
    t.feed("ef\r\n");
    t.assert_visible_contents(0, "cd");
    t.assert_visible_contents(1, "ef");
}

#[test]
fn bell_sets_urgent_on_host() {
    let mut t = TestTerm::new(10, 2);
    assert!(!t.host.urgent);
    t.feed("\x07");
    assert!(t.host.urgent);
}
