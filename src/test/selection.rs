//! Selection tracking driven through [`TestTerm`] (`spec.md` §4.6), as a
//! host's mouse handler would drive it.

use super::TestTerm;
use crate::cursor::Coord;
use crate::selection::SelectionType;

#[test]
fn drag_selection_copies_the_spanned_text() {
    let mut t = TestTerm::new(20, 2);
    t.feed("hello world");
    t.term.sel_start(SelectionType::Linear, Coord::new(0, 0));
    t.term.sel_update(Coord::new(4, 0));
    assert_eq!(t.term.selection().clip(), Some("hello"));
}

#[test]
fn double_click_word_selection_stops_at_space() {
    let mut t = TestTerm::new(20, 1);
    t.feed("foo bar");
    t.term.sel_word(Coord::new(5, 0));
    assert_eq!(t.term.selection().clip(), Some("bar"));
}

#[test]
fn writing_inside_an_active_selection_clears_it() {
    let mut t = TestTerm::new(20, 2);
    t.feed("hello\r\nworld");
    t.term.sel_start(SelectionType::Linear, Coord::new(0, 0));
    t.term.sel_update(Coord::new(4, 0));
    assert!(t.term.selection().is_active());
    t.feed("\x1b[1;1HX");
    assert!(!t.term.selection().is_active());
}

#[test]
fn scrolling_the_screen_shifts_an_in_region_selection() {
    let mut t = TestTerm::new(10, 4);
    t.feed("row0\r\nrow1\r\nrow2\r\nrow3");
    t.term.sel_start(SelectionType::Linear, Coord::new(0, 2));
    t.term.sel_update(Coord::new(3, 2));
    t.feed("\x1b[1S"); // scroll the whole screen up by 1
    assert!(t.term.selection().is_active());
    assert_eq!(t.term.selection().range().0.y, 1);
}
