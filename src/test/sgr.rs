//! SGR attribute processing (`spec.md` §4.2.3 SGR paragraph).

use super::TestTerm;
use crate::color::{DEFAULT_BG, DEFAULT_FG};

#[test]
fn sgr_zero_resets_to_default_pen() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[1;4;31m");
    t.feed("\x1b[0m");
    let pen = t.term.cursor().pen;
    assert!(!pen.bold());
    assert!(!pen.underline());
    assert_eq!(pen.fg(), DEFAULT_FG);
    assert_eq!(pen.bg(), DEFAULT_BG);
}

#[test]
fn sgr_bold_and_underline_set_independent_bits() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[1;4m");
    let pen = t.term.cursor().pen;
    assert!(pen.bold());
    assert!(pen.underline());
    assert!(!pen.reverse());
}

#[test]
fn sgr_base_and_bright_colors_map_to_0_15() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[31;104m"); // red fg, bright blue bg
    let pen = t.term.cursor().pen;
    assert_eq!(pen.fg(), 1);
    assert_eq!(pen.bg(), 12);
}

#[test]
fn sgr_indexed_256_color_sets_exact_index() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[38;5;200m");
    assert_eq!(t.term.cursor().pen.fg(), 200);
}

#[test]
fn sgr_39_49_reset_only_colors_not_other_attributes() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[1;31;39m");
    let pen = t.term.cursor().pen;
    assert!(pen.bold());
    assert_eq!(pen.fg(), DEFAULT_FG);
}

#[test]
fn printed_glyph_carries_the_current_pen() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[1mX");
    assert!(t.cell(0, 0).style.bold());
}

#[test]
fn sgr_with_no_args_means_reset() {
    let mut t = TestTerm::new(10, 1);
    t.feed("\x1b[1m\x1b[m");
    assert!(!t.term.cursor().pen.bold());
}
