//! OSC string-escape dispatch (`spec.md` §4.2.6).

use super::TestTerm;

#[test]
fn osc_0_sets_title_terminated_by_bel() {
    let mut t = TestTerm::new(10, 2);
    t.feed("\x1b]0;my title\x07");
    assert_eq!(t.host.title.as_deref(), Some("my title"));
}

#[test]
fn osc_2_sets_title_terminated_by_st() {
    let mut t = TestTerm::new(10, 2);
    t.feed("\x1b]2;other title\x1b\\");
    assert_eq!(t.host.title.as_deref(), Some("other title"));
}

#[test]
fn osc_4_sets_a_palette_color_by_index() {
    let mut t = TestTerm::new(10, 2);
    t.feed("\x1b]4;12;#ff0000\x07");
    assert_eq!(t.host.colors, vec![(Some(12), Some("#ff0000".to_string()))]);
}

#[test]
fn osc_4_with_no_name_argument_is_a_no_op() {
    let mut t = TestTerm::new(10, 2);
    // `strhandle`'s case 4 requires narg >= 3 (index and name both
    // present); with only an index given, it's a no-op, not a reset.
    t.feed("\x1b]4;12\x07");
    assert!(t.host.colors.is_empty());
}

#[test]
fn osc_104_with_no_args_issues_a_single_reset_all_call() {
    let mut t = TestTerm::new(10, 2);
    // `strhandle` issues exactly one `setcolorname(term, -1, NULL)` call
    // when OSC 104 has no index argument; it never loops over the palette
    // itself; `None` here is that `-1` sentinel.
    t.feed("\x1b]104\x07");
    assert_eq!(t.host.colors, vec![(None, None)]);
}

#[test]
fn osc_104_with_an_index_resets_only_that_entry() {
    let mut t = TestTerm::new(10, 2);
    t.feed("\x1b]104;7\x07");
    assert_eq!(t.host.colors, vec![(Some(7), None)]);
}

#[test]
fn legacy_title_escape_sets_title_on_st() {
    let mut t = TestTerm::new(10, 2);
    t.feed("\x1bklegacy\x1b\\");
    assert_eq!(t.host.title.as_deref(), Some("legacy"));
}
