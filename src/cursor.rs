//! Cursor position and per-cursor state (pen, deferred wrap, origin mode).

use crate::glyph::Style;

/// A screen coordinate. `x` is the column, `y` the row, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

/// Cursor state saved/restored by DECSC/DECRC and swapped wholesale by
/// `ESC 7`/`ESC 8` and alt-screen switches.
///
/// `pen` is the style that will be stamped onto the next printed glyph; it
/// is the Rust analogue of `struct tcursor::attr`, minus that struct's
/// vestigial `c` field (always 0 in the original, since `tsetattr` never
/// assigns it — it is modeled directly by [`crate::glyph::Glyph::blank`]
/// instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pen: Style,
    pub pos: Coord,
    /// Deferred-wrap ("sticky last column") flag: set when a printable
    /// character fills the last column, so the *next* printable character
    /// triggers the wrap instead of this one.
    pub wrapnext: bool,
    /// DECOM origin mode: when set, cursor addressing is relative to the
    /// scroll region rather than the whole screen.
    pub origin: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor {
            pen: Style::default(),
            pos: Coord::default(),
            wrapnext: false,
            origin: false,
        }
    }
}
