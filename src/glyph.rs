//! Packed cell style and glyph representation.
//!
//! Mirrors `struct st_glyph`'s bitfield union: a whole style packs into a
//! single `u32`, so two styles compare equal with one integer compare
//! instead of a field-by-field walk.

use crate::color::{ColorIndex, COLOR_INDEX_MASK, DEFAULT_BG, DEFAULT_FG};

const FG_SHIFT: u32 = 0;
const BG_SHIFT: u32 = 12;
const REVERSE_BIT: u32 = 1 << 24;
const UNDERLINE_BIT: u32 = 1 << 25;
const BOLD_BIT: u32 = 1 << 26;
const GFX_BIT: u32 = 1 << 27;
const ITALIC_BIT: u32 = 1 << 28;
const BLINK_BIT: u32 = 1 << 29;

/// A cell's rendition attributes, packed into one word so that whole-style
/// equality is a single integer compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style(u32);

impl Style {
    pub fn fg(self) -> ColorIndex {
        ((self.0 >> FG_SHIFT) & u32::from(COLOR_INDEX_MASK)) as ColorIndex
    }

    pub fn bg(self) -> ColorIndex {
        ((self.0 >> BG_SHIFT) & u32::from(COLOR_INDEX_MASK)) as ColorIndex
    }

    pub fn with_fg(mut self, fg: ColorIndex) -> Self {
        self.0 &= !(u32::from(COLOR_INDEX_MASK) << FG_SHIFT);
        self.0 |= u32::from(fg & COLOR_INDEX_MASK) << FG_SHIFT;
        self
    }

    pub fn with_bg(mut self, bg: ColorIndex) -> Self {
        self.0 &= !(u32::from(COLOR_INDEX_MASK) << BG_SHIFT);
        self.0 |= u32::from(bg & COLOR_INDEX_MASK) << BG_SHIFT;
        self
    }

    fn bit(self, bit: u32) -> bool {
        self.0 & bit != 0
    }

    fn with_bit(mut self, bit: u32, on: bool) -> Self {
        if on {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
        self
    }

    pub fn reverse(self) -> bool {
        self.bit(REVERSE_BIT)
    }
    pub fn with_reverse(self, on: bool) -> Self {
        self.with_bit(REVERSE_BIT, on)
    }

    pub fn underline(self) -> bool {
        self.bit(UNDERLINE_BIT)
    }
    pub fn with_underline(self, on: bool) -> Self {
        self.with_bit(UNDERLINE_BIT, on)
    }

    pub fn bold(self) -> bool {
        self.bit(BOLD_BIT)
    }
    pub fn with_bold(self, on: bool) -> Self {
        self.with_bit(BOLD_BIT, on)
    }

    /// Line-drawing (alternate charset) glyph, set by SO/SI or the
    /// designated-G1 `ESC ( 0` / `ESC ) 0` sequences.
    pub fn gfx(self) -> bool {
        self.bit(GFX_BIT)
    }
    pub fn with_gfx(self, on: bool) -> Self {
        self.with_bit(GFX_BIT, on)
    }

    pub fn italic(self) -> bool {
        self.bit(ITALIC_BIT)
    }
    pub fn with_italic(self, on: bool) -> Self {
        self.with_bit(ITALIC_BIT, on)
    }

    pub fn blink(self) -> bool {
        self.bit(BLINK_BIT)
    }
    pub fn with_blink(self, on: bool) -> Self {
        self.with_bit(BLINK_BIT, on)
    }

    /// Reset all rendition attributes, keeping only fg/bg defaults. Grounds
    /// `tsetattr`'s `case 0`.
    pub fn reset(self) -> Self {
        Style::default()
    }
}

impl Default for Style {
    fn default() -> Self {
        Style(0).with_fg(DEFAULT_FG).with_bg(DEFAULT_BG)
    }
}

/// One screen cell: a codepoint plus its rendition.
///
/// `c == '\0'` is the "never written" sentinel used by clear/scroll fills
/// (the cursor's template glyph always carries `c == 0`, since `tsetattr`
/// never touches the `c` field of `struct st_glyph`). It is distinct from
/// an actual space character typed or printed by the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub c: char,
    pub style: Style,
}

impl Glyph {
    pub fn blank(style: Style) -> Self {
        Glyph { c: '\0', style }
    }

    pub fn is_blank(self) -> bool {
        self.c == '\0'
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::blank(Style::default())
    }
}
