//! Color index space.
//!
//! Foreground/background are plain indices into a palette the host owns.
//! Indices 0-255 are the xterm palette; everything above is available for
//! the host to assign meaning to (custom OSC 4 colors, etc). We only carry
//! two reserved indices of our own: "the terminal default fg/bg", which SGR
//! 0/39/49 reset to and which `ColorIndex::default()` stamps onto new
//! glyphs.

/// A 12-bit palette index (0..=4095), matching `struct st_glyph`'s packed
/// `fg`/`bg` bitfields.
pub type ColorIndex = u16;

pub const COLOR_INDEX_BITS: u32 = 12;
pub const COLOR_INDEX_MASK: u16 = (1 << COLOR_INDEX_BITS) - 1;

/// Reserved index meaning "whatever the host considers the default
/// foreground to be". Chosen as the top of the 12-bit index space so it
/// never collides with the 0-255 xterm palette or a host's OSC 4 custom
/// indices, which are expected to stay well below it in practice.
pub const DEFAULT_FG: ColorIndex = COLOR_INDEX_MASK;
/// Reserved index meaning "whatever the host considers the default
/// background to be".
pub const DEFAULT_BG: ColorIndex = COLOR_INDEX_MASK - 1;

/// Size of the portion of the index space that is the standard xterm
/// palette (8 basic + 8 bright).
pub const XTERM_PALETTE_SIZE: u16 = 16;
/// Size of the full indexed-color palette addressable by SGR 38;5;N /
/// 48;5;N (N in 0..=255).
pub const INDEXED_PALETTE_SIZE: u16 = 256;
