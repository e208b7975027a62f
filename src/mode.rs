//! Global terminal mode flags.
//!
//! These are exactly the fourteen `unsigned:1` bitfields carried directly
//! on `struct st_term` (as opposed to `wrapnext`/`origin`, which live on
//! the cursor, see [`crate::cursor::Cursor`]).

bitflags::bitflags! {
    pub struct TermMode: u16 {
        const WRAP          = 1 << 0;
        const INSERT        = 1 << 1;
        const APPKEYPAD     = 1 << 2;
        const ALTSCREEN     = 1 << 3;
        const CRLF          = 1 << 4;
        const MOUSE_BUTTON  = 1 << 5;
        const MOUSE_MOTION  = 1 << 6;
        const REVERSE       = 1 << 7;
        const KBDLOCK       = 1 << 8;
        const HIDE_CURSOR   = 1 << 9;
        const ECHO          = 1 << 10;
        const APPCURSOR     = 1 << 11;
        const MOUSE_SGR     = 1 << 12;
        /// Carried for parity with `struct st_term::numlock`; nothing in
        /// this crate's escape-sequence handling toggles it; it exists
        /// for a host-side keyboard layer to read/drive.
        const NUMLOCK       = 1 << 13;
    }
}

impl Default for TermMode {
    /// `treset`'s mode assignment exactly: `wrap = 1`, every other field
    /// (including `echo`) explicitly zeroed. `numlock` is deliberately
    /// absent here: `treset` never assigns `term->numlock` at all, only
    /// `term_init` does, once, before its one-time call to `treset` — so
    /// `numlock` is not part of the reset value and must be preserved
    /// separately across a reset rather than folded into this default.
    fn default() -> Self {
        TermMode::WRAP
    }
}
