//! Escape-sequence parser state: a tagged state machine (ground state is
//! "no variant active", modeled by wrapping in `Option`/plain match in
//! `Term`) rather than the original's bitflag set (`esc: ESC_START |
//! ESC_CSI | ...`), per the "Escape state as a set of flags" design note —
//! this crate uses the exhaustive-tagged-enum alternative it recommends.

/// Which string-escape kind is being accumulated (the opening byte after
/// ESC: `P` DCS, `]` OSC, `^` PM, `_` APC, `k` legacy title).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrKind {
    Dcs,
    Osc,
    Pm,
    Apc,
    Title,
}

impl StrKind {
    pub fn from_opening_byte(b: u8) -> Option<Self> {
        match b {
            b'P' => Some(StrKind::Dcs),
            b']' => Some(StrKind::Osc),
            b'^' => Some(StrKind::Pm),
            b'_' => Some(StrKind::Apc),
            b'k' => Some(StrKind::Title),
            _ => None,
        }
    }
}

/// Parser state. `Ground` means "not inside any escape sequence"; every
/// other variant is mid-sequence. `StrEnd` is the "saw ESC while
/// accumulating a string escape, waiting for the terminating `\`" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserState {
    Ground,
    EscStart,
    Csi(CsiAccum),
    Str(StrAccum),
    StrEnd(StrAccum),
    AltCharset,
    Test,
}

impl Default for ParserState {
    fn default() -> Self {
        ParserState::Ground
    }
}

pub const CSI_ARGS_MAX: usize = 16;

/// Upper bound on a single accumulated CSI argument value. `csiparse`'s
/// `strtol` call clamps to `LONG_MAX`/`LONG_MIN` on overflow rather than
/// rejecting the sequence (`term.c`'s `v == LONG_MAX || v == LONG_MIN`
/// check); this is that same clamp, just at a far smaller ceiling, since no
/// CSI final this crate implements ever reads a row/column/repeat-count/
/// color-index argument anywhere near this large. Saturating here (instead
/// of letting the accumulated value overflow `i64`) is what keeps an
/// absurdly long digit run from panicking.
const CSI_ARG_MAX: i64 = 0xFFFF;

/// Raw-byte bound on the whole sequence body, mirroring `spec.md` §3.5's
/// `CsiEscape = {buf[>=640], ...}` and `term.c`'s `csiescseq.buf`
/// (`ESC_BUF_SIZ`, 128 * `UTF_SIZ`). Once a sequence's body has grown past
/// this many bytes without a final byte showing up, it is abandoned
/// exactly `term.c`'s `tputc` does when `len >= sizeof(buf) - 1`: treated
/// as if the overflowing byte were the final byte.
const CSI_BUF_MAX: usize = 640;

/// Accumulator for a CSI sequence: `ESC [ [?] arg [; arg ...] final`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsiAccum {
    pub priv_mode: bool,
    pub args: Vec<i64>,
    current: Option<i64>,
    len: usize,
}

impl CsiAccum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw byte of the sequence body (after the leading `[`, up
    /// to but not including the final byte). Returns `false` once the raw
    /// body has grown past [`CSI_BUF_MAX`] bytes without a final byte —
    /// true buffer overflow (§7 class 2) — at which point the caller must
    /// treat `b` as if it were the final byte and abandon the sequence.
    /// A digit run past [`CSI_ARG_MAX`] or an argument list past the
    /// 16-argument cap is *not* itself an overflow: those bytes are simply
    /// dropped (saturating the current value, ignoring the extra
    /// argument) while the sequence keeps waiting for its real final byte,
    /// matching `csiparse`'s overflow-clamps-rather-than-aborts behavior.
    pub fn push_byte(&mut self, b: u8) -> bool {
        if self.len >= CSI_BUF_MAX {
            return false;
        }
        self.len += 1;
        match b {
            b'?' if self.args.is_empty() && self.current.is_none() => {
                self.priv_mode = true;
            }
            b'0'..=b'9' => {
                if self.args.len() < CSI_ARGS_MAX {
                    let d = i64::from(b - b'0');
                    let cur = self.current.unwrap_or(0);
                    self.current = Some(cur.saturating_mul(10).saturating_add(d).min(CSI_ARG_MAX));
                }
            }
            b';' => {
                if self.args.len() < CSI_ARGS_MAX {
                    self.args.push(self.current.take().unwrap_or(0));
                }
            }
            _ => {}
        }
        true
    }

    pub fn finish(&mut self) {
        if self.current.is_some() || self.args.is_empty() {
            self.args.push(self.current.take().unwrap_or(0));
        }
    }

    /// Argument `i`, defaulting to `default` when absent or explicitly 0
    /// (most CSI finals treat an omitted/zero count as 1).
    pub fn arg_or(&self, i: usize, default: i64) -> i64 {
        match self.args.get(i) {
            Some(&0) | None => default,
            Some(&v) => v,
        }
    }

    /// Argument `i` with no zero-means-default substitution, for
    /// finals (like SGR color indices) where 0 is a meaningful value.
    pub fn raw_arg(&self, i: usize) -> i64 {
        *self.args.get(i).unwrap_or(&0)
    }
}

/// Accumulator for a string escape (OSC/DCS/PM/APC): `ESC type ... ESC \`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrAccum {
    pub kind: Option<StrKind>,
    pub buf: String,
}

impl StrAccum {
    pub fn new(kind: StrKind) -> Self {
        StrAccum {
            kind: Some(kind),
            buf: String::new(),
        }
    }

    pub fn args(&self) -> Vec<&str> {
        self.buf.splitn(16, ';').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csi_accum_parses_private_and_args() {
        let mut c = CsiAccum::new();
        for b in b"?1;25" {
            c.push_byte(*b);
        }
        c.finish();
        assert!(c.priv_mode);
        assert_eq!(c.args, vec![1, 25]);
    }

    #[test]
    fn a_long_digit_run_saturates_the_argument_instead_of_overflowing() {
        let mut c = CsiAccum::new();
        // 20 nines would overflow i64 under naive `* 10 + d`; the sequence
        // body itself (20 bytes) is nowhere near CSI_BUF_MAX, so every byte
        // must still be accepted (`push_byte` returns `true`) while the
        // numeric value clamps instead of panicking.
        for b in std::iter::repeat(b'9').take(20) {
            assert!(c.push_byte(b));
        }
        c.finish();
        assert_eq!(c.args, vec![CSI_ARG_MAX]);
    }

    #[test]
    fn byte_count_past_the_buffer_bound_is_rejected() {
        let mut c = CsiAccum::new();
        let mut saw_overflow = false;
        for b in std::iter::repeat(b'1').take(CSI_BUF_MAX + 10) {
            if !c.push_byte(b) {
                saw_overflow = true;
                break;
            }
        }
        assert!(saw_overflow);
    }

    #[test]
    fn csi_arg_or_defaults_zero_to_default() {
        let mut c = CsiAccum::new();
        c.finish(); // no bytes fed: empty arg list -> single implicit 0
        assert_eq!(c.arg_or(0, 1), 1);
        assert_eq!(c.raw_arg(0), 0);
    }

    #[test]
    fn str_accum_splits_args_on_semicolon() {
        let mut s = StrAccum::new(StrKind::Osc);
        s.buf.push_str("4;12;#ff0000");
        assert_eq!(s.args(), vec!["4", "12", "#ff0000"]);
    }
}
