//! OSC/DCS/PM/APC string-escape dispatch (`spec.md` §4.2.6). Grounds
//! `strhandle`. DCS/PM/APC bodies have no behavior defined for this crate
//! and are only logged; legacy `ESC k ... ESC \` title-setting and the
//! handful of OSC codes xterm programs actually rely on are implemented.

use crate::host::TerminalHost;
use crate::parser::{StrAccum, StrKind};
use crate::term::Term;

pub(crate) fn dispatch<H: TerminalHost>(term: &mut Term, host: &mut H, accum: &StrAccum) {
    match accum.kind {
        Some(StrKind::Osc) => osc(term, host, accum),
        Some(StrKind::Title) => host.set_title(Some(&accum.buf)),
        Some(StrKind::Dcs) | Some(StrKind::Pm) | Some(StrKind::Apc) => {
            crate::debug!("unhandled string escape {:?}: {:?}", accum.kind, accum.buf);
        }
        None => {}
    }
}

fn osc<H: TerminalHost>(_term: &mut Term, host: &mut H, accum: &StrAccum) {
    let args = accum.args();
    let code = match args.first().and_then(|s| s.parse::<u32>().ok()) {
        Some(code) => code,
        None => return,
    };
    match code {
        0 | 1 | 2 => host.set_title(args.get(1).copied()),
        4 => set_color(host, &args),
        104 => reset_color(host, &args),
        other => crate::debug!("erresc: unknown OSC code {} args={:?}", other, args),
    }
}

/// A forgiving decimal parse mirroring `atoi`: leading digits convert,
/// anything else (empty, non-numeric) yields 0 rather than aborting the
/// whole string escape the way a `Result`-returning parse would.
fn atoi(s: &str) -> i64 {
    s.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')))
}

/// `OSC 4 ; index ; name ST`. `strhandle`'s case 4 requires both an index
/// and a name (`narg < 3` is a no-op) and reads this single pair only —
/// never a repeating list of pairs.
fn set_color<H: TerminalHost>(host: &mut H, args: &[&str]) {
    if args.len() < 3 {
        return;
    }
    let index = atoi(args[1]).clamp(0, i64::from(u16::MAX)) as u16;
    let name = args[2];
    let name = if name.is_empty() { None } else { Some(name) };
    let _ = host.set_color_name(Some(index), name);
}

/// `OSC 104 [; index] ST`. `strhandle`'s case 104 falls into the same
/// `setcolorname` call as case 4, with the name argument `NULL`, and reads
/// at most one index argument: `j = (narg > 1) ? atoi(args[1]) : -1`. An
/// omitted index is that `-1` sentinel — one "reset everything" call to
/// the host, not a loop over every palette slot issued by this crate.
fn reset_color<H: TerminalHost>(host: &mut H, args: &[&str]) {
    let index = if args.len() > 1 {
        Some(atoi(args[1]).clamp(0, i64::from(u16::MAX)) as u16)
    } else {
        None
    };
    let _ = host.set_color_name(index, None);
}
