//! CSI final-byte dispatch (`spec.md` §4.2.3/§4.2.5), grounding `csihandle`.

use crate::cursor::Coord;
use crate::host::TerminalHost;
use crate::mode::TermMode;
use crate::parser::CsiAccum;
use crate::term::{Term, VT102_REPLY};

pub(crate) fn dispatch<H: TerminalHost>(
    term: &mut Term,
    host: &mut H,
    accum: &CsiAccum,
    final_byte: char,
) {
    let n = |i: usize| accum.arg_or(i, 1) as usize;

    match final_byte {
        '@' => term.insert_blank(n(0)),
        'A' => term.move_rel(0, -(n(0) as isize)),
        'B' | 'e' => term.move_rel(0, n(0) as isize),
        'C' | 'a' => term.move_rel(n(0) as isize, 0),
        'D' => term.move_rel(-(n(0) as isize), 0),
        'E' => {
            term.move_rel(0, n(0) as isize);
            let y = term.cursor().pos.y;
            term.move_to(0, y);
        }
        'F' => {
            term.move_rel(0, -(n(0) as isize));
            let y = term.cursor().pos.y;
            term.move_to(0, y);
        }
        'G' | '`' => {
            let y = term.cursor().pos.y;
            term.move_to(n(0) - 1, y);
        }
        'H' | 'f' => {
            let row = n(0) - 1;
            let col = n(1) - 1;
            term.move_to_origin_relative(col, row);
        }
        'I' => term.tab_forward(n(0)),
        'J' => clear_screen(term, accum.raw_arg(0)),
        'K' => clear_line(term, accum.raw_arg(0)),
        'L' => term.insert_lines(n(0)),
        'M' => term.delete_lines(n(0)),
        'P' => term.delete_chars(n(0)),
        'S' => {
            let (top, bot) = term.scroll_region();
            term.scroll_up(top, bot, n(0));
        }
        'T' => {
            let (top, bot) = term.scroll_region();
            term.scroll_down(top, bot, n(0));
        }
        'X' => term.erase_chars(n(0)),
        'Z' => term.tab_backward(n(0)),
        'c' => {
            if accum.raw_arg(0) == 0 {
                let _ = host.write_to_pty(VT102_REPLY);
            }
        }
        'd' => {
            let x = term.cursor().pos.x;
            term.move_to(x, n(0) - 1);
        }
        'g' => match accum.raw_arg(0) {
            0 => term.clear_tab_at_cursor(),
            3 => term.clear_all_tabs(),
            other => log_unknown(final_byte, &[other]),
        },
        'h' | 'l' => set_modes(term, accum, final_byte == 'h'),
        'm' => sgr(term, accum),
        'r' => {
            let top = n(0) - 1;
            let bot = accum.arg_or(1, term.rows() as i64) as usize - 1;
            term.set_scroll_region(top, bot);
        }
        's' => term.save_cursor(),
        'u' => term.restore_cursor(),
        other => log_unknown(other, &accum.args),
    }
}

fn clear_screen(term: &mut Term, arg: i64) {
    let (cols, rows) = (term.cols(), term.rows());
    let cur = term.cursor().pos;
    match arg {
        0 => {
            term.clear_line(cur.y, cur.x, cols);
            if cur.y + 1 < rows {
                term.clear_region(Coord::new(0, cur.y + 1), Coord::new(cols, rows));
            }
        }
        1 => {
            if cur.y > 0 {
                term.clear_region(Coord::new(0, 0), Coord::new(cols, cur.y));
            }
            term.clear_line(cur.y, 0, cur.x + 1);
        }
        2 => term.clear_region(Coord::new(0, 0), Coord::new(cols, rows)),
        other => log_unknown('J', &[other]),
    }
}

fn clear_line(term: &mut Term, arg: i64) {
    let cols = term.cols();
    let cur = term.cursor().pos;
    match arg {
        0 => term.clear_line(cur.y, cur.x, cols),
        1 => term.clear_line(cur.y, 0, cur.x + 1),
        2 => term.clear_line(cur.y, 0, cols),
        other => log_unknown('K', &[other]),
    }
}

fn set_modes(term: &mut Term, accum: &CsiAccum, set: bool) {
    let count = accum.args.len().max(1);
    for i in 0..count {
        let code = accum.raw_arg(i);
        if accum.priv_mode {
            apply_private_mode(term, code, set);
        } else {
            apply_public_mode(term, code, set);
        }
    }
}

fn apply_private_mode(term: &mut Term, code: i64, set: bool) {
    match code {
        1 => term.mode_mut().set(TermMode::APPCURSOR, set),
        5 => {
            term.mode_mut().set(TermMode::REVERSE, set);
            term.mark_full_dirty();
        }
        6 => {
            term.cursor_mut().origin = set;
            term.move_to_origin_relative(0, 0);
        }
        7 => term.mode_mut().set(TermMode::WRAP, set),
        25 => term.mode_mut().set(TermMode::HIDE_CURSOR, !set),
        1000 => {
            term.mode_mut().set(TermMode::MOUSE_BUTTON, set);
            if set {
                term.mode_mut().remove(TermMode::MOUSE_MOTION);
            }
        }
        1002 => {
            term.mode_mut().set(TermMode::MOUSE_MOTION, set);
            if set {
                term.mode_mut().remove(TermMode::MOUSE_BUTTON);
            }
        }
        1006 => term.mode_mut().set(TermMode::MOUSE_SGR, set),
        47 => {
            if set != term.is_altscreen() {
                term.swap_screen(false);
            }
        }
        1047 => {
            if set {
                if !term.is_altscreen() {
                    term.swap_screen(false);
                }
            } else if term.is_altscreen() {
                term.swap_screen(true);
            }
        }
        1048 => {
            if set {
                term.save_cursor();
            } else {
                term.restore_cursor();
            }
        }
        1049 => {
            if set {
                term.save_cursor();
                if !term.is_altscreen() {
                    term.swap_screen(false);
                }
            } else {
                if term.is_altscreen() {
                    term.swap_screen(true);
                }
                term.restore_cursor();
            }
        }
        other => log_unknown(if set { 'h' } else { 'l' }, &[other]),
    }
}

fn apply_public_mode(term: &mut Term, code: i64, set: bool) {
    match code {
        2 => term.mode_mut().set(TermMode::KBDLOCK, set),
        4 => term.mode_mut().set(TermMode::INSERT, set),
        12 => term.mode_mut().set(TermMode::ECHO, !set),
        20 => term.mode_mut().set(TermMode::CRLF, set),
        other => log_unknown(if set { 'h' } else { 'l' }, &[other]),
    }
}

/// SGR: process the argument list left to right. `38;5;N`/`48;5;N` each
/// consume a three-argument run; every other code is single-argument.
fn sgr(term: &mut Term, accum: &CsiAccum) {
    let mut style = term.cursor().pen;
    if accum.args.is_empty() {
        term.set_sgr(style.reset());
        return;
    }
    let mut i = 0;
    while i < accum.args.len() {
        let code = accum.raw_arg(i);
        match code {
            0 => style = style.reset(),
            1 => style = style.with_bold(true),
            21 | 22 => style = style.with_bold(false),
            3 => style = style.with_italic(true),
            23 => style = style.with_italic(false),
            4 => style = style.with_underline(true),
            24 => style = style.with_underline(false),
            5 | 6 => style = style.with_blink(true),
            25 | 26 => style = style.with_blink(false),
            7 => style = style.with_reverse(true),
            27 => style = style.with_reverse(false),
            30..=37 => style = style.with_fg((code - 30) as u16),
            40..=47 => style = style.with_bg((code - 40) as u16),
            90..=97 => style = style.with_fg((code - 90 + 8) as u16),
            100..=107 => style = style.with_bg((code - 100 + 8) as u16),
            38 | 48 => {
                let is_fg = code == 38;
                if i + 2 < accum.args.len() && accum.raw_arg(i + 1) == 5 {
                    let idx = accum.raw_arg(i + 2).clamp(0, 255) as u16;
                    style = if is_fg {
                        style.with_fg(idx)
                    } else {
                        style.with_bg(idx)
                    };
                    i += 2;
                } else {
                    log_unknown('m', &accum.args);
                }
            }
            39 => style = style.with_fg(crate::color::DEFAULT_FG),
            49 => style = style.with_bg(crate::color::DEFAULT_BG),
            other => log_unknown('m', &[other]),
        }
        i += 1;
    }
    term.set_sgr(style);
}

fn log_unknown(final_byte: char, args: &[i64]) {
    eprintln!("erresc: unknown CSI final '{}' args={:?}", final_byte, args);
}
