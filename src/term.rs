//! The combining terminal type: screen pair, cursor, modes, selection, and
//! the parser that drives them all from a raw byte stream. Grounds
//! `struct st_term` and its `tputc`/`tnewline`/`tmoveto`-family methods.

use std::io::Write as _;

use crate::charset;
use crate::cursor::{Coord, Cursor};
use crate::glyph::{Glyph, Style};
use crate::host::TerminalHost;
use crate::mode::TermMode;
use crate::mouse::{MouseButton, MouseEventKind, MouseMods, MouseReportState};
use crate::parser::{CsiAccum, ParserState, StrAccum, StrKind};
use crate::screen::Screen;
use crate::selection::{Selection, SelectionType};
use crate::utf8::Utf8Decoder;
use crate::{csi, osc};

/// Tab stops are fixed every 8 columns (`term.h`'s `SPACES_PER_TAB`); no
/// operation in this crate's scope varies it.
pub const TAB_WIDTH: usize = 8;

/// DA/DECID reply: this crate reports itself as a VT102 exactly as the
/// original (`term.h`'s `VT102ID`).
pub const VT102_REPLY: &[u8] = b"\x1b[?6c";

pub struct Term {
    primary: Screen,
    alternate: Screen,
    altscreen: bool,
    cursor: Cursor,
    saved_cursor: Cursor,
    top: usize,
    bot: usize,
    tabs: Vec<bool>,
    mode: TermMode,
    selection: Selection,
    state: ParserState,
    utf8: Utf8Decoder,
    mouse: MouseReportState,
}

impl Term {
    pub fn new(cols: usize, rows: usize) -> Self {
        let mut tabs = vec![false; cols];
        seed_tabs(&mut tabs);
        Term {
            primary: Screen::new(cols, rows),
            alternate: Screen::new(cols, rows),
            altscreen: false,
            cursor: Cursor::default(),
            saved_cursor: Cursor::default(),
            top: 0,
            bot: rows.saturating_sub(1),
            tabs,
            // `term_init` sets `numlock = 1` once, before its one-time call
            // to `treset`; `TermMode::default()` models `treset`'s own
            // assignment and deliberately excludes `numlock`, so it is set
            // here instead, at construction, not folded into every reset.
            mode: TermMode::default() | TermMode::NUMLOCK,
            selection: Selection::new(),
            state: ParserState::Ground,
            utf8: Utf8Decoder::new(),
            mouse: MouseReportState::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        if self.altscreen {
            &self.alternate
        } else {
            &self.primary
        }
    }

    fn screen_mut(&mut self) -> &mut Screen {
        if self.altscreen {
            &mut self.alternate
        } else {
            &mut self.primary
        }
    }

    pub fn cols(&self) -> usize {
        self.screen().cols()
    }

    pub fn rows(&self) -> usize {
        self.screen().rows()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn mode(&self) -> TermMode {
        self.mode
    }

    pub fn scroll_region(&self) -> (usize, usize) {
        (self.top, self.bot)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn clear_dirty(&mut self) {
        self.screen_mut().clear_dirty();
    }

    // ---- selection (host mouse-driven) -------------------------------

    pub fn sel_start(&mut self, ty: SelectionType, pos: Coord) {
        self.selection.start(ty, pos);
    }

    pub fn sel_update(&mut self, end: Coord) {
        let screen: &Screen = if self.altscreen { &self.alternate } else { &self.primary };
        self.selection.update(end, screen);
    }

    pub fn sel_word(&mut self, pos: Coord) {
        let screen: &Screen = if self.altscreen { &self.alternate } else { &self.primary };
        self.selection.word(pos, screen);
    }

    pub fn sel_line(&mut self, pos: Coord) {
        let screen: &Screen = if self.altscreen { &self.alternate } else { &self.primary };
        self.selection.line(pos, screen);
    }

    pub fn sel_stop(&mut self) {
        self.selection.stop();
    }

    // ---- byte-feed entry points -------------------------------------

    /// Feed raw child-process output through the UTF-8 codec and the
    /// escape-sequence state machine.
    pub fn advance_bytes<H: TerminalHost>(&mut self, bytes: &[u8], host: &mut H) {
        // Borrow-check note: `Utf8Decoder::feed` needs `&mut self.utf8`
        // while the closure needs `&mut self` (minus `utf8`) to dispatch.
        // Decode into a scratch buffer first, then dispatch, to avoid an
        // aliasing borrow.
        let mut scalars = Vec::new();
        let mut utf8 = std::mem::take(&mut self.utf8);
        utf8.feed(bytes, |c| scalars.push(c));
        self.utf8 = utf8;
        for c in scalars {
            self.feed_scalar(c, host);
        }
    }

    /// As `advance_bytes`, but first tees the raw bytes to an optional log
    /// sink (`term_read`'s `logfd`).
    pub fn read_from_child<H: TerminalHost>(
        &mut self,
        bytes: &[u8],
        log: Option<&mut dyn std::io::Write>,
        host: &mut H,
    ) {
        if let Some(sink) = log {
            let _ = sink.write_all(bytes);
        }
        self.advance_bytes(bytes, host);
    }

    /// Echo bytes destined for the child back onto the screen: printable
    /// bytes pass through `tputc`; C0 controls other than TAB/LF/CR render
    /// as `^X` (the byte XORed with 0x40); ESC renders as `^[`.
    pub fn echo<H: TerminalHost>(&mut self, bytes: &[u8], host: &mut H) {
        for &b in bytes {
            match b {
                0x09 | 0x0A | 0x0D => self.feed_scalar(b as char, host),
                0x00..=0x1F | 0x7F => {
                    self.put_char('^', host);
                    self.put_char((b ^ 0x40) as char, host);
                }
                _ => self.feed_scalar(b as char, host),
            }
        }
    }

    pub fn mouse_report<H: TerminalHost>(
        &mut self,
        pos: Coord,
        kind: MouseEventKind,
        button: MouseButton,
        mods: MouseMods,
        host: &mut H,
    ) {
        if let Some(bytes) = self.mouse.report(self.mode, pos, kind, button, mods) {
            let _ = host.write_to_pty(&bytes);
        }
    }

    // ---- the per-scalar state machine (spec.md 4.2.1) ---------------

    fn feed_scalar<H: TerminalHost>(&mut self, c: char, host: &mut H) {
        let state = std::mem::replace(&mut self.state, ParserState::Ground);

        // Rule 1: mid string-escape accumulation.
        let state = if let ParserState::Str(mut accum) = state {
            match c {
                '\u{1b}' => self.state = ParserState::StrEnd(accum),
                '\u{7}' => {
                    osc::dispatch(self, host, &accum);
                    self.state = ParserState::Ground;
                }
                _ => {
                    if accum.buf.len() < 640 {
                        accum.buf.push(c);
                    }
                    self.state = ParserState::Str(accum);
                }
            }
            return;
        } else {
            state
        };
        self.state = state;

        // Rule 2: C0 controls apply regardless of an in-progress (non-Str)
        // escape sequence, and leave that sequence untouched unless the
        // control is itself ESC/CAN/SUB.
        if (c as u32) < 0x20 || c == '\u{7f}' {
            self.handle_c0(c, host);
            return;
        }

        // Rule 3: mid non-Str escape sequence.
        match std::mem::replace(&mut self.state, ParserState::Ground) {
            ParserState::Ground => {
                // Rule 4: ordinary printable scalar.
                self.put_char(c, host);
            }
            ParserState::EscStart => self.handle_esc_start(c, host),
            ParserState::Csi(mut accum) => {
                let b = (c as u32 & 0xff) as u8;
                if (0x40..=0x7e).contains(&b) {
                    accum.finish();
                    csi::dispatch(self, host, &accum, b as char);
                } else if accum.push_byte(b) {
                    self.state = ParserState::Csi(accum);
                } else {
                    // Accumulator overflow (§7 class 2): `csiparse`/
                    // `csihandle` treat a full buffer exactly as if the
                    // current byte were the final byte — dispatch right
                    // away with whatever was accumulated so far, using the
                    // overflowing byte itself as the (typically
                    // unrecognized, logged-and-ignored) final byte, then
                    // fall back to ground. This abandons the sequence
                    // without ever printing its bytes to the screen.
                    accum.finish();
                    csi::dispatch(self, host, &accum, b as char);
                }
            }
            ParserState::StrEnd(accum) => {
                if c == '\\' {
                    osc::dispatch(self, host, &accum);
                }
                // esc is always cleared, dispatched or not.
            }
            ParserState::AltCharset => {
                match c {
                    '0' => self.cursor.pen = self.cursor.pen.with_gfx(true),
                    'B' => self.cursor.pen = self.cursor.pen.with_gfx(false),
                    _ => {}
                }
            }
            ParserState::Test => {
                if c == '8' {
                    self.decaln();
                }
            }
            ParserState::Str(_) => unreachable!("handled in rule 1"),
        }
    }

    fn handle_c0<H: TerminalHost>(&mut self, c: char, host: &mut H) {
        match c as u32 {
            0x09 => self.tab_forward(1),
            0x08 => self.move_rel(-1, 0),
            0x0d => {
                self.cursor.pos.x = 0;
                self.cursor.wrapnext = false;
            }
            0x0a | 0x0b | 0x0c => self.newline(self.mode.contains(TermMode::CRLF)),
            0x07 => host.set_urgent(true),
            0x1b => {
                self.state = ParserState::EscStart;
            }
            0x0e | 0x0f => {}
            0x18 | 0x1a => self.state = ParserState::Ground,
            0x00 | 0x05 | 0x11 | 0x13 | 0x7f => {}
            _ => {}
        }
    }

    fn handle_esc_start<H: TerminalHost>(&mut self, c: char, host: &mut H) {
        match c {
            '[' => self.state = ParserState::Csi(CsiAccum::new()),
            '#' => self.state = ParserState::Test,
            'P' | '_' | '^' | ']' | 'k' => {
                let kind = StrKind::from_opening_byte(c as u8).expect("matched above");
                self.state = ParserState::Str(StrAccum::new(kind));
            }
            '(' => self.state = ParserState::AltCharset,
            ')' | '*' | '+' => {}
            'D' => self.index_down(),
            'E' => self.newline(true),
            'H' => self.set_tab_at_cursor(),
            'M' => self.reverse_index(),
            'Z' => {
                let _ = host.write_to_pty(VT102_REPLY);
            }
            'c' => self.full_reset(host),
            '=' => self.mode.insert(TermMode::APPKEYPAD),
            '>' => self.mode.remove(TermMode::APPKEYPAD),
            '7' => self.save_cursor(),
            '8' => self.restore_cursor(),
            '\\' => {}
            other => {
                crate::debug!("erresc: unknown esc sequence ESC {:?}", other);
            }
        }
    }

    // ---- screen ops (spec.md 4.1) ------------------------------------

    /// The central write path: `tputc`.
    pub(crate) fn put_char<H: TerminalHost>(&mut self, c: char, host: &mut H) {
        let _ = host;
        if self.mode.contains(TermMode::WRAP) && self.cursor.wrapnext {
            self.newline(true);
        }
        if self.mode.contains(TermMode::INSERT) {
            self.insert_blank(1);
        }
        let printed = if self.cursor.pen.gfx() {
            charset::translate(c)
        } else {
            c
        };
        let pos = self.cursor.pos;
        let style = self.cursor.pen;
        self.selection.invalidate_if_touched(pos.y);
        self.screen_mut().set_cell(pos, Glyph { c: printed, style });
        if self.cursor.pos.x + 1 < self.cols() {
            self.cursor.pos.x += 1;
            self.cursor.wrapnext = false;
        } else {
            self.cursor.wrapnext = true;
        }
    }

    pub(crate) fn clear_region(&mut self, p1: Coord, p2: Coord) {
        let style = self.cursor.pen;
        self.screen_mut().clear_region(p1, p2, style);
    }

    pub(crate) fn clear_line(&mut self, y: usize, x0: usize, x1: usize) {
        let style = self.cursor.pen;
        self.screen_mut().clear_line(y, x0, x1, style);
    }

    pub(crate) fn scroll_up(&mut self, top: usize, bot: usize, n: usize) {
        let n = n.min(bot + 1 - top);
        let style = self.cursor.pen;
        self.screen_mut().scroll_up(top, bot, n, style);
        self.selection.scroll(top, bot, -(n as isize), self.cols());
    }

    pub(crate) fn scroll_down(&mut self, top: usize, bot: usize, n: usize) {
        let n = n.min(bot + 1 - top);
        let style = self.cursor.pen;
        self.screen_mut().scroll_down(top, bot, n, style);
        self.selection.scroll(top, bot, n as isize, self.cols());
    }

    pub(crate) fn insert_blank(&mut self, n: usize) {
        let y = self.cursor.pos.y;
        let x = self.cursor.pos.x;
        let cols = self.cols();
        let style = self.cursor.pen;
        let n = n.min(cols - x);
        let row = self.screen_mut().row_mut(y);
        let cells = row.cells().to_vec();
        let dest = self.screen_mut();
        for i in (x..cols).rev() {
            let g = if i >= x + n {
                cells[i - n]
            } else {
                Glyph::blank(style)
            };
            dest.set_cell(Coord::new(i, y), g);
        }
    }

    pub(crate) fn delete_chars(&mut self, n: usize) {
        let y = self.cursor.pos.y;
        let x = self.cursor.pos.x;
        let cols = self.cols();
        let style = self.cursor.pen;
        let n = n.min(cols - x);
        let row = self.screen_mut().row_mut(y);
        let cells = row.cells().to_vec();
        let dest = self.screen_mut();
        for i in x..cols {
            let g = if i + n < cols {
                cells[i + n]
            } else {
                Glyph::blank(style)
            };
            dest.set_cell(Coord::new(i, y), g);
        }
    }

    pub(crate) fn erase_chars(&mut self, n: usize) {
        let y = self.cursor.pos.y;
        let x0 = self.cursor.pos.x;
        let x1 = (x0 + n).min(self.cols());
        self.clear_line(y, x0, x1);
    }

    pub(crate) fn insert_lines(&mut self, n: usize) {
        if self.cursor.pos.y < self.top || self.cursor.pos.y > self.bot {
            return;
        }
        let orig = self.cursor.pos.y;
        self.scroll_down(orig, self.bot, n);
    }

    pub(crate) fn delete_lines(&mut self, n: usize) {
        if self.cursor.pos.y < self.top || self.cursor.pos.y > self.bot {
            return;
        }
        let orig = self.cursor.pos.y;
        self.scroll_up(orig, self.bot, n);
    }

    // ---- cursor motion (spec.md 4.1) ---------------------------------

    pub(crate) fn move_to(&mut self, x: usize, y: usize) {
        self.cursor.wrapnext = false;
        let (lo, hi) = if self.cursor.origin {
            (self.top, self.bot)
        } else {
            (0, self.rows() - 1)
        };
        self.cursor.pos.x = x.min(self.cols() - 1);
        self.cursor.pos.y = y.clamp(lo, hi);
    }

    pub(crate) fn move_to_origin_relative(&mut self, x: usize, y: usize) {
        let base_y = if self.cursor.origin { self.top } else { 0 };
        self.move_to(x, base_y + y);
    }

    pub(crate) fn move_rel(&mut self, dx: isize, dy: isize) {
        self.cursor.wrapnext = false;
        let x = (self.cursor.pos.x as isize + dx).clamp(0, self.cols() as isize - 1) as usize;
        let (lo, hi) = if self.cursor.origin {
            (self.top as isize, self.bot as isize)
        } else {
            (0, self.rows() as isize - 1)
        };
        let y = (self.cursor.pos.y as isize + dy).clamp(lo, hi) as usize;
        self.cursor.pos.x = x;
        self.cursor.pos.y = y;
    }

    fn clamp_cursor(&mut self) {
        let (cols, rows) = (self.cols(), self.rows());
        self.cursor.pos.x = self.cursor.pos.x.min(cols - 1);
        self.cursor.pos.y = self.cursor.pos.y.min(rows - 1);
    }

    /// IND (`ESC D` / CSI behavior shared with newline): cursor down,
    /// scrolling the region up if already at the bottom.
    pub(crate) fn index_down(&mut self) {
        if self.cursor.pos.y == self.bot {
            self.scroll_up(self.top, self.bot, 1);
        } else if self.cursor.pos.y + 1 < self.rows() {
            self.cursor.pos.y += 1;
        }
        self.cursor.wrapnext = false;
    }

    /// RI (`ESC M`): cursor up, scrolling the region down if at the top.
    pub(crate) fn reverse_index(&mut self) {
        if self.cursor.pos.y == self.top {
            self.scroll_down(self.top, self.bot, 1);
        } else if self.cursor.pos.y > 0 {
            self.cursor.pos.y -= 1;
        }
        self.cursor.wrapnext = false;
    }

    /// NEL / LF/VT/FF: move to column 0 (if `force_col0` or CRLF mode) and
    /// index down.
    pub(crate) fn newline(&mut self, force_col0: bool) {
        if force_col0 {
            self.cursor.pos.x = 0;
        }
        self.index_down();
    }

    pub(crate) fn tab_forward(&mut self, mut n: usize) {
        let cols = self.cols();
        while n > 0 && self.cursor.pos.x + 1 < cols {
            self.cursor.pos.x += 1;
            if self.tabs[self.cursor.pos.x] {
                n -= 1;
            }
        }
    }

    pub(crate) fn tab_backward(&mut self, mut n: usize) {
        while n > 0 && self.cursor.pos.x > 0 {
            self.cursor.pos.x -= 1;
            if self.tabs[self.cursor.pos.x] {
                n -= 1;
            }
        }
    }

    pub(crate) fn set_tab_at_cursor(&mut self) {
        let x = self.cursor.pos.x;
        self.tabs[x] = true;
    }

    pub(crate) fn clear_tab_at_cursor(&mut self) {
        let x = self.cursor.pos.x;
        self.tabs[x] = false;
    }

    pub(crate) fn clear_all_tabs(&mut self) {
        for t in &mut self.tabs {
            *t = false;
        }
    }

    pub(crate) fn set_scroll_region(&mut self, top: usize, bot: usize) {
        if top < bot {
            self.top = top;
            self.bot = bot.min(self.rows() - 1);
        } else {
            self.top = 0;
            self.bot = self.rows() - 1;
        }
        self.move_to_origin_relative(0, 0);
    }

    pub(crate) fn set_sgr(&mut self, style: Style) {
        self.cursor.pen = style;
    }

    pub(crate) fn mode_mut(&mut self) -> &mut TermMode {
        &mut self.mode
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// DECALN (`ESC # 8`): fill the whole active screen with `E`.
    fn decaln(&mut self) {
        let cols = self.cols();
        let rows = self.rows();
        let screen = self.screen_mut();
        for y in 0..rows {
            for x in 0..cols {
                screen.set_cell(Coord::new(x, y), Glyph { c: 'E', style: Style::default() });
            }
        }
    }

    /// RIS (`ESC c`): full reset. Grounds `treset` exactly, including
    /// clearing only the active screen and re-taking a cursor-save
    /// snapshot at the end.
    pub(crate) fn full_reset<H: TerminalHost>(&mut self, host: &mut H) {
        self.cursor = Cursor::default();
        // `treset` never assigns `term->numlock`; preserve it across the
        // reset instead of letting `TermMode::default()` drop it.
        let numlock = self.mode.contains(TermMode::NUMLOCK);
        self.mode = TermMode::default();
        self.mode.set(TermMode::NUMLOCK, numlock);
        self.top = 0;
        self.bot = self.rows() - 1;
        seed_tabs(&mut self.tabs);
        let (cols, rows) = (self.cols(), self.rows());
        self.clear_region(Coord::new(0, 0), Coord::new(cols, rows));
        self.saved_cursor = self.cursor;
        self.selection.stop();
        host.set_title(None);
    }

    /// Exchange the primary/alternate screen handles. `clear_alt` clears
    /// the alternate screen (with the cursor's current pen) before the
    /// swap happens, matching private modes 1047/1049's exit-time clear.
    pub(crate) fn swap_screen(&mut self, clear_alt: bool) {
        if clear_alt {
            let style = self.cursor.pen;
            let (cols, rows) = (self.alternate.cols(), self.alternate.rows());
            self.alternate
                .clear_region(Coord::new(0, 0), Coord::new(cols, rows), style);
        }
        self.altscreen = !self.altscreen;
        self.selection.stop();
        self.screen_mut().mark_all_dirty();
    }

    pub(crate) fn is_altscreen(&self) -> bool {
        self.altscreen
    }

    pub(crate) fn save_cursor(&mut self) {
        self.saved_cursor = self.cursor;
    }

    pub(crate) fn restore_cursor(&mut self) {
        self.cursor = self.saved_cursor;
        self.clamp_cursor();
    }

    pub(crate) fn mark_full_dirty(&mut self) {
        self.screen_mut().mark_all_dirty();
    }

    // ---- resize (spec.md 4.5) ----------------------------------------

    pub fn resize<H: TerminalHost>(
        &mut self,
        cols: usize,
        rows: usize,
        pixel_w: u16,
        pixel_h: u16,
        host: &mut H,
    ) {
        let old_cols = self.cols();
        let cursor_y = self.cursor.pos.y;
        let slide = (cursor_y as isize - rows as isize + 1).max(0) as usize;
        let blank = Glyph::blank(self.cursor.pen);

        for screen in [&mut self.primary, &mut self.alternate] {
            if slide > 0 {
                screen.remove_front_rows(slide);
            }
            if screen.rows() > rows {
                screen.truncate_rows(rows);
            }
            screen.resize_cols(cols, blank);
            while screen.rows() < rows {
                screen.push_row(blank);
            }
        }
        if slide > 0 {
            self.cursor.pos.y -= slide;
        }

        if cols > old_cols {
            self.tabs.resize(cols, false);
            for t in self.tabs.iter_mut().skip(old_cols) {
                *t = false;
            }
            let last_stop = (0..old_cols).rev().find(|&x| self.tabs[x]);
            let mut x = last_stop.unwrap_or(0) + TAB_WIDTH;
            while x < cols {
                self.tabs[x] = true;
                x += TAB_WIDTH;
            }
        } else {
            self.tabs.truncate(cols);
        }

        self.top = 0;
        self.bot = rows - 1;
        self.clamp_cursor();
        host.pty_resize(rows as u16, cols as u16, pixel_w, pixel_h);
    }
}

fn seed_tabs(tabs: &mut [bool]) {
    for t in tabs.iter_mut() {
        *t = false;
    }
    let mut x = TAB_WIDTH;
    while x < tabs.len() {
        tabs[x] = true;
        x += TAB_WIDTH;
    }
}
