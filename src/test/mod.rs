//! Shared test harness: a recording [`TerminalHost`] and a thin [`Term`]
//! wrapper with assertion helpers, used by every file under this module.

use crate::cursor::Coord;
use crate::host::TerminalHost;
use crate::term::Term;
use failure::Error;

mod c0;
mod osc;
mod resize;
mod selection;
mod sgr;

#[derive(Default)]
pub struct TestHost {
    pub title: Option<String>,
    pub urgent: bool,
    pub written: Vec<u8>,
    pub colors: Vec<(Option<u16>, Option<String>)>,
    pub resizes: Vec<(u16, u16, u16, u16)>,
}

impl TerminalHost for TestHost {
    fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_owned);
    }

    fn set_color_name(&mut self, index: Option<u16>, name: Option<&str>) -> Result<bool, Error> {
        self.colors.push((index, name.map(str::to_owned)));
        Ok(true)
    }

    fn set_urgent(&mut self, on: bool) {
        self.urgent = on;
    }

    fn write_to_pty(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.written.extend_from_slice(bytes);
        Ok(())
    }

    fn pty_resize(&mut self, rows: u16, cols: u16, pixel_w: u16, pixel_h: u16) {
        self.resizes.push((rows, cols, pixel_w, pixel_h));
    }
}

pub struct TestTerm {
    pub term: Term,
    pub host: TestHost,
}

impl TestTerm {
    pub fn new(cols: usize, rows: usize) -> Self {
        TestTerm {
            term: Term::new(cols, rows),
            host: TestHost::default(),
        }
    }

    pub fn feed(&mut self, s: &str) {
        self.term.advance_bytes(s.as_bytes(), &mut self.host);
    }

    pub fn feed_bytes(&mut self, bytes: &[u8]) {
        self.term.advance_bytes(bytes, &mut self.host);
    }

    pub fn assert_cursor_pos(&self, x: usize, y: usize) {
        let pos = self.term.cursor().pos;
        assert_eq!(
            (pos.x, pos.y),
            (x, y),
            "expected cursor at ({}, {}), got ({}, {})",
            x,
            y,
            pos.x,
            pos.y
        );
    }

    pub fn assert_dirty_lines(&self, expected: &[usize]) {
        assert_eq!(self.term.screen().dirty_lines(), expected);
    }

    /// Render row `y` as a plain string, `'\0'` cells included verbatim so
    /// callers can tell a never-written cell from a typed space.
    pub fn row_text(&self, y: usize) -> String {
        self.term.screen().row(y).cells().iter().map(|g| g.c).collect()
    }

    /// Assert that row `y` reads as `expected` once trailing blank
    /// sentinels are trimmed (the shape a host would actually paint).
    pub fn assert_visible_contents(&self, y: usize, expected: &str) {
        let text = self.row_text(y);
        let trimmed = text.trim_end_matches('\0');
        assert_eq!(trimmed, expected, "row {} mismatch", y);
    }

    pub fn cell(&self, x: usize, y: usize) -> crate::glyph::Glyph {
        self.term.screen().cell(Coord::new(x, y))
    }
}
