//! A VT102/xterm-compatible terminal emulator core: a two-buffer screen
//! model, an escape-sequence interpreter, and a selection tracker, driven
//! by raw bytes from a child process and reporting back through a small
//! [`TerminalHost`] trait. No PTY, no rendering: those are the host's job.

#[macro_use]
mod debug;

pub mod charset;
pub mod color;
pub mod cursor;
mod csi;
pub mod glyph;
pub mod host;
pub mod mode;
pub mod mouse;
mod osc;
pub mod parser;
pub mod screen;
pub mod selection;
mod term;
pub mod utf8;

pub use color::{ColorIndex, DEFAULT_BG, DEFAULT_FG};
pub use cursor::{Coord, Cursor};
pub use glyph::{Glyph, Style};
pub use host::TerminalHost;
pub use mode::TermMode;
pub use mouse::{MouseButton, MouseEventKind, MouseMods};
pub use screen::{Row, Screen};
pub use selection::{Selection, SelectionType};
pub use term::{Term, TAB_WIDTH, VT102_REPLY};

#[cfg(test)]
mod test;
