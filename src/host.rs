//! The host contract: everything the core needs from the outside world,
//! modeled directly on `term.h`'s `settitle`/`setcolorname`/`seturgent`
//! function pointers plus the PTY write-back path `ttywrite` provides.
//!
//! The core never owns a PTY file descriptor, a window, or a renderer; it
//! only calls out through this trait.

use failure::Error;

pub trait TerminalHost {
    /// `None` means "restore the host's default title" (OSC 0/1/2 with an
    /// empty argument).
    fn set_title(&mut self, title: Option<&str>);

    /// OSC 4 (set) / 104 (reset, `name = None`). `index = None` is
    /// `strhandle`'s `-1` sentinel, passed to `setcolorname` when OSC 104
    /// is given no index argument: reset the whole palette in one call,
    /// rather than this crate looping over every index itself. Returns
    /// whether the host accepted the color; on `Ok(false)` the core logs
    /// and leaves the prior color in place.
    fn set_color_name(&mut self, index: Option<u16>, name: Option<&str>) -> Result<bool, Error>;

    /// BEL (`\a`) received.
    fn set_urgent(&mut self, on: bool);

    /// Write bytes back to the child: keystrokes, CSI replies (DA/DECID),
    /// mouse reports. Subsumes `ttywrite`.
    fn write_to_pty(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Notify the host that the window size changed, so it can issue
    /// `ioctl(TIOCSWINSZ)` on the PTY. Pixel dimensions may be `0` if
    /// unknown.
    fn pty_resize(&mut self, rows: u16, cols: u16, pixel_w: u16, pixel_h: u16);
}
