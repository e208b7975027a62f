//! Mouse report encoding: legacy X10 and SGR (mode 1006), selected by
//! `TermMode::MOUSE_SGR`. Grounds `term_mousereport`.

use crate::cursor::Coord;
use crate::mode::TermMode;

bitflags::bitflags! {
    /// Modifier bits ORed into the legacy X10 button byte; the values
    /// themselves are the wire values (`4`/`8`/`16`), not arbitrary flags.
    pub struct MouseMods: u8 {
        const SHIFT = 4;
        const META  = 8;
        const CTRL  = 16;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left = 0,
    Middle = 1,
    Right = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Press,
    Release,
    Motion,
}

/// Holds the last cell a motion report was sent for, so repeated motion
/// events over the same cell are suppressed exactly as `term_mousereport`
/// drops them (an early return, not a de-duplicated reply).
#[derive(Debug, Default)]
pub struct MouseReportState {
    last_motion: Option<Coord>,
}

impl MouseReportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the reply bytes for a mouse event, or `None` when the event
    /// should be dropped entirely: motion reporting disabled, a repeat
    /// motion into the same cell, no mouse reporting mode enabled, or (in
    /// the legacy encoding) a position too large to fit the byte form.
    pub fn report(
        &mut self,
        mode: TermMode,
        pos: Coord,
        kind: MouseEventKind,
        button: MouseButton,
        mods: MouseMods,
    ) -> Option<Vec<u8>> {
        if kind == MouseEventKind::Motion {
            if !mode.contains(TermMode::MOUSE_MOTION) {
                return None;
            }
            if self.last_motion == Some(pos) {
                return None;
            }
            self.last_motion = Some(pos);
        } else if !mode.intersects(TermMode::MOUSE_BUTTON | TermMode::MOUSE_MOTION) {
            return None;
        }

        let col = pos.x + 1;
        let row = pos.y + 1;

        if mode.contains(TermMode::MOUSE_SGR) {
            let mut code = button as u32;
            if kind == MouseEventKind::Motion {
                code += 32;
            }
            code |= mods.bits() as u32;
            let final_byte = if kind == MouseEventKind::Release { 'm' } else { 'M' };
            return Some(format!("\x1b[<{};{};{}{}", code, col, row, final_byte).into_bytes());
        }

        if col >= 223 || row >= 223 {
            return None;
        }
        let mut code: u8 = match kind {
            MouseEventKind::Release => 3,
            _ => button as u8,
        };
        if kind == MouseEventKind::Motion {
            code += 32;
        }
        code |= mods.bits();
        Some(vec![
            0x1b,
            b'[',
            b'M',
            32u8.wrapping_add(code),
            32u8.wrapping_add(col as u8),
            32u8.wrapping_add(row as u8),
        ])
    }
}
