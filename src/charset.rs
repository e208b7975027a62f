//! DEC Special Graphics ("line drawing") charset.
//!
//! Ports `tsetchar`'s `vt100_0` table: a 62-entry map from ASCII
//! `0x41..=0x7e` to the rxvt/xterm line-drawing glyphs. Entries that the
//! original table leaves as `0` pass the input character through
//! unchanged.

const FIRST: u8 = 0x41; // 'A'
const LAST: u8 = 0x7e; // '~'

const TABLE: [Option<char>; (LAST - FIRST + 1) as usize] = [
    Some('\u{2191}'), // A  ↑
    Some('\u{2193}'), // B  ↓
    Some('\u{2192}'), // C  →
    Some('\u{2190}'), // D  ←
    Some('\u{2588}'), // E  █
    Some('\u{259a}'), // F  ▚
    Some('\u{2603}'), // G  ☃
    None,             // H
    None,             // I
    None,             // J
    None,             // K
    None,             // L
    None,             // M
    None,             // N
    None,             // O
    None,             // P
    None,             // Q
    None,             // R
    None,             // S
    None,             // T
    None,             // U
    None,             // V
    None,             // W
    None,             // X
    None,             // Y
    None,             // Z
    None,             // [
    None,             // \
    None,             // ]
    None,             // ^
    Some(' '),        // _
    Some('\u{25c6}'), // `  ◆
    Some('\u{2592}'), // a  ▒
    Some('\u{2409}'), // b  ␉
    Some('\u{240c}'), // c  ␌
    Some('\u{240d}'), // d  ␍
    Some('\u{240a}'), // e  ␊
    Some('\u{00b0}'), // f  °
    Some('\u{00b1}'), // g  ±
    Some('\u{2424}'), // h  ␤
    Some('\u{240b}'), // i  ␋
    Some('\u{2518}'), // j  ┘
    Some('\u{2510}'), // k  ┐
    Some('\u{250c}'), // l  ┌
    Some('\u{2514}'), // m  └
    Some('\u{253c}'), // n  ┼
    Some('\u{23ba}'), // o  ⎺
    Some('\u{23bb}'), // p  ⎻
    Some('\u{2500}'), // q  ─
    Some('\u{23bc}'), // r  ⎼
    Some('\u{23bd}'), // s  ⎽
    Some('\u{251c}'), // t  ├
    Some('\u{2524}'), // u  ┤
    Some('\u{2534}'), // v  ┴
    Some('\u{252c}'), // w  ┬
    Some('\u{2502}'), // x  │
    Some('\u{2264}'), // y  ≤
    Some('\u{2265}'), // z  ≥
    Some('\u{03c0}'), // {  π
    Some('\u{2260}'), // |  ≠
    Some('\u{00a3}'), // }  £
    Some('\u{00b7}'), // ~  ·
];

/// Map a printed character through the DEC Special Graphics charset when
/// the current glyph's `gfx` style bit is set. Characters with no mapping
/// pass through unchanged.
pub fn translate(c: char) -> char {
    if let Ok(b) = u8::try_from(c as u32) {
        if b >= FIRST && b <= LAST {
            if let Some(mapped) = TABLE[(b - FIRST) as usize] {
                return mapped;
            }
        }
    }
    c
}
