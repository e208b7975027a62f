//! Incremental UTF-8 decoder: feeds complete scalars to a callback as they
//! become available, holding an incomplete trailing sequence across calls
//! (mirrors `term_read`'s use of the UTF-8 decoder across successive PTY
//! reads).

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Utf8Decoder::default()
    }

    /// Decode as many complete scalars as possible out of `bytes` (plus any
    /// carried-over prefix), invoking `emit` for each. An invalid leading
    /// byte yields itself as the scalar and is consumed alone; a valid but
    /// incomplete trailing sequence is kept for the next call.
    pub fn feed(&mut self, bytes: &[u8], mut emit: impl FnMut(char)) {
        self.pending.extend_from_slice(bytes);

        loop {
            if self.pending.is_empty() {
                return;
            }
            match std::str::from_utf8(&self.pending) {
                Ok(s) => {
                    for c in s.chars() {
                        emit(c);
                    }
                    self.pending.clear();
                    return;
                }
                Err(e) => {
                    let valid_up_to = e.valid_up_to();
                    if valid_up_to > 0 {
                        let s = std::str::from_utf8(&self.pending[..valid_up_to])
                            .expect("validated by valid_up_to");
                        for c in s.chars() {
                            emit(c);
                        }
                    }
                    match e.error_len() {
                        None => {
                            // Incomplete sequence at the end: keep it for the next feed.
                            self.pending.drain(..valid_up_to);
                            return;
                        }
                        Some(_) => {
                            let bad = self.pending[valid_up_to];
                            emit(bad as char);
                            self.pending.drain(..=valid_up_to);
                        }
                    }
                }
            }
        }
    }
}

/// Encode `c` as UTF-8 bytes appended to `out`. Used for clip extraction
/// and PTY echo.
pub fn encode_char(c: char, out: &mut Vec<u8>) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii() {
        let mut d = Utf8Decoder::new();
        let mut out = Vec::new();
        d.feed(b"abc", |c| out.push(c));
        assert_eq!(out, vec!['a', 'b', 'c']);
    }

    #[test]
    fn holds_incomplete_sequence_across_calls() {
        let mut d = Utf8Decoder::new();
        let mut out = Vec::new();
        // 'é' is 0xC3 0xA9; feed the lead byte alone first.
        d.feed(&[0xC3], |c| out.push(c));
        assert!(out.is_empty());
        d.feed(&[0xA9, b'B'], |c| out.push(c));
        assert_eq!(out, vec!['\u{e9}', 'B']);
    }

    #[test]
    fn invalid_leading_byte_yields_itself() {
        let mut d = Utf8Decoder::new();
        let mut out = Vec::new();
        d.feed(&[0xFF, b'A'], |c| out.push(c));
        assert_eq!(out, vec![0xFFu32 as u8 as char, 'A']);
    }

    #[test]
    fn encode_round_trips_through_decode() {
        let mut bytes = Vec::new();
        encode_char('\u{2603}', &mut bytes);
        let mut d = Utf8Decoder::new();
        let mut out = Vec::new();
        d.feed(&bytes, |c| out.push(c));
        assert_eq!(out, vec!['\u{2603}']);
    }
}
