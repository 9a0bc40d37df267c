//! Strict hex-dump lexer.
//!
//! Consumes the textual buffer dumps produced by firmware table tools:
//! `0xHH` literals separated by arbitrary whitespace or punctuation, with
//! `/* ... */` block comments and `// ...` line comments mixed in.

use super::error::HexDumpError;

/// Single-pass lexer turning hex-dump text into its byte values.
///
/// Block comments are tracked with a plain depth counter, not a stack:
/// while a comment is open only its terminator is recognized, and a stray
/// `*/` drives the counter negative so that the next `/*` cancels it
/// instead of opening a comment.
///
/// # Example
///
/// ```
/// use wmidump_wdg::hexdump::HexDumpDecoder;
///
/// let mut decoder = HexDumpDecoder::new();
/// let bytes = decoder.decode(b"/* offset 0 */ 0x12, 0x34").unwrap();
/// assert_eq!(bytes, [0x12, 0x34]);
/// ```
pub struct HexDumpDecoder {
    depth: i32,
    line: usize,
    column: usize,
}

impl Default for HexDumpDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HexDumpDecoder {
    pub fn new() -> Self {
        Self {
            depth: 0,
            line: 1,
            column: 1,
        }
    }

    /// Decodes one whole document into its byte values.
    ///
    /// Fails on the first alphanumeric run that is not a well-formed
    /// `0xHH` token. An unterminated block comment at end of input is not
    /// an error; neither is an empty or all-comment document.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<u8>, HexDumpError> {
        self.depth = 0;
        self.line = 1;
        self.column = 1;

        let mut out = Vec::new();
        let mut x = 0;
        while x < data.len() {
            if self.depth > 0 {
                // only the terminator counts inside an open comment
                if data[x] == b'*' && data.get(x + 1) == Some(&b'/') {
                    self.depth -= 1;
                    self.column += 2;
                    x += 2;
                } else {
                    self.advance(data[x]);
                    x += 1;
                }
                continue;
            }
            let ch = data[x];
            if ch == b'/' && data.get(x + 1) == Some(&b'*') {
                self.depth += 1;
                self.column += 2;
                x += 2;
                continue;
            }
            if ch == b'*' && data.get(x + 1) == Some(&b'/') {
                // stray terminator, may push the counter below zero
                self.depth -= 1;
                self.column += 2;
                x += 2;
                continue;
            }
            if ch == b'/' && data.get(x + 1) == Some(&b'/') {
                while x < data.len() && data[x] != b'\n' {
                    self.column += 1;
                    x += 1;
                }
                continue;
            }
            if ch.is_ascii_alphanumeric() {
                let start = x;
                let start_column = self.column;
                while x < data.len() && data[x].is_ascii_alphanumeric() {
                    x += 1;
                }
                let run = &data[start..x];
                self.column += run.len();
                out.push(self.token(run, start_column)?);
                continue;
            }
            self.advance(ch);
            x += 1;
        }
        Ok(out)
    }

    fn advance(&mut self, ch: u8) {
        if ch == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Validates one alphanumeric run against the `0xHH` shape.
    ///
    /// The reported column is the first character deviating from the
    /// shape; for a truncated run it is one past the run, where the
    /// missing digit was expected.
    fn token(&self, run: &[u8], start_column: usize) -> Result<u8, HexDumpError> {
        let invalid = |offset: usize| HexDumpError::InvalidToken {
            line: self.line,
            column: start_column + offset,
            found: String::from_utf8_lossy(run).into_owned(),
        };
        if run[0] != b'0' {
            return Err(invalid(0));
        }
        if run.len() < 2 || !matches!(run[1], b'x' | b'X') {
            return Err(invalid(1));
        }
        let hi = run.get(2).copied().and_then(hex_val).ok_or_else(|| invalid(2))?;
        let lo = run.get(3).copied().and_then(hex_val).ok_or_else(|| invalid(3))?;
        if run.len() > 4 {
            // a third digit would overflow the single byte
            return Err(invalid(4));
        }
        Ok((hi << 4) | lo)
    }
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

/// One-shot convenience over [`HexDumpDecoder`].
pub fn decode_hex_dump(data: &[u8]) -> Result<Vec<u8>, HexDumpError> {
    HexDumpDecoder::new().decode(data)
}
