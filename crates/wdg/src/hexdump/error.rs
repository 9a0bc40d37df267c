//! Hex-dump lexer error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexDumpError {
    /// An alphanumeric run that is not `0x` followed by exactly two hex
    /// digits. `column` is the first character deviating from that shape.
    #[error("invalid hex token `{found}` at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        found: String,
    },
}
