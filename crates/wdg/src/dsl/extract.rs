//! Extraction of WMI buffers from decompiled DSDT sources.
//!
//! A decompiled table declares the mapping data as
//! `Name (_WDG, Buffer (0x..) { /* offsets */ 0x.., ... })`; compressed
//! query data lives in sibling `WQxx` buffers of the same shape.

use regex::Regex;

use crate::hexdump::{decode_hex_dump, HexDumpError};

/// Buffer name pattern for the WMI mapping block.
pub const WDG_NAME: &str = "_WDG";
/// Buffer name pattern for compressed WMI query data blocks.
pub const WQ_NAME: &str = "WQ[A-Z]{2}";

/// One `Name (<name>, Buffer (<len>) { ... })` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DslBuffer {
    /// Buffer name as it appears in the source.
    pub name: String,
    /// Length the declaration claims; informational only, the real byte
    /// count comes from lexing the payload.
    pub declared_len: usize,
    /// Raw brace payload: hex literals, commas, offset comments.
    pub text: String,
}

impl DslBuffer {
    /// Lexes the brace payload into its byte values.
    pub fn decode_payload(&self) -> Result<Vec<u8>, HexDumpError> {
        decode_hex_dump(self.text.as_bytes())
    }
}

/// Finds every `Name (<name>, Buffer (<len>) { ... })` block in `source`
/// whose name matches the `name_pattern` regex fragment.
///
/// Matches are returned in source order. The declared length token may be
/// hex (`0x..`) or decimal.
pub fn find_buffers(name_pattern: &str, source: &str) -> Result<Vec<DslBuffer>, regex::Error> {
    let pattern = format!(
        r"(?s)Name\s*\(({name_pattern}),\s*Buffer\s*\((0x[0-9A-Fa-f]+|[0-9]+)\)\s*\{{(.*?)\}}\s*\)"
    );
    let re = Regex::new(&pattern)?;
    Ok(re
        .captures_iter(source)
        .map(|caps| DslBuffer {
            name: caps[1].to_string(),
            declared_len: parse_len(&caps[2]),
            text: caps[3].to_string(),
        })
        .collect())
}

fn parse_len(token: &str) -> usize {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => token.parse(),
    };
    // the regex admits only digit runs; an overflowing length is bogus anyway
    parsed.unwrap_or(0)
}
