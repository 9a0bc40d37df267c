//! Text-to-bytes lexing of hex dumps.

pub mod decoder;
pub mod error;

pub use decoder::{decode_hex_dump, HexDumpDecoder};
pub use error::HexDumpError;
