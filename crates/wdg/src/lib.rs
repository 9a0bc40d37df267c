//! Decoding of ACPI WMI `_WDG` hex dumps.
//!
//! Firmware exposes its WMI mappings as a `_WDG` buffer: an array of
//! packed 20-byte GUID blocks. Decompiled tables carry that buffer as
//! commented hex text. This crate lexes such text into bytes, decodes the
//! byte buffer into zero-copy block views, and renders a readable report;
//! the `dsl` module locates the buffers inside a whole decompiled DSDT.

pub mod dsl;
pub mod hexdump;
pub mod wdg;

pub use dsl::{find_buffers, DslBuffer, WDG_NAME, WQ_NAME};
pub use hexdump::{decode_hex_dump, HexDumpDecoder, HexDumpError};
pub use wdg::{
    blocks, flag_names, format_guid, render_report, write_block, GuidBlock, GUID_BLOCK_SIZE,
    GUID_SIZE,
};

#[cfg(test)]
mod tests {
    use super::*;

    // 20 bytes: one full mapping block with zero flags
    const VECTOR: &str = "0x2B 0xFF 0x50 0xFA 0xE8 0xF2 0xDE 0x45 0xFA 0x83 0x41 0x65 \
                          0x2F 0x7F 0x2F 0x49 0x4F 0x42 0x01 0x00";

    #[test]
    fn end_to_end_single_block() {
        let data = decode_hex_dump(VECTOR.as_bytes()).unwrap();
        assert_eq!(data.len(), GUID_BLOCK_SIZE);

        let decoded: Vec<GuidBlock> = blocks(&data).collect();
        assert_eq!(decoded.len(), 1);
        let block = &decoded[0];
        assert_eq!(
            format_guid(block.guid()),
            "FA50FF2B-F2E8-45DE-FA83-41652F7F2F49"
        );
        assert_eq!(block.object_id(), ['O', 'B']);
        assert_eq!(block.notify_id(), 0x4f);
        assert_eq!(block.reserved(), 0x42);
        assert_eq!(block.instance_count(), 1);
        assert_eq!(block.flags(), 0x00);
        assert_eq!(flag_names(block.flags()), Vec::<&str>::new());
    }

    #[test]
    fn end_to_end_report_text() {
        let data = decode_hex_dump(VECTOR.as_bytes()).unwrap();
        assert_eq!(
            render_report(&data),
            "FA50FF2B-F2E8-45DE-FA83-41652F7F2F49:\n\
             \tobject_id: OB\n\
             \tnotify_id: 4F\n\
             \treserved: 42\n\
             \tinstance_count: 1\n\
             \tflags: 0x0\n"
        );
    }

    #[test]
    fn trailing_partial_block_is_silently_dropped() {
        let text = format!("{VECTOR} 0x11 0x22 0x33");
        let data = decode_hex_dump(text.as_bytes()).unwrap();
        assert_eq!(data.len(), GUID_BLOCK_SIZE + 3);
        assert_eq!(blocks(&data).count(), 1);
    }

    #[test]
    fn lex_error_aborts_before_decoding() {
        let text = format!("{VECTOR} 0xQQ");
        let err = decode_hex_dump(text.as_bytes()).unwrap_err();
        assert!(matches!(err, HexDumpError::InvalidToken { .. }));
    }

    #[test]
    fn dsl_to_report_pipeline() {
        let source = format!(
            "Name (_WDG, Buffer (0x14)\n{{\n    /* header */ {VECTOR}\n}})"
        );
        let found = find_buffers(WDG_NAME, &source).unwrap();
        assert_eq!(found.len(), 1);
        let data = found[0].decode_payload().unwrap();
        let report = render_report(&data);
        assert!(report.starts_with("FA50FF2B-F2E8-45DE-FA83-41652F7F2F49:"));
    }

    #[test]
    fn commented_out_vector_produces_no_report() {
        let text = format!("/* {VECTOR} */");
        let data = decode_hex_dump(text.as_bytes()).unwrap();
        assert!(data.is_empty());
        assert_eq!(render_report(&data), "");
    }
}
