//! Text report rendering for decoded GUID blocks.

use std::fmt::{self, Write};

use super::block::{blocks, GuidBlock};
use super::flags::flag_names;
use super::guid::format_guid;

/// Writes the report block for one GUID mapping.
///
/// Both views of the overlaid two-byte field are printed, since the record
/// format carries no discriminant to pick one.
pub fn write_block<W: Write>(out: &mut W, block: &GuidBlock) -> fmt::Result {
    let [c0, c1] = block.object_id();
    writeln!(out, "{}:", format_guid(block.guid()))?;
    writeln!(out, "\tobject_id: {c0}{c1}")?;
    writeln!(out, "\tnotify_id: {:02X}", block.notify_id())?;
    writeln!(out, "\treserved: {:02X}", block.reserved())?;
    writeln!(out, "\tinstance_count: {}", block.instance_count())?;
    write!(out, "\tflags: {:#x}", block.flags())?;
    for name in flag_names(block.flags()) {
        write!(out, " {name}")?;
    }
    writeln!(out)
}

/// Renders the report for a whole decoded buffer, one block per record.
pub fn render_report(data: &[u8]) -> String {
    let mut out = String::new();
    for block in blocks(data) {
        write_block(&mut out, &block).expect("writing to a String cannot fail");
    }
    out
}
