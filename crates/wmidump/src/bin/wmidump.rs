//! Decode an ACPI WMI `_WDG` hex dump into a readable report.
//!
//! Reads the commented hex text of a `_WDG` buffer (as extracted from a
//! decompiled DSDT) and prints one block per mapping entry.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use wmidump_wdg::{blocks, decode_hex_dump, render_report, GUID_BLOCK_SIZE};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hex dump to decode; standard input when omitted.
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading standard input")?;
            buf
        }
    };

    let data = decode_hex_dump(&text)?;
    log::debug!(
        "lexed {} bytes into {} blocks ({} trailing bytes dropped)",
        data.len(),
        blocks(&data).count(),
        data.len() % GUID_BLOCK_SIZE
    );

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(render_report(&data).as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing report")?;
    Ok(())
}
