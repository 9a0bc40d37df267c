//! Extract `_WDG` and `WQxx` buffers from a decompiled DSDT.
//!
//! Writes each buffer twice: `<name>` holds the raw hex text, `<name>.bin`
//! the lexed bytes. Repeated names get a numeric suffix, the way multiple
//! WMI devices in one table are kept apart.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use wmidump_wdg::{find_buffers, DslBuffer, WDG_NAME, WQ_NAME};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Decompiled DSDT source; standard input when omitted.
    input: Option<PathBuf>,

    /// Directory the extracted buffers are written into.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading standard input")?;
            buf
        }
    };

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut seen: HashMap<String, u32> = HashMap::new();
    let mut failed = 0usize;
    for pattern in [WDG_NAME, WQ_NAME] {
        for buffer in find_buffers(pattern, &source)? {
            if !extract(&args, &mut seen, &buffer)? {
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} buffer(s) failed to decode");
    }
    Ok(())
}

/// Writes one buffer's text and binary files; false when its payload does
/// not lex.
fn extract(args: &Args, seen: &mut HashMap<String, u32>, buffer: &DslBuffer) -> Result<bool> {
    let bytes = match buffer.decode_payload() {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("skipping {}: {err}", buffer.name);
            return Ok(false);
        }
    };

    let name = unique_name(seen, &buffer.name);
    println!("writing {} to {name} and {name}.bin", buffer.name);

    let text_path = args.output.join(&name);
    fs::write(&text_path, buffer.text.trim())
        .with_context(|| format!("writing {}", text_path.display()))?;

    let bin_path = args.output.join(format!("{name}.bin"));
    fs::write(&bin_path, &bytes).with_context(|| format!("writing {}", bin_path.display()))?;
    Ok(true)
}

/// First occurrence keeps its name, later ones get `name1`, `name2`, ...
fn unique_name(seen: &mut HashMap<String, u32>, name: &str) -> String {
    let count = seen.entry(name.to_string()).or_insert(0);
    let unique = if *count == 0 {
        name.to_string()
    } else {
        format!("{name}{count}")
    };
    *count += 1;
    unique
}
