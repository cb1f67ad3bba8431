//! Prints the top-level chunks of a RIFF/RIFX file.
//!
//! Usage: `cargo run --example dump_chunks -- <file>`

use std::fs;

use ae_riff::RiffParser;
use anyhow::{Context, Result, bail};

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: dump_chunks <file>"),
    };

    let data = fs::read(&path).with_context(|| format!("failed to read {}", path))?;
    let root = RiffParser::new()
        .parse(&data)
        .with_context(|| format!("failed to parse {}", path))?;

    match root.subtype() {
        Some(subtype) => println!("{} ({}) - {} chunks total", root.id, subtype, root.count()),
        None => println!("{} - single leaf chunk", root.id),
    }

    for child in root.children() {
        if child.is_container() {
            println!(
                "  {} [{}]: {} child chunk(s)",
                child.id,
                child.subtype().unwrap_or(ae_riff::FourCC::NIL),
                child.children().len()
            );
        } else {
            println!("  {}: {} byte(s)", child.id, child.payload().len());
        }
    }

    Ok(())
}
