//! Container information command

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use console::style;
use prettytable::row;

use ae_riff::{ByteOrder, Chunk, RiffParser};

use crate::utils::{create_table, format_bytes};

#[derive(Default)]
struct IdStats {
    count: usize,
    containers: usize,
    payload_bytes: u64,
}

pub fn execute(path: PathBuf) -> Result<()> {
    let root = super::load_tree(&path)?;
    let order = RiffParser::new().byte_order(root.id);

    println!("\n{}", style("Container Information").bold().underlined());
    println!("File: {}", style(path.display()).cyan());
    println!(
        "Byte order: {}",
        style(match order {
            ByteOrder::Big => "big-endian",
            ByteOrder::Little => "little-endian",
        })
        .yellow()
    );
    match root.subtype() {
        Some(subtype) => println!(
            "Root: {} [{}]",
            style(root.id).yellow(),
            style(subtype).yellow()
        ),
        None => println!("Root: {} (leaf)", style(root.id).yellow()),
    }
    println!("Total Chunks: {}", style(root.count()).green());
    println!("Tree Depth: {}", style(root.depth()).green());

    // Per-identifier summary
    let mut stats = BTreeMap::new();
    collect_stats(&root, &mut stats);

    println!("\n{}", style("Chunk Summary").bold());
    let mut table = create_table(vec!["Identifier", "Count", "Kind", "Payload"]);
    for (name, entry) in &stats {
        let kind = if entry.containers == entry.count {
            "container"
        } else if entry.containers == 0 {
            "leaf"
        } else {
            "mixed"
        };
        table.add_row(row![
            style(name).cyan(),
            style(entry.count).green(),
            kind,
            format_bytes(entry.payload_bytes)
        ]);
    }
    table.printstd();

    Ok(())
}

fn collect_stats(chunk: &Chunk, stats: &mut BTreeMap<String, IdStats>) {
    let entry = stats.entry(chunk.id.to_string()).or_default();
    entry.count += 1;
    if chunk.is_container() {
        entry.containers += 1;
    } else {
        entry.payload_bytes += chunk.payload().len() as u64;
    }

    for child in chunk.children() {
        collect_stats(child, stats);
    }
}
