//! Named chunk lookup command

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use prettytable::row;

use ae_riff::{Chunk, FourCC};

use crate::utils::{create_table, format_bytes};

pub fn execute(path: PathBuf, name: &str, recursive: bool) -> Result<()> {
    let id = super::parse_fourcc(name)?;
    let root = super::load_tree(&path)?;

    let matches: Vec<(String, &Chunk)> = if recursive {
        let mut found = Vec::new();
        collect_paths(&root, id, "", &mut found);
        found
    } else {
        root.chunks_named(id)
            .into_iter()
            .map(|c| (format!("{}/{}", root.id, c.id), c))
            .collect()
    };

    if matches.is_empty() {
        println!(
            "No chunks named '{}' {}",
            style(id).cyan(),
            if recursive {
                "in the tree"
            } else {
                "among the root's children"
            }
        );
        return Ok(());
    }

    let mut table = create_table(vec!["#", "Path", "Kind", "Size"]);
    for (i, (chunk_path, chunk)) in matches.iter().enumerate() {
        let kind = match chunk.subtype() {
            Some(subtype) => format!("container [{}]", subtype),
            None => "leaf".to_string(),
        };
        table.add_row(row![
            i,
            style(chunk_path).cyan(),
            kind,
            format_bytes(u64::from(chunk.size))
        ]);
    }
    table.printstd();

    println!(
        "{} match(es) for '{}'",
        style(matches.len()).green(),
        style(id).cyan()
    );

    Ok(())
}

/// Pre-order walk recording a `/`-joined path for every match.
fn collect_paths<'a>(
    chunk: &'a Chunk,
    id: FourCC,
    parent_path: &str,
    found: &mut Vec<(String, &'a Chunk)>,
) {
    let path = if parent_path.is_empty() {
        chunk.id.to_string()
    } else {
        format!("{}/{}", parent_path, chunk.id)
    };

    if chunk.id == id {
        found.push((path.clone(), chunk));
    }
    for child in chunk.children() {
        collect_paths(child, id, &path, found);
    }
}
