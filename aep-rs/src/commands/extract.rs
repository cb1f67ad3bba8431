//! Leaf payload extraction command

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use console::style;

pub fn execute(path: PathBuf, name: &str, output: Option<PathBuf>, index: usize) -> Result<()> {
    let id = super::parse_fourcc(name)?;
    let root = super::load_tree(&path)?;

    let matches = root.chunks_named_recursive(id);
    if matches.is_empty() {
        bail!("no chunks named '{}' in {}", id, path.display());
    }
    let Some(chunk) = matches.get(index) else {
        bail!(
            "index {} out of range: {} match(es) for '{}'",
            index,
            matches.len(),
            id
        );
    };
    if chunk.is_container() {
        bail!(
            "chunk '{}' is a container; only leaf payloads can be extracted",
            id
        );
    }

    match output {
        Some(out) => {
            fs::write(&out, chunk.payload())
                .with_context(|| format!("Failed to write output file: {}", out.display()))?;
            println!(
                "✓ Wrote {} byte(s) from '{}' to {}",
                style(chunk.payload().len()).green(),
                style(id).cyan(),
                style(out.display()).cyan()
            );
        }
        None => {
            io::stdout().write_all(chunk.payload())?;
        }
    }

    Ok(())
}
