//! Command implementations for the aep-rs CLI

pub mod extract;
pub mod find;
pub mod info;
pub mod tree;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use ae_riff::{Chunk, FourCC, RiffParser};

/// Reads a container file into memory and parses it.
pub(crate) fn load_tree(path: &Path) -> Result<Chunk> {
    let data =
        fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    log::debug!("read {} byte(s) from {}", data.len(), path.display());

    RiffParser::new()
        .parse(&data)
        .with_context(|| format!("Failed to parse container: {}", path.display()))
}

/// Resolves a user-supplied chunk name to an identifier.
pub(crate) fn parse_fourcc(name: &str) -> Result<FourCC> {
    FourCC::from_str(name)
        .with_context(|| format!("chunk names are 1-4 characters, got '{}'", name))
}
