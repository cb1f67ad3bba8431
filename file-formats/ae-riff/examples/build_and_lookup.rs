//! Builds a small container in memory, serializes it, reparses it, and
//! walks it with chained lookups.

use ae_riff::{ByteOrder, Chunk, FourCC, RiffParser};
use anyhow::Result;

fn main() -> Result<()> {
    // A miniature project: one folder holding one item
    let tree = Chunk::container(
        FourCC::RIFX,
        b"Egg!",
        vec![Chunk::container(
            FourCC::LIST,
            b"Fold",
            vec![Chunk::container(
                FourCC::LIST,
                b"Item",
                vec![Chunk::leaf(b"Utf8", b"Comp 1".to_vec())],
            )],
        )],
    );

    let bytes = tree.to_bytes(ByteOrder::Big);
    println!("serialized {} byte(s)", bytes.len());

    let root = RiffParser::new().parse(&bytes)?;

    // Missing links degrade to the empty chunk instead of failing
    let name = root
        .first_chunk_named(b"LIST")
        .first_chunk_named(b"LIST")
        .first_chunk_named(b"Utf8");
    println!("item name: {}", String::from_utf8_lossy(name.payload()));

    let missing = root.first_chunk_named(b"none").first_chunk_named(b"Utf8");
    println!("missing chain is empty: {}", missing.is_empty());

    Ok(())
}
