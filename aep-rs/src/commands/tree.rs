//! Chunk tree display command

use std::path::PathBuf;

use anyhow::Result;

use ae_riff::{Chunk, FourCC};

use crate::utils::{NodeKind, TreeNode, TreeOptions, render_tree};

pub fn execute(
    path: PathBuf,
    depth: Option<usize>,
    no_color: bool,
    no_preview: bool,
) -> Result<()> {
    let root = super::load_tree(&path)?;

    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

    let tree = TreeNode::new(file_name, NodeKind::Root)
        .with_size(u64::from(root.size))
        .add_child(chunk_node(&root, !no_preview));

    let options = TreeOptions {
        max_depth: depth,
        no_color,
    };
    println!("{}", render_tree(&tree, &options));

    Ok(())
}

fn chunk_node(chunk: &Chunk, show_preview: bool) -> TreeNode {
    let (name, kind) = if chunk.is_container() {
        (
            format!(
                "{} [{}]",
                chunk.id,
                chunk.subtype().unwrap_or(FourCC::NIL)
            ),
            NodeKind::Container,
        )
    } else {
        (chunk.id.to_string(), NodeKind::Leaf)
    };

    let mut node = TreeNode::new(name, kind).with_size(u64::from(chunk.size));
    if kind == NodeKind::Leaf && show_preview && !chunk.payload().is_empty() {
        node = node.with_annotation(preview(chunk.payload()));
    }

    for child in chunk.children() {
        node = node.add_child(chunk_node(child, show_preview));
    }
    node
}

/// Short inline preview of a leaf payload: quoted text when it is
/// printable, leading bytes in hex otherwise.
fn preview(payload: &[u8]) -> String {
    const TEXT_MAX: usize = 24;
    const HEX_MAX: usize = 8;

    if payload
        .iter()
        .all(|b| b.is_ascii_graphic() || *b == b' ')
    {
        let text: String = payload.iter().take(TEXT_MAX).map(|b| *b as char).collect();
        if payload.len() > TEXT_MAX {
            format!("\"{}..\"", text)
        } else {
            format!("\"{}\"", text)
        }
    } else {
        let hex: Vec<String> = payload
            .iter()
            .take(HEX_MAX)
            .map(|b| format!("{:02x}", b))
            .collect();
        if payload.len() > HEX_MAX {
            format!("[{} ..]", hex.join(" "))
        } else {
            format!("[{}]", hex.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_of_printable_payload_is_quoted() {
        assert_eq!(preview(b"Comp 1"), "\"Comp 1\"");
    }

    #[test]
    fn preview_of_binary_payload_is_hex() {
        assert_eq!(preview(&[0x00, 0x01]), "[00 01]");
        assert_eq!(
            preview(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x00, 0x00, 0x00, 0x01]),
            "[de ad be ef 00 00 00 00 ..]"
        );
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "a".repeat(30);
        assert_eq!(preview(long.as_bytes()), format!("\"{}..\"", "a".repeat(24)));
    }
}
