//! Postorder input-format dump.

use std::io::Write;

use floorplan_core::{ExportError, Node, SlicingTree};
use log::debug;

/// Write the tree as postorder input lines: `label(width,height)` for blocks
/// and `H`/`V` for cuts.
pub fn write<W: Write>(tree: &SlicingTree, out: &mut W) -> Result<(), ExportError> {
    tree.root().ok_or(ExportError::NoRoot)?;

    let mut lines = 0usize;
    for (_, node) in tree.postorder() {
        match node {
            Node::Leaf(leaf) => writeln!(out, "{}{}", leaf.label, leaf.size)?,
            Node::Cut(cut) => writeln!(out, "{}", cut.orientation)?,
        }
        lines += 1;
    }
    debug!("wrote {} source lines", lines);
    Ok(())
}
