//! Preorder structural dump.

use std::io::Write;

use floorplan_core::{ExportError, Node, SlicingTree};

/// Write one line per node in preorder: `label(width,height)` for blocks with
/// their intrinsic size, bare `H`/`V` for cuts.
pub fn write<W: Write>(tree: &SlicingTree, out: &mut W) -> Result<(), ExportError> {
    tree.root().ok_or(ExportError::NoRoot)?;

    for (_, node) in tree.preorder() {
        match node {
            Node::Leaf(leaf) => writeln!(out, "{}{}", leaf.label, leaf.size)?,
            Node::Cut(cut) => writeln!(out, "{}", cut.orientation)?,
        }
    }
    Ok(())
}
