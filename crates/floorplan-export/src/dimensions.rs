//! Postorder dimension dump.

use std::io::Write;

use floorplan_core::{ExportError, Node, SlicingTree};

/// Write one line per node in postorder: `label(width,height)` for blocks and
/// `H(width,height)`/`V(width,height)` for cuts with their enclosing size.
pub fn write<W: Write>(tree: &SlicingTree, out: &mut W) -> Result<(), ExportError> {
    tree.root().ok_or(ExportError::NoRoot)?;

    for (id, node) in tree.postorder() {
        match node {
            Node::Leaf(leaf) => writeln!(out, "{}{}", leaf.label, leaf.size)?,
            Node::Cut(cut) => {
                let size = cut.size.ok_or(ExportError::MissingDimensions(id))?;
                writeln!(out, "{}{}", cut.orientation, size)?;
            }
        }
    }
    Ok(())
}
