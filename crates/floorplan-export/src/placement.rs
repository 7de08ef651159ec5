//! Block placement dump.

use std::io::Write;

use floorplan_core::{ExportError, SlicingTree};

/// Write one line per block, left to right:
/// `label((width,height)(x,y))`. Cuts produce no output.
pub fn write<W: Write>(tree: &SlicingTree, out: &mut W) -> Result<(), ExportError> {
    tree.root().ok_or(ExportError::NoRoot)?;

    for (_, leaf) in tree.leaves() {
        let origin = leaf
            .origin
            .ok_or(ExportError::MissingPlacement(leaf.label))?;
        writeln!(out, "{}({}{})", leaf.label, leaf.size, origin)?;
    }
    Ok(())
}
