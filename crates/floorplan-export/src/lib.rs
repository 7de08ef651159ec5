//! Textual dumps of slicing floorplans.
//!
//! Supported dumps, one record per line:
//! - Structure: preorder, blocks with their intrinsic size and bare cut markers
//! - Dimensions: postorder, every node with its evaluated size
//! - Placement: blocks only, with size and bottom-left corner
//! - Source: postorder input format, readable by `floorplan-parser`
//!
//! Each dump can be streamed to any [`std::io::Write`] or rendered to a
//! `String`. A streamed dump that fails part way has already written the
//! records before the failing node.

pub mod dimensions;
pub mod placement;
pub mod source;
pub mod structure;

use std::io::Write;

use floorplan_core::{ExportError, SlicingTree};

/// The textual dumps a tree can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dump {
    Structure,
    Dimensions,
    Placement,
    Source,
}

impl Dump {
    /// Stream this dump of `tree` to `out`.
    pub fn write<W: Write>(&self, tree: &SlicingTree, out: &mut W) -> Result<(), ExportError> {
        match self {
            Dump::Structure => structure::write(tree, out),
            Dump::Dimensions => dimensions::write(tree, out),
            Dump::Placement => placement::write(tree, out),
            Dump::Source => source::write(tree, out),
        }
    }

    /// Render this dump of `tree` to a string.
    pub fn render(&self, tree: &SlicingTree) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write(tree, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Export the preorder structural dump.
pub fn export_structure(tree: &SlicingTree) -> Result<String, ExportError> {
    Dump::Structure.render(tree)
}

/// Export the postorder dimension dump. Requires evaluated dimensions.
pub fn export_dimensions(tree: &SlicingTree) -> Result<String, ExportError> {
    Dump::Dimensions.render(tree)
}

/// Export the block placement dump. Requires placement.
pub fn export_placement(tree: &SlicingTree) -> Result<String, ExportError> {
    Dump::Placement.render(tree)
}

/// Export the tree back to its postorder input form.
pub fn export_source(tree: &SlicingTree) -> Result<String, ExportError> {
    Dump::Source.render(tree)
}
