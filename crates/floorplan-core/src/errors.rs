//! Error types for floorplan evaluation.

use crate::tree::NodeId;
use crate::types::{Label, Orientation};
use thiserror::Error;

/// Top-level error type covering every pipeline stage.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while reading token lines.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Line {line} is {len} bytes long, the limit is {max}")]
    LineTooLong { line: usize, len: usize, max: usize },

    #[error("Malformed block at line {line}: expected label(width,height), found {found:?}")]
    MalformedLeaf { line: usize, found: String },

    #[error("Block {label} at line {line} has a zero extent; width and height must be positive")]
    InvalidDimension { line: usize, label: Label },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while reconstructing the tree from a postorder token sequence.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Input contains no blocks")]
    EmptyInput,

    #[error("Cut {orientation} at line {line} needs two subtrees, found {available}")]
    MissingOperands {
        line: usize,
        orientation: Orientation,
        available: usize,
    },

    #[error("Input does not reduce to a single tree: {roots} subtrees remain")]
    DisconnectedForest { roots: usize },

    #[error("Node limit of {limit} exceeded")]
    CapacityExceeded { limit: usize },

    #[error("Unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error("Node {0:?} is already attached to a parent")]
    AlreadyAttached(NodeId),
}

/// Errors during dimension and coordinate evaluation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Tree has no root")]
    NoRoot,

    #[error("Extent overflow while evaluating node {0:?}")]
    Overflow(NodeId),

    #[error("Cut {0:?} was read before its dimensions were evaluated")]
    Unevaluated(NodeId),

    #[error("Block {0} was read before it was placed")]
    Unplaced(Label),
}

/// Errors while writing textual dumps.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Tree has no root")]
    NoRoot,

    #[error("Cut {0:?} has no evaluated dimensions")]
    MissingDimensions(NodeId),

    #[error("Block {0} has not been placed")]
    MissingPlacement(Label),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
