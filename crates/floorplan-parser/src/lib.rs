//! Reader and tree builder for postorder slicing floorplans.
//!
//! Input is line oriented: each non-empty line is either a block
//! `label(width,height)` or a cut marker starting with `H` or `V`. The lines
//! form a postorder traversal of the slicing tree, which is rebuilt with an
//! explicit operand stack.
//!
//! # Example
//!
//! ```
//! use floorplan_parser::parse_str;
//!
//! let tree = parse_str("1(2,3)\n2(4,1)\nV\n").unwrap();
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.leaf_count(), 2);
//! ```

mod builder;
mod grammar;
mod reader;
mod token;

pub use builder::TreeBuilder;
pub use grammar::parse_line;
pub use reader::TokenReader;
pub use token::{Token, TokenKind};

use std::io::BufRead;

use floorplan_core::{FloorplanError, SlicingTree};
use log::debug;

/// Longest accepted line, excluding the line terminator.
///
/// Fits a 20-byte line buffer holding the newline and a terminator.
pub const DEFAULT_MAX_LINE_LEN: usize = 18;

/// Largest number of nodes a single tree may hold.
pub const DEFAULT_MAX_NODES: usize = 1000;

/// Limits applied while reading and building.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Longest accepted line in bytes
    pub max_line_len: usize,
    /// Node capacity of the tree
    pub max_nodes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Read a postorder token stream and rebuild its slicing tree.
///
/// Reading stops at the first malformed line or structural error.
pub fn parse_tree<R: BufRead>(
    input: R,
    options: &ParseOptions,
) -> Result<SlicingTree, FloorplanError> {
    let mut builder = TreeBuilder::with_max_nodes(options.max_nodes);
    for token in TokenReader::with_max_line_len(input, options.max_line_len) {
        builder.push(token?)?;
    }

    let tree = builder.finish()?;
    debug!(
        "built slicing tree: {} nodes, {} blocks",
        tree.len(),
        tree.leaf_count()
    );
    Ok(tree)
}

/// Parse a floorplan from source text with default limits.
pub fn parse_str(source: &str) -> Result<SlicingTree, FloorplanError> {
    parse_tree(source.as_bytes(), &ParseOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::{BuildError, Node, ParseError};

    #[test]
    fn test_parse_str_example() {
        let tree = parse_str("1(2,3)\n2(4,1)\nV\n").unwrap();
        let root = tree.root().unwrap();
        let cut = tree.get(root).unwrap().as_cut().unwrap();
        assert_eq!(cut.orientation.marker(), 'V');

        let left = tree.get(cut.left()).unwrap().as_leaf().unwrap();
        let right = tree.get(cut.right()).unwrap().as_leaf().unwrap();
        assert_eq!(left.label.0, 1);
        assert_eq!((left.size.width, left.size.height), (2, 3));
        assert_eq!(right.label.0, 2);
        assert_eq!((right.size.width, right.size.height), (4, 1));
    }

    #[test]
    fn test_single_block() {
        let tree = parse_str("7(5,5)\n").unwrap();
        assert!(matches!(tree.get(tree.root().unwrap()), Some(Node::Leaf(_))));
    }

    #[test]
    fn test_cut_before_blocks_is_structural_error() {
        let err = parse_str("V\n1(1,1)\n").unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Build(BuildError::MissingOperands { line: 1, available: 0, .. })
        ));
    }

    #[test]
    fn test_forest_rejected() {
        let err = parse_str("1(1,1)\n2(1,1)\n").unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Build(BuildError::DisconnectedForest { roots: 2 })
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = parse_str("\n\n").unwrap_err();
        assert!(matches!(err, FloorplanError::Build(BuildError::EmptyInput)));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = parse_str("1(2,3)\n\n2(4;1)\nV\n").unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Parse(ParseError::MalformedLeaf { line: 3, .. })
        ));
    }

    #[test]
    fn test_custom_limits() {
        let options = ParseOptions {
            max_line_len: 64,
            max_nodes: 2,
        };
        let err = parse_tree("1(2,3)\n2(4,1)\nV\n".as_bytes(), &options).unwrap_err();
        assert!(matches!(
            err,
            FloorplanError::Build(BuildError::CapacityExceeded { limit: 2 })
        ));

        let long = "123456789(123456789,1)\n";
        assert!(parse_str(long).is_err());
        assert!(parse_tree(long.as_bytes(), &options).is_ok());
    }
}
