//! Postorder to tree reconstruction.

use floorplan_core::{BuildError, Leaf, NodeId, SlicingTree};
use log::trace;

use crate::token::{Token, TokenKind};
use crate::DEFAULT_MAX_NODES;

/// Rebuilds a slicing tree from its postorder tokens.
///
/// Blocks are pushed on an operand stack; a cut pops the two most recent
/// subtrees (the latest becomes its right child) and pushes itself.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: SlicingTree,
    stack: Vec<NodeId>,
    max_nodes: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_max_nodes(DEFAULT_MAX_NODES)
    }

    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self {
            tree: SlicingTree::new(),
            stack: Vec::new(),
            max_nodes,
        }
    }

    /// Build a tree from a complete token sequence.
    pub fn build<I>(tokens: I) -> Result<SlicingTree, BuildError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut builder = Self::new();
        for token in tokens {
            builder.push(token)?;
        }
        builder.finish()
    }

    /// Number of subtrees currently on the operand stack.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }

    /// Consume one token.
    pub fn push(&mut self, token: Token) -> Result<(), BuildError> {
        if self.tree.len() >= self.max_nodes {
            return Err(BuildError::CapacityExceeded {
                limit: self.max_nodes,
            });
        }

        let id = match token.kind {
            TokenKind::Leaf { label, size } => self.tree.add_leaf(Leaf {
                label,
                size,
                origin: None,
            }),
            TokenKind::Cut(orientation) => {
                let Some(at) = self.stack.len().checked_sub(2) else {
                    return Err(BuildError::MissingOperands {
                        line: token.line,
                        orientation,
                        available: self.stack.len(),
                    });
                };
                let operands = self.stack.split_off(at);
                self.tree.add_cut(orientation, operands[0], operands[1])?
            }
        };

        trace!("line {}: pushed {:?}, depth {}", token.line, id, self.stack.len() + 1);
        self.stack.push(id);
        Ok(())
    }

    /// Finish building, requiring exactly one subtree to remain.
    pub fn finish(mut self) -> Result<SlicingTree, BuildError> {
        match self.stack.as_slice() {
            [] => Err(BuildError::EmptyInput),
            [root] => {
                let root = *root;
                self.tree.set_root(root)?;
                Ok(self.tree)
            }
            rest => Err(BuildError::DisconnectedForest { roots: rest.len() }),
        }
    }
}
