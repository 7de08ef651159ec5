//! Slicing tree data structures.
//!
//! Nodes live in an arena owned by [`SlicingTree`] and refer to their children
//! by [`NodeId`]. Every node is attached to at most one parent, and children are
//! always allocated before the cut that joins them, so arena order is a valid
//! postorder of any subtree.

use crate::errors::BuildError;
use crate::types::{Label, Orientation, Point, Size};

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A physical block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub label: Label,
    /// Intrinsic size, never changed by evaluation
    pub size: Size,
    /// Bottom-left corner, set by placement
    pub origin: Option<Point>,
}

impl Leaf {
    pub fn new(label: i64, size: Size) -> Self {
        Self {
            label: Label(label),
            size,
            origin: None,
        }
    }
}

/// A cut splitting its region between two ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    pub orientation: Orientation,
    left: NodeId,
    right: NodeId,
    /// Minimum enclosing size, set by dimension evaluation
    pub size: Option<Size>,
}

impl Cut {
    pub fn left(&self) -> NodeId {
        self.left
    }

    pub fn right(&self) -> NodeId {
        self.right
    }
}

/// A node in the slicing tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Cut(Cut),
}

impl Node {
    /// Current size: intrinsic for leaves, evaluated (if any) for cuts.
    pub fn size(&self) -> Option<Size> {
        match self {
            Node::Leaf(leaf) => Some(leaf.size),
            Node::Cut(cut) => cut.size,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Cut(_) => None,
        }
    }

    pub fn as_cut(&self) -> Option<&Cut> {
        match self {
            Node::Cut(cut) => Some(cut),
            Node::Leaf(_) => None,
        }
    }
}

/// A binary slicing tree.
#[derive(Debug, Clone, Default)]
pub struct SlicingTree {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    root: Option<NodeId>,
}

impl SlicingTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached leaf.
    pub fn add_leaf(&mut self, leaf: Leaf) -> NodeId {
        self.push(Node::Leaf(leaf))
    }

    /// Allocate a cut over two detached subtrees.
    pub fn add_cut(
        &mut self,
        orientation: Orientation,
        left: NodeId,
        right: NodeId,
    ) -> Result<NodeId, BuildError> {
        self.ensure_detached(left)?;
        self.ensure_detached(right)?;
        if left == right {
            return Err(BuildError::AlreadyAttached(right));
        }

        let id = NodeId(self.nodes.len());
        self.parents[left.0] = Some(id);
        self.parents[right.0] = Some(id);
        Ok(self.push(Node::Cut(Cut {
            orientation,
            left,
            right,
            size: None,
        })))
    }

    /// Mark a detached node as the root.
    pub fn set_root(&mut self, id: NodeId) -> Result<(), BuildError> {
        self.ensure_detached(id)?;
        self.root = Some(id);
        Ok(())
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(None);
        id
    }

    fn ensure_detached(&self, id: NodeId) -> Result<(), BuildError> {
        match self.parents.get(id.0) {
            None => Err(BuildError::UnknownNode(id)),
            Some(Some(_)) => Err(BuildError::AlreadyAttached(id)),
            Some(None) => Ok(()),
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Visit nodes reachable from the root as self, left, right.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Visit nodes reachable from the root as left, right, self.
    pub fn postorder(&self) -> Postorder<'_> {
        Postorder {
            tree: self,
            stack: self.root.map(|id| (id, false)).into_iter().collect(),
        }
    }

    /// Visit leaves reachable from the root, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &Leaf)> {
        self.preorder()
            .filter_map(|(id, node)| node.as_leaf().map(|leaf| (id, leaf)))
    }

    /// Number of leaves reachable from the root.
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }
}

/// Preorder iterator over a [`SlicingTree`].
pub struct Preorder<'a> {
    tree: &'a SlicingTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.get(id)?;
        if let Node::Cut(cut) = node {
            // Right is pushed first so left is visited first
            self.stack.push(cut.right);
            self.stack.push(cut.left);
        }
        Some((id, node))
    }
}

/// Postorder iterator over a [`SlicingTree`].
pub struct Postorder<'a> {
    tree: &'a SlicingTree,
    /// Pending nodes, flagged once their children have been scheduled
    stack: Vec<(NodeId, bool)>,
}

impl<'a> Iterator for Postorder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = self.tree.get(id)?;
            match node {
                Node::Cut(cut) if !expanded => {
                    self.stack.push((id, true));
                    self.stack.push((cut.right, false));
                    self.stack.push((cut.left, false));
                }
                _ => return Some((id, node)),
            }
        }
    }
}
