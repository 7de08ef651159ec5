//! Bottom-up evaluation of enclosing rectangles.

use floorplan_core::{LayoutError, Node, NodeId, Orientation, Size, SlicingTree};
use log::{debug, trace};

/// Minimum rectangle holding `left` and `right` across a cut.
///
/// A horizontal cut stacks its children, a vertical cut puts them side by
/// side. Returns `None` if the summed extent overflows.
pub fn enclose(orientation: Orientation, left: Size, right: Size) -> Option<Size> {
    match orientation {
        Orientation::Horizontal => Some(Size::new(
            left.width.max(right.width),
            left.height.checked_add(right.height)?,
        )),
        Orientation::Vertical => Some(Size::new(
            left.width.checked_add(right.width)?,
            left.height.max(right.height),
        )),
    }
}

/// Current size of a node that must already be evaluated.
pub(crate) fn evaluated_size(tree: &SlicingTree, id: NodeId) -> Result<Size, LayoutError> {
    tree.get(id)
        .and_then(Node::size)
        .ok_or(LayoutError::Unevaluated(id))
}

/// Evaluate every cut's enclosing size and return the root's.
///
/// Cuts are visited in postorder so both children are final before their
/// parent is computed. Blocks are left untouched.
pub fn compute_dimensions(tree: &mut SlicingTree) -> Result<Size, LayoutError> {
    let root = tree.root().ok_or(LayoutError::NoRoot)?;

    let cuts: Vec<NodeId> = tree
        .postorder()
        .filter(|(_, node)| !node.is_leaf())
        .map(|(id, _)| id)
        .collect();

    for id in cuts {
        let Some(Node::Cut(cut)) = tree.get(id) else {
            continue;
        };
        let (orientation, left, right) = (cut.orientation, cut.left(), cut.right());

        let size = enclose(
            orientation,
            evaluated_size(tree, left)?,
            evaluated_size(tree, right)?,
        )
        .ok_or(LayoutError::Overflow(id))?;
        trace!("{:?} {} -> {}", id, orientation, size);

        if let Some(Node::Cut(cut)) = tree.get_mut(id) {
            cut.size = Some(size);
        }
    }

    let size = evaluated_size(tree, root)?;
    debug!("root encloses {}", size);
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorplan_core::Leaf;

    fn pair(orientation: Orientation, a: Size, b: Size) -> SlicingTree {
        let mut tree = SlicingTree::new();
        let l = tree.add_leaf(Leaf::new(1, a));
        let r = tree.add_leaf(Leaf::new(2, b));
        let root = tree.add_cut(orientation, l, r).unwrap();
        tree.set_root(root).unwrap();
        tree
    }

    #[test]
    fn test_horizontal_cut() {
        let mut tree = pair(Orientation::Horizontal, Size::new(3, 4), Size::new(5, 2));
        assert_eq!(compute_dimensions(&mut tree).unwrap(), Size::new(5, 6));
    }

    #[test]
    fn test_vertical_cut() {
        let mut tree = pair(Orientation::Vertical, Size::new(3, 4), Size::new(5, 2));
        assert_eq!(compute_dimensions(&mut tree).unwrap(), Size::new(8, 4));
    }

    #[test]
    fn test_nested_cuts_and_leaves_untouched() {
        // V(1(2,3), H(2(4,1), 3(1,5)))
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(1, Size::new(2, 3)));
        let b = tree.add_leaf(Leaf::new(2, Size::new(4, 1)));
        let c = tree.add_leaf(Leaf::new(3, Size::new(1, 5)));
        let h = tree.add_cut(Orientation::Horizontal, b, c).unwrap();
        let v = tree.add_cut(Orientation::Vertical, a, h).unwrap();
        tree.set_root(v).unwrap();

        assert_eq!(compute_dimensions(&mut tree).unwrap(), Size::new(6, 6));
        assert_eq!(tree.get(h).unwrap().size(), Some(Size::new(4, 6)));
        assert_eq!(tree.get(b).unwrap().size(), Some(Size::new(4, 1)));
    }

    #[test]
    fn test_single_block_root() {
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(9, Size::new(7, 8)));
        tree.set_root(a).unwrap();
        assert_eq!(compute_dimensions(&mut tree).unwrap(), Size::new(7, 8));
    }

    #[test]
    fn test_overflow_reported() {
        let mut tree = pair(Orientation::Vertical, Size::new(u64::MAX, 1), Size::new(1, 1));
        assert!(matches!(
            compute_dimensions(&mut tree),
            Err(LayoutError::Overflow(_))
        ));
    }

    #[test]
    fn test_reevaluation_is_stable() {
        let mut tree = pair(Orientation::Horizontal, Size::new(3, 4), Size::new(5, 2));
        let first = compute_dimensions(&mut tree).unwrap();
        assert_eq!(compute_dimensions(&mut tree).unwrap(), first);
    }
}
