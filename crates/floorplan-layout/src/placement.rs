//! Top-down placement of blocks.

use floorplan_core::{Label, LayoutError, Node, Orientation, Point, Rect, SlicingTree};
use log::trace;

use crate::dimensions::evaluated_size;

/// Assign every block the bottom-left corner of its region.
///
/// Requires evaluated dimensions. Fails with [`LayoutError::Overflow`] if any
/// block's far edge does not fit in `i64`. Under a horizontal cut the right child is
/// the lower block and the left child sits on top of it; under a vertical cut
/// the left child comes first and the right child follows it.
pub fn compute_placement(tree: &mut SlicingTree, origin: Point) -> Result<(), LayoutError> {
    let root = tree.root().ok_or(LayoutError::NoRoot)?;
    let mut stack = vec![(root, origin)];

    while let Some((id, at)) = stack.pop() {
        let (orientation, left, right) = match tree.get_mut(id) {
            Some(Node::Leaf(leaf)) => {
                at.checked_offset(leaf.size).ok_or(LayoutError::Overflow(id))?;
                trace!("block {} at {}", leaf.label, at);
                leaf.origin = Some(at);
                continue;
            }
            Some(Node::Cut(cut)) => (cut.orientation, cut.left(), cut.right()),
            None => continue,
        };

        let (left_at, right_at) = match orientation {
            Orientation::Horizontal => {
                let below = evaluated_size(tree, right)?.height;
                let y = at.y.checked_add_unsigned(below).ok_or(LayoutError::Overflow(id))?;
                (Point::new(at.x, y), at)
            }
            Orientation::Vertical => {
                let beside = evaluated_size(tree, left)?.width;
                let x = at.x.checked_add_unsigned(beside).ok_or(LayoutError::Overflow(id))?;
                (at, Point::new(x, at.y))
            }
        };

        // Left is popped first
        stack.push((right, right_at));
        stack.push((left, left_at));
    }

    Ok(())
}

/// Placed region of every block, left to right.
pub fn leaf_bounds(tree: &SlicingTree) -> Result<Vec<(Label, Rect)>, LayoutError> {
    tree.leaves()
        .map(|(_, leaf)| {
            let origin = leaf.origin.ok_or(LayoutError::Unplaced(leaf.label))?;
            Ok((leaf.label, Rect::from_parts(origin, leaf.size)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_dimensions;
    use floorplan_core::{Leaf, Size};

    fn origins(tree: &SlicingTree) -> Vec<(i64, Point)> {
        tree.leaves()
            .map(|(_, l)| (l.label.0, l.origin.unwrap()))
            .collect()
    }

    #[test]
    fn test_vertical_places_right_beside_left() {
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(1, Size::new(2, 3)));
        let b = tree.add_leaf(Leaf::new(2, Size::new(4, 1)));
        let v = tree.add_cut(Orientation::Vertical, a, b).unwrap();
        tree.set_root(v).unwrap();

        compute_dimensions(&mut tree).unwrap();
        compute_placement(&mut tree, Point::ORIGIN).unwrap();
        assert_eq!(origins(&tree), vec![(1, Point::new(0, 0)), (2, Point::new(2, 0))]);
    }

    #[test]
    fn test_horizontal_places_left_above_right() {
        // H(V(1(2,2), 2(1,1)), 3(4,3))
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(1, Size::new(2, 2)));
        let b = tree.add_leaf(Leaf::new(2, Size::new(1, 1)));
        let v = tree.add_cut(Orientation::Vertical, a, b).unwrap();
        let c = tree.add_leaf(Leaf::new(3, Size::new(4, 3)));
        let h = tree.add_cut(Orientation::Horizontal, v, c).unwrap();
        tree.set_root(h).unwrap();

        compute_dimensions(&mut tree).unwrap();
        compute_placement(&mut tree, Point::ORIGIN).unwrap();
        assert_eq!(
            origins(&tree),
            vec![
                (1, Point::new(0, 3)),
                (2, Point::new(2, 3)),
                (3, Point::new(0, 0)),
            ]
        );
    }

    #[test]
    fn test_placement_requires_dimensions() {
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(1, Size::new(1, 1)));
        let b = tree.add_leaf(Leaf::new(2, Size::new(1, 1)));
        let inner = tree.add_cut(Orientation::Vertical, a, b).unwrap();
        let c = tree.add_leaf(Leaf::new(3, Size::new(1, 1)));
        let root = tree.add_cut(Orientation::Vertical, inner, c).unwrap();
        tree.set_root(root).unwrap();

        assert!(matches!(
            compute_placement(&mut tree, Point::ORIGIN),
            Err(LayoutError::Unevaluated(id)) if id == inner
        ));
    }

    #[test]
    fn test_negative_origin() {
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(1, Size::new(2, 3)));
        let b = tree.add_leaf(Leaf::new(2, Size::new(4, 1)));
        let h = tree.add_cut(Orientation::Horizontal, a, b).unwrap();
        tree.set_root(h).unwrap();

        compute_dimensions(&mut tree).unwrap();
        compute_placement(&mut tree, Point::new(-5, -1)).unwrap();
        assert_eq!(origins(&tree), vec![(1, Point::new(-5, 0)), (2, Point::new(-5, -1))]);
    }

    #[test]
    fn test_block_far_edge_overflow() {
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(1, Size::new(3, 1)));
        tree.set_root(a).unwrap();

        compute_dimensions(&mut tree).unwrap();
        assert!(matches!(
            compute_placement(&mut tree, Point::new(i64::MAX - 2, 0)),
            Err(LayoutError::Overflow(id)) if id == a
        ));
        assert!(compute_placement(&mut tree, Point::new(i64::MAX - 3, 0)).is_ok());
    }

    #[test]
    fn test_leaf_bounds_before_placement() {
        let mut tree = SlicingTree::new();
        let a = tree.add_leaf(Leaf::new(4, Size::new(1, 1)));
        tree.set_root(a).unwrap();
        assert!(matches!(
            leaf_bounds(&tree),
            Err(LayoutError::Unplaced(Label(4)))
        ));
    }
}
