//! Geometric evaluation of slicing trees.
//!
//! Evaluation runs in two passes over a frozen tree:
//!
//! 1. **Dimensions**: bottom-up, every cut gets the minimum rectangle
//!    enclosing its two children
//! 2. **Placement**: top-down from an origin, every block gets the absolute
//!    position of its bottom-left corner
//!
//! # Example
//!
//! ```
//! use floorplan_core::{Leaf, Orientation, Size, SlicingTree};
//! use floorplan_layout::{compute_layout, LayoutOptions};
//!
//! let mut tree = SlicingTree::new();
//! let a = tree.add_leaf(Leaf::new(1, Size::new(2, 3)));
//! let b = tree.add_leaf(Leaf::new(2, Size::new(4, 1)));
//! let root = tree.add_cut(Orientation::Vertical, a, b).unwrap();
//! tree.set_root(root).unwrap();
//!
//! let bounds = compute_layout(&mut tree, &LayoutOptions::default()).unwrap();
//! assert_eq!((bounds.width, bounds.height), (6, 3));
//! ```

mod dimensions;
mod placement;

pub use dimensions::{compute_dimensions, enclose};
pub use placement::{compute_placement, leaf_bounds};

use floorplan_core::{LayoutError, Point, Rect, SlicingTree};
use log::info;

/// Options for layout computation.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Bottom-left corner of the root region
    pub origin: Point,
}

/// Run both evaluation passes and return the root's region.
pub fn compute_layout(tree: &mut SlicingTree, options: &LayoutOptions) -> Result<Rect, LayoutError> {
    let size = compute_dimensions(tree)?;
    compute_placement(tree, options.origin)?;

    let bounds = Rect::from_parts(options.origin, size);
    info!(
        "placed {} blocks in {}x{} at {}",
        tree.leaf_count(),
        bounds.width,
        bounds.height,
        options.origin
    );
    Ok(bounds)
}
