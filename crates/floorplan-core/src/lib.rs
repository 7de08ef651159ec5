//! Core types, slicing tree model, and errors for floorplan evaluation.
//!
//! This crate provides the foundational types used across all other floorplan crates:
//! - The slicing tree arena and its node variants
//! - Value types (labels, orientations, sizes, points, rectangles)
//! - Traversal iterators
//! - Error types

pub mod errors;
pub mod tree;
pub mod types;

pub use errors::*;
pub use tree::*;
pub use types::*;
