//! Tokens produced from input lines.

use floorplan_core::{Label, Orientation, Size};

/// What a single input line denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A block with its intrinsic size
    Leaf { label: Label, size: Size },
    /// A cut joining the two most recent subtrees
    Cut(Orientation),
}

/// A token tagged with its 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }

    pub fn leaf(label: i64, width: u64, height: u64, line: usize) -> Self {
        Self::new(
            TokenKind::Leaf {
                label: Label(label),
                size: Size::new(width, height),
            },
            line,
        )
    }

    pub fn cut(orientation: Orientation, line: usize) -> Self {
        Self::new(TokenKind::Cut(orientation), line)
    }
}
