//! Core value types for slicing floorplans.

use std::fmt;

/// Identifier of a physical block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label(pub i64);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a cut line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Children are stacked on top of each other
    Horizontal,
    /// Children sit side by side
    Vertical,
}

impl Orientation {
    /// The single-character marker used in the text formats.
    pub fn marker(&self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }

    /// Parse a marker character.
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u64,
    pub height: u64,
}

impl Size {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }
}

/// Renders as `(width,height)`.
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.width, self.height)
    }
}

/// Bottom-left corner of a placed block.
///
/// Coordinates are signed so a floorplan can be anchored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The origin `(0,0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// The corner diagonally opposite this one across `size`, or `None` if
    /// it does not fit in `i64`.
    pub fn checked_offset(&self, size: Size) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add_unsigned(size.width)?,
            self.y.checked_add_unsigned(size.height)?,
        ))
    }
}

/// Renders as `(x,y)`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: u64,
    pub height: u64,
}

impl Rect {
    /// Create a rectangle with position and size.
    pub fn new(x: i64, y: i64, width: u64, height: u64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Get the right edge (x + width), or `None` on overflow.
    pub fn right(&self) -> Option<i64> {
        self.x.checked_add_unsigned(self.width)
    }

    /// Get the top edge (y + height), or `None` on overflow.
    pub fn top(&self) -> Option<i64> {
        self.y.checked_add_unsigned(self.height)
    }

    /// Check whether `other` lies entirely inside this rectangle.
    ///
    /// Rectangles whose far edges overflow contain nothing and are contained
    /// by nothing.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        match (self.right(), self.top(), other.right(), other.top()) {
            (Some(right), Some(top), Some(other_right), Some(other_top)) => {
                other.x >= self.x && other.y >= self.y && other_right <= right && other_top <= top
            }
            _ => false,
        }
    }

    /// Compute the overlap with another rectangle, if it has positive area.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right()?.min(other.right()?);
        let y2 = self.top()?.min(other.top()?);

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2.abs_diff(x1), y2.abs_diff(y1)))
        } else {
            None
        }
    }

    /// Compute the bounding box of both rectangles, or `None` if an edge
    /// overflows.
    pub fn union(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right()?.max(other.right()?);
        let y2 = self.top()?.max(other.top()?);
        Some(Rect::new(x1, y1, x2.abs_diff(x1), y2.abs_diff(y1)))
    }
}
