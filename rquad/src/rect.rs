use std::fmt::{self, Display};
use std::ops::Range;

use crate::{Point, Quad};

/// half-open interval `[min, max)` along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    min: i64,
    max: i64,
}
impl Span {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.max <= self.min
    }
    pub fn min(&self) -> i64 {
        self.min
    }
    pub fn max(&self) -> i64 {
        self.max
    }
    pub fn len(&self) -> i64 {
        (self.max - self.min).max(0)
    }
    /// split point of a subdivision, truncating so the upper half gets the odd unit
    pub fn mid(&self) -> i64 {
        self.min + self.len() / 2
    }
    pub fn contains(&self, a: i64) -> bool {
        self.min <= a && a < self.max
    }
    pub fn range(&self) -> Range<i64> {
        self.min..self.max
    }

    fn halves(&self) -> (Span, Span) {
        let mid = self.mid();
        (Span::new(self.min, mid), Span::new(mid, self.max))
    }
}

/// rect that contains its min point and excludes its max point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x: Span,
    y: Span,
}
impl Rect {
    pub const fn from_spans(x: Span, y: Span) -> Self {
        Self { x, y }
    }
    pub const fn min_max(min: Point, max: Point) -> Self {
        Self::from_spans(Span::new(min.x, max.x), Span::new(min.y, max.y))
    }
    pub const fn from_size(width: i64, height: i64) -> Self {
        Self::min_max(Point::new(0, 0), Point::new(width, height))
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
    pub fn x(&self) -> Span {
        self.x
    }
    pub fn y(&self) -> Span {
        self.y
    }
    pub fn width(&self) -> i64 {
        self.x.len()
    }
    pub fn height(&self) -> i64 {
        self.y.len()
    }
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    pub fn north(&self) -> i64 {
        self.y.min
    }
    pub fn south(&self) -> i64 {
        self.y.max
    }
    pub fn west(&self) -> i64 {
        self.x.min
    }
    pub fn east(&self) -> i64 {
        self.x.max
    }
    pub fn min(&self) -> Point {
        Point::new(self.x.min, self.y.min)
    }
    pub fn max(&self) -> Point {
        Point::new(self.x.max, self.y.max)
    }

    pub fn contains(&self, pos: Point) -> bool {
        self.x.contains(pos.x) && self.y.contains(pos.y)
    }

    /// the four sub-rects of a subdivision, split at the integer midpoints
    /// ```text
    ///     x0   x1     x2
    ///  y0 .----.-------.
    ///     | NW |  NE   |
    ///  y1 '----'-------'
    ///     | SW |  SE   |
    ///  y2 '----'-------'
    /// ```
    pub fn split(&self) -> Quad<Rect> {
        let (west, east) = self.x.halves();
        let (north, south) = self.y.halves();
        Quad {
            nw: Rect::from_spans(west, north),
            ne: Rect::from_spans(east, north),
            sw: Rect::from_spans(west, south),
            se: Rect::from_spans(east, south),
        }
    }
}
impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.x.min, self.y.min, self.x.max, self.y.max
        )
    }
}
