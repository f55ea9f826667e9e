use std::fmt::Debug;

use itertools::{iproduct, Itertools};

use crate::{Color, Point, Rect, UniformityOracle};

/// An in-memory black and white raster with its north-west corner at the origin.
///
/// # implementation details
/// stored in row-major order, one `Color` per cell, never `Color::Gray`
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}
impl Bitmap {
    /// a raster of the given size filled with black
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::Black)
    }
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        assert!(color.is_leaf_color(), "raster cells are black or white");
        let width = width as usize;
        let height = height as usize;
        Self {
            width,
            height,
            cells: vec![color; width * height],
        }
    }
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(Point) -> Color) -> Self {
        let mut bitmap = Self::new(width, height);
        for (y, x) in iproduct!(0..i64::from(height), 0..i64::from(width)) {
            bitmap.set(Point::new(x, y), f(Point::new(x, y)));
        }
        bitmap
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, pos: Point) -> Option<usize> {
        let x = usize::try_from(pos.x).ok().filter(|x| *x < self.width)?;
        let y = usize::try_from(pos.y).ok().filter(|y| *y < self.height)?;
        Some(y * self.width + x)
    }
    /// color of the cell at `pos`, `None` outside of the raster
    pub fn get(&self, pos: Point) -> Option<Color> {
        self.offset(pos).map(|i| self.cells[i])
    }
    pub fn set(&mut self, pos: Point, color: Color) {
        assert!(color.is_leaf_color(), "raster cells are black or white");
        let i = self
            .offset(pos)
            .unwrap_or_else(|| panic!("{pos:?} is outside of the raster"));
        self.cells[i] = color;
    }
    /// sets every cell of `rect` that lies within the raster
    pub fn fill(&mut self, rect: Rect, color: Color) {
        for (y, x) in iproduct!(rect.y().range(), rect.x().range()) {
            if self.offset(Point::new(x, y)).is_some() {
                self.set(Point::new(x, y), color);
            }
        }
    }
}

impl UniformityOracle for Bitmap {
    #[allow(clippy::cast_possible_wrap)] // built from u32 dimensions
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width as i64, self.height as i64)
    }

    // brute force, stops at the first cell that differs from the first one
    fn is_uniform(&self, rect: Rect) -> Option<Color> {
        iproduct!(rect.y().range(), rect.x().range())
            .map(|(y, x)| self.get(Point::new(x, y)))
            .all_equal_value()
            .ok()
            .flatten()
    }
}

impl Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bitmap({}x{})", self.width, self.height)?;
        for row in self.cells.chunks(self.width.max(1)) {
            let row: String = row
                .iter()
                .map(|c| if *c == Color::White { '.' } else { 'o' })
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
