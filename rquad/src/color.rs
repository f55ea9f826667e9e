use std::fmt::{self, Display};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Color {
    /// obstructed leaf
    #[default]
    Black,
    /// free leaf
    White,
    /// internal node covering both colors, never the color of a leaf
    Gray,
}
impl Color {
    pub fn is_leaf_color(self) -> bool {
        self != Self::Gray
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Gray => "Gray",
        })
    }
}
