//! Directions used by neighbour queries and the lookup tables relating them to quadrants
//!
//! ```text
//!          North
//!       .----.----.
//!       | NW | NE |
//!  West '----'----' East
//!       | SW | SE |
//!       '----'----'
//!          South
//! ```

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::Quadrant;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    West,
    North,
    East,
    South,
}

use Quadrant::{NE, NW, SE, SW};

/// whether a quadrant touches the given side of its parent
const ADJACENT: [[bool; 4]; 4] = [
    //   NW     NE     SW     SE
    [true, false, true, false], // West
    [true, true, false, false], // North
    [false, true, false, true], // East
    [false, false, true, true], // South
];

/// quadrant mirrored across the axis perpendicular to the given side
const REFLECT: [[Quadrant; 4]; 4] = [
    [NE, NW, SE, SW], // West
    [SW, SE, NW, NE], // North
    [NE, NW, SE, SW], // East
    [SW, SE, NW, NE], // South
];

const OPPOSITE: [Side; 4] = [Side::East, Side::South, Side::West, Side::North];

/// direction followed along a boundary when listing the neighbours on a side,
/// starting from the cardinal neighbour of that side
const TRAVERSAL: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];

impl Side {
    pub const ALL: [Side; 4] = [Self::West, Self::North, Self::East, Self::South];

    pub fn adjacent(self, q: Quadrant) -> bool {
        ADJACENT[self as usize][q.index()]
    }
    pub fn reflect(self, q: Quadrant) -> Quadrant {
        REFLECT[self as usize][q.index()]
    }
    pub fn opposite(self) -> Side {
        OPPOSITE[self as usize]
    }
    pub fn traversal(self) -> Side {
        TRAVERSAL[self as usize]
    }
    /// the two quadrants lying along this side
    pub fn edge(self) -> impl Iterator<Item = Quadrant> {
        Quadrant::ALL.into_iter().filter(move |q| self.adjacent(*q))
    }
}
impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::West => "West",
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
        })
    }
}

/// one value per side, the directional counterpart to `Quad`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Sides<T> {
    pub west: T,
    pub north: T,
    pub east: T,
    pub south: T,
}
impl<T> Index<Side> for Sides<T> {
    type Output = T;
    fn index(&self, index: Side) -> &Self::Output {
        match index {
            Side::West => &self.west,
            Side::North => &self.north,
            Side::East => &self.east,
            Side::South => &self.south,
        }
    }
}
impl<T> IndexMut<Side> for Sides<T> {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        match index {
            Side::West => &mut self.west,
            Side::North => &mut self.north,
            Side::East => &mut self.east,
            Side::South => &mut self.south,
        }
    }
}
