//! Raw types to name indicies to what would otherwise be fixed length arrays

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}
impl Quadrant {
    /// order in which the children of a node are created and stored
    pub const ALL: [Quadrant; 4] = [Self::NW, Self::NE, Self::SW, Self::SE];

    pub fn from_halves(west: bool, north: bool) -> Self {
        match (west, north) {
            (true, true) => Self::NW,
            (false, true) => Self::NE,
            (true, false) => Self::SW,
            (false, false) => Self::SE,
        }
    }
    pub fn is_north(self) -> bool {
        matches!(self, Self::NW | Self::NE)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
impl Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NW => "Northwest",
            Self::NE => "Northeast",
            Self::SW => "Southwest",
            Self::SE => "Southeast",
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::ALL.into_iter().map(|q| &self[q])
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            nw: f(self.nw),
            ne: f(self.ne),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
    /// like `map`, but always called in `Quadrant::ALL` order
    pub fn index_map<U>(self, mut f: impl FnMut(Quadrant, T) -> U) -> Quad<U> {
        Quad {
            nw: f(Quadrant::NW, self.nw),
            ne: f(Quadrant::NE, self.ne),
            sw: f(Quadrant::SW, self.sw),
            se: f(Quadrant::SE, self.se),
        }
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn halves_round_trip() {
        for q in Quadrant::ALL {
            assert_eq!(q, Quadrant::from_halves(q.is_west(), q.is_north()));
        }
    }

    #[test]
    fn index_map_follows_all_order() {
        let mut seen = Vec::new();
        let quad = Quad {
            nw: 0,
            ne: 1,
            sw: 2,
            se: 3,
        }
        .index_map(|q, v| {
            seen.push(q);
            v * 10
        });
        assert_eq!(Quadrant::ALL.to_vec(), seen);
        assert_eq!(vec![0, 10, 20, 30], quad.into_iter().collect::<Vec<_>>());
        assert_eq!(20, quad[Quadrant::SW]);
    }
}
