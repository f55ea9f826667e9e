use std::ops::Sub;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// x increases to the east
/// y increases to the south
pub struct Point {
    pub x: i64,
    pub y: i64,
}
impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}
impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
