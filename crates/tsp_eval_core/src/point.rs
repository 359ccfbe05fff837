use std::fmt;

/// Planar point of a problem instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance, computed with `hypot` so large coordinate
    /// differences do not overflow.
    #[inline]
    pub fn dist(self, rhs: &Self) -> f64 {
        (self.x - rhs.x).hypot(self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{} {}", b1.format(self.x), b2.format(self.y))
    }
}
