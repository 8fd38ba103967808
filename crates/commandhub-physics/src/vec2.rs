use serde::{Deserialize, Serialize};

/// A 2D point or vector in arena units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_axis_vectors() {
        assert_eq!(Vec2::new(3.0, 0.0).length(), 3.0);
        assert_eq!(Vec2::new(0.0, -4.0).length(), 4.0);
        assert_eq!(Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn dot_product_orthogonal_is_zero() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(0.0, 7.0);
        assert_eq!(a.dot(b), 0.0);
    }
}
