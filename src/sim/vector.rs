//! 2D vector value type used by the simulation
//!
//! Mutating operations work in place and return the receiver so they can be
//! chained. The associated functions (`sum`, `difference`, `scaled`, `copy`)
//! never touch their inputs.

use glam::Vec2;

/// A 2D vector in simulation units (meters)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean norm
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn zero(&mut self) -> &mut Self {
        self.x = 0.0;
        self.y = 0.0;
        self
    }

    pub fn add(&mut self, other: Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(&mut self, other: Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn scale(&mut self, k: f32) -> &mut Self {
        self.x *= k;
        self.y *= k;
        self
    }

    /// `a + b` as a new vector
    pub fn sum(a: Vector2D, b: Vector2D) -> Self {
        Self::new(a.x + b.x, a.y + b.y)
    }

    /// `a - b` as a new vector
    pub fn difference(a: Vector2D, b: Vector2D) -> Self {
        Self::new(a.x - b.x, a.y - b.y)
    }

    /// `v * k` as a new vector
    pub fn scaled(v: Vector2D, k: f32) -> Self {
        Self::new(v.x * k, v.y * k)
    }

    /// Independent copy of `v`
    pub fn copy(v: &Vector2D) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutating_ops_chain() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.add(Vector2D::new(2.0, 2.0)).scale(2.0).subtract(Vector2D::new(1.0, 1.0));
        assert_eq!(v, Vector2D::new(5.0, 7.0));

        v.zero();
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn test_associated_ops_leave_inputs_alone() {
        let a = Vector2D::new(3.0, -1.0);
        let b = Vector2D::new(1.0, 1.0);

        assert_eq!(Vector2D::sum(a, b), Vector2D::new(4.0, 0.0));
        assert_eq!(Vector2D::difference(a, b), Vector2D::new(2.0, -2.0));
        assert_eq!(Vector2D::scaled(a, 2.0), Vector2D::new(6.0, -2.0));
        assert_eq!(a, Vector2D::new(3.0, -1.0));
        assert_eq!(b, Vector2D::new(1.0, 1.0));

        let mut c = Vector2D::copy(&a);
        c.scale(0.0);
        assert_eq!(a, Vector2D::new(3.0, -1.0));
    }

    #[test]
    fn test_length() {
        assert_eq!(Vector2D::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2D::ZERO.length(), 0.0);
    }

    #[test]
    fn test_glam_conversion() {
        let v: Vec2 = Vector2D::new(1.5, -2.0).into();
        assert_eq!(v, Vec2::new(1.5, -2.0));
        assert_eq!(Vector2D::from(v), Vector2D::new(1.5, -2.0));
    }
}
