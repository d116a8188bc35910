//! Timed forces applied to bodies

use super::vector::Vector2D;
use crate::consts::EPSILON;

/// A constant push held for a limited number of simulation time units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    pub direction: Vector2D,
    /// Decremented by the owning body each update it contributes to
    pub remaining_time: f32,
}

impl Force {
    pub const fn new(direction: Vector2D, remaining_time: f32) -> Self {
        Self {
            direction,
            remaining_time,
        }
    }

    /// Whether the force still contributes to the next update
    #[inline]
    pub fn is_live(&self) -> bool {
        self.remaining_time > EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liveness_threshold() {
        let dir = Vector2D::new(1.0, 0.0);
        assert!(Force::new(dir, 1.0).is_live());
        assert!(!Force::new(dir, 0.0).is_live());
        assert!(!Force::new(dir, EPSILON).is_live());
        assert!(!Force::new(dir, -0.5).is_live());
    }
}
