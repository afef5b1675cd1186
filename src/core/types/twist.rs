//! Velocity command type.

use serde::{Deserialize, Serialize};

/// Robot velocity command (linear and angular).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Twist2D {
    /// Linear velocity in m/s
    pub linear: f32,
    /// Angular velocity in rad/s (CCW positive)
    pub angular: f32,
}

impl Twist2D {
    /// Create a new velocity command.
    #[inline]
    pub fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// Zero velocity (full stop).
    #[inline]
    pub fn zero() -> Self {
        Self {
            linear: 0.0,
            angular: 0.0,
        }
    }

    /// Uniformly scale both components.
    #[inline]
    pub fn scaled(&self, factor: f32) -> Twist2D {
        Twist2D {
            linear: self.linear * factor,
            angular: self.angular * factor,
        }
    }
}

impl Default for Twist2D {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scaled() {
        let cmd = Twist2D::new(0.3, -1.5);
        let scaled = cmd.scaled(0.5);
        assert_relative_eq!(scaled.linear, 0.15);
        assert_relative_eq!(scaled.angular, -0.75);
    }

    #[test]
    fn test_zero_scales_to_zero() {
        let scaled = Twist2D::zero().scaled(0.8);
        assert_eq!(scaled, Twist2D::zero());
    }
}
