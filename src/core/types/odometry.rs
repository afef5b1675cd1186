//! Odometry sample type.

use serde::{Deserialize, Serialize};

use super::pose::{Point2D, Pose2D, Quaternion};

/// A single odometry update: position plus orientation.
///
/// Orientation arrives as a quaternion from the odometry source; only its
/// yaw component is meaningful for a planar robot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdometrySample {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Orientation of the robot
    pub orientation: Quaternion,
}

impl OdometrySample {
    /// Create a new sample.
    pub fn new(x: f32, y: f32, orientation: Quaternion) -> Self {
        Self { x, y, orientation }
    }

    /// Position component.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Collapse to a planar pose (yaw extracted from the quaternion).
    pub fn pose(&self) -> Pose2D {
        Pose2D::new(self.x, self.y, self.orientation.yaw())
    }
}
