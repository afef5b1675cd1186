//! Simulated differential-drive robot with a ray-cast lidar.

use serde::Deserialize;

use super::room::RoomMap;
use crate::core::math::normalize_angle;
use crate::core::types::{LaserScan, OdometrySample, Quaternion, Twist2D, SCAN_BEAMS};

/// Simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Room extent along X (meters)
    pub room_width: f32,
    /// Room extent along Y (meters)
    pub room_height: f32,
    /// Robot start X (meters)
    pub start_x: f32,
    /// Robot start Y (meters)
    pub start_y: f32,
    /// Robot start heading (radians)
    pub start_theta: f32,
    /// Lidar maximum range (meters)
    pub range_max: f32,
    /// Robot collision radius (meters)
    pub robot_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            room_width: 4.0,
            room_height: 3.0,
            start_x: 2.0,
            start_y: 1.5,
            start_theta: 0.0,
            range_max: 3.5,
            robot_radius: 0.15,
        }
    }
}

/// Simulated robot state: pose integration plus scan generation.
///
/// The scan is generated from the robot center in the robot frame, index 0
/// straight ahead and advancing counter-clockwise, matching what the real
/// scan feed delivers after mounting-offset correction.
pub struct RobotSim {
    map: RoomMap,
    x: f32,
    y: f32,
    theta: f32,
    range_max: f32,
    robot_radius: f32,
}

impl RobotSim {
    /// Create a simulated robot from configuration.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            map: RoomMap::new(config.room_width, config.room_height),
            x: config.start_x,
            y: config.start_y,
            theta: config.start_theta,
            range_max: config.range_max,
            robot_radius: config.robot_radius,
        }
    }

    /// Advance the robot by `dt` seconds under the given command.
    ///
    /// Collision handling is stop-at-wall: a step that would leave the
    /// room keeps the previous position (heading still integrates).
    pub fn step(&mut self, command: Twist2D, dt: f32) {
        self.theta = normalize_angle(self.theta + command.angular * dt);
        let next_x = self.x + command.linear * self.theta.cos() * dt;
        let next_y = self.y + command.linear * self.theta.sin() * dt;
        if self.map.contains(next_x, next_y, self.robot_radius) {
            self.x = next_x;
            self.y = next_y;
        }
    }

    /// Generate a full-circle scan from the current pose.
    pub fn scan(&self) -> LaserScan {
        let mut ranges = Vec::with_capacity(SCAN_BEAMS);
        for deg in 0..SCAN_BEAMS {
            let local = (deg as f32).to_radians();
            let world = self.theta + local;
            ranges.push(self.map.ray_cast(self.x, self.y, world, self.range_max));
        }
        LaserScan::new(ranges, self.range_max)
    }

    /// Current pose as an odometry sample.
    pub fn odometry(&self) -> OdometrySample {
        OdometrySample::new(self.x, self.y, Quaternion::from_yaw(self.theta))
    }

    /// Current position.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Current heading in radians.
    pub fn heading(&self) -> f32 {
        self.theta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn sim() -> RobotSim {
        RobotSim::new(&SimConfig::default())
    }

    #[test]
    fn test_scan_has_full_beam_count() {
        let scan = sim().scan();
        assert_eq!(scan.ranges.len(), SCAN_BEAMS);
        assert!(scan.ranges.iter().all(|&r| r > 0.0 && r <= 3.5));
    }

    #[test]
    fn test_scan_is_robot_relative() {
        // Facing +X from the room center: beam 0 sees the right wall.
        let sim = sim();
        let scan = sim.scan();
        assert_relative_eq!(scan.ranges[0], 2.0, epsilon = 1e-4);
        // Beam 90 (robot left) sees the top wall.
        assert_relative_eq!(scan.ranges[90], 1.5, epsilon = 1e-4);
    }

    #[test]
    fn test_straight_motion() {
        let mut sim = sim();
        sim.step(Twist2D::new(0.5, 0.0), 1.0);
        let (x, y) = sim.position();
        assert_relative_eq!(x, 2.5, epsilon = 1e-5);
        assert_relative_eq!(y, 1.5, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_in_place() {
        let mut sim = sim();
        sim.step(Twist2D::new(0.0, FRAC_PI_2), 1.0);
        assert_relative_eq!(sim.heading(), FRAC_PI_2, epsilon = 1e-5);
        let (x, y) = sim.position();
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(y, 1.5);
    }

    #[test]
    fn test_stops_at_wall() {
        let mut sim = sim();
        // Drive hard toward the right wall; position must stay inside.
        for _ in 0..100 {
            sim.step(Twist2D::new(1.0, 0.0), 0.1);
        }
        let (x, _) = sim.position();
        assert!(x <= 4.0 - 0.15 + 1e-5);
    }

    #[test]
    fn test_odometry_reports_pose() {
        let mut sim = sim();
        sim.step(Twist2D::new(0.0, 1.0), 0.5);
        let sample = sim.odometry();
        assert_relative_eq!(sample.x, 2.0);
        assert_relative_eq!(sample.orientation.yaw(), 0.5, epsilon = 1e-5);
    }
}
