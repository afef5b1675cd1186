//! Core data types shared across the controller.

mod odometry;
mod pose;
mod scan;
mod twist;

pub use odometry::OdometrySample;
pub use pose::{Point2D, Pose2D, Quaternion};
pub use scan::{LaserScan, SCAN_BEAMS};
pub use twist::Twist2D;
