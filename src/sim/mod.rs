//! Built-in simulation for running without robot hardware.
//!
//! A rectangular room with a ray-cast lidar and differential-drive
//! kinematics. The simulator stands in for the host middleware at the
//! transport boundary: it produces [`SensorEvent`]s and consumes the
//! commands the controller emits.
//!
//! [`SensorEvent`]: crate::io::SensorEvent

mod robot;
mod room;

pub use robot::{RobotSim, SimConfig};
pub use room::RoomMap;
