//! Laser scan type.

use serde::{Deserialize, Serialize};

/// Number of range samples in a full-circle scan (one per degree).
pub const SCAN_BEAMS: usize = 360;

/// A full-circle laser scan in the robot frame.
///
/// Index 0 points straight ahead; indices increase counter-clockwise at
/// 1° resolution. Samples of 0 or NaN are invalid returns and are treated
/// as `range_max` by consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserScan {
    /// Maximum valid range in meters
    pub range_max: f32,
    /// Range measurements in meters, one per degree
    pub ranges: Vec<f32>,
}

impl LaserScan {
    /// Create a new scan.
    pub fn new(ranges: Vec<f32>, range_max: f32) -> Self {
        Self { range_max, ranges }
    }

    /// A scan with every beam at maximum range.
    pub fn open(range_max: f32) -> Self {
        Self {
            range_max,
            ranges: vec![range_max; SCAN_BEAMS],
        }
    }
}
