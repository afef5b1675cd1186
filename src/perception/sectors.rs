//! Sector reduction of full-circle laser scans.
//!
//! The controller does not consume raw scans. Each incoming scan is reduced
//! to 12 fixed directions, 30° apart, each carrying the minimum range seen
//! in a small window around its center. Sector 0 points straight ahead and
//! sectors advance counter-clockwise, so `LeftFront` is 60° to the left.

use crate::core::math::wrap_degrees;
use crate::core::types::{LaserScan, SCAN_BEAMS};
use crate::error::{FollowerError, Result};

/// One of 12 fixed directions around the robot, 30° apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Sector {
    Front = 0,
    FrontLeft = 1,
    LeftFront = 2,
    Left = 3,
    LeftBack = 4,
    BackLeft = 5,
    Back = 6,
    BackRight = 7,
    RightBack = 8,
    Right = 9,
    RightFront = 10,
    FrontRight = 11,
}

impl Sector {
    /// Number of sectors.
    pub const COUNT: usize = 12;

    /// All sectors in index order.
    pub const ALL: [Sector; Sector::COUNT] = [
        Sector::Front,
        Sector::FrontLeft,
        Sector::LeftFront,
        Sector::Left,
        Sector::LeftBack,
        Sector::BackLeft,
        Sector::Back,
        Sector::BackRight,
        Sector::RightBack,
        Sector::Right,
        Sector::RightFront,
        Sector::FrontRight,
    ];

    /// Center angle of this sector in degrees (CCW from straight ahead).
    #[inline]
    pub fn center_deg(self) -> i32 {
        self as i32 * 30
    }
}

/// Minimum observed range per sector, in meters.
///
/// Replaced as a whole on each scan arrival so rule evaluation always sees
/// one consistent snapshot. Every value is in [0, range_max]; sectors with
/// no return closer than maximum range hold the maximum range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorReading {
    distances: [f32; Sector::COUNT],
}

impl SectorReading {
    /// A reading with every sector at the same distance.
    pub fn uniform(distance: f32) -> Self {
        Self {
            distances: [distance; Sector::COUNT],
        }
    }

    /// Distance for one sector.
    #[inline]
    pub fn get(&self, sector: Sector) -> f32 {
        self.distances[sector as usize]
    }

    /// Set the distance for one sector.
    #[inline]
    pub fn set(&mut self, sector: Sector, distance: f32) {
        self.distances[sector as usize] = distance;
    }
}

/// Reduces a full-circle scan to a [`SectorReading`].
///
/// Assumes 1° angular resolution with exactly [`SCAN_BEAMS`] samples; scans
/// of any other length are rejected rather than windowed against a
/// misaligned index.
#[derive(Debug, Clone)]
pub struct SectorReducer {
    half_width_deg: i32,
}

impl SectorReducer {
    /// Create a reducer with the given window half-width in degrees.
    pub fn new(half_width_deg: u32) -> Self {
        Self {
            half_width_deg: half_width_deg as i32,
        }
    }

    /// Reduce a scan to per-sector minimum distances.
    ///
    /// For each sector the window spans [center - half_width, center +
    /// half_width) degrees, wrapping at the 0°/360° boundary. Invalid
    /// returns (0 or NaN) count as maximum range.
    pub fn reduce(&self, scan: &LaserScan) -> Result<SectorReading> {
        if scan.ranges.len() != SCAN_BEAMS {
            return Err(FollowerError::InvalidScan {
                expected: SCAN_BEAMS,
                actual: scan.ranges.len(),
            });
        }

        let mut reading = SectorReading::uniform(scan.range_max);
        for sector in Sector::ALL {
            let center = sector.center_deg();
            let mut closest = scan.range_max;
            for offset in -self.half_width_deg..self.half_width_deg {
                let range = scan.ranges[wrap_degrees(center + offset)];
                if range.is_finite() && range > 0.0 && range < closest {
                    closest = range;
                }
            }
            reading.set(sector, closest);
        }
        Ok(reading)
    }
}
