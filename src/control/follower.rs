//! The wall follower: one owner for all reactive controller state.
//!
//! Sensor handlers only update state; commands are produced exclusively by
//! the periodic tick, which resolves staleness first and then evaluates the
//! rule table against a single consistent sector snapshot.

use crate::config::FollowerConfig;
use crate::control::{LoopClosureDetector, RuleTable, StalenessTracker};
use crate::core::types::{LaserScan, OdometrySample, Twist2D};
use crate::error::Result;
use crate::perception::{Sector, SectorReading, SectorReducer};

/// Outcome of one periodic update.
#[derive(Debug, Clone, Copy)]
pub struct TickCommand {
    /// Final velocity command (rule command × staleness scale).
    pub velocity: Twist2D,
    /// Name of the rule that fired.
    pub rule: &'static str,
    /// Staleness scale factor applied this cycle.
    pub scale: f32,
}

/// Reactive wall-following controller.
///
/// Call [`on_scan`](Self::on_scan) and [`on_odometry`](Self::on_odometry)
/// as telemetry arrives and [`on_tick`](Self::on_tick) at a fixed period.
/// No command is produced before the first scan has been reduced.
pub struct WallFollower {
    reducer: SectorReducer,
    rules: RuleTable,
    staleness: StalenessTracker,
    loop_closure: LoopClosureDetector,
    sectors: SectorReading,
    yaw: f32,
}

impl WallFollower {
    /// Create a follower from configuration.
    pub fn new(config: &FollowerConfig) -> Self {
        Self {
            reducer: SectorReducer::new(config.perception.beam_half_width_deg),
            rules: RuleTable::new(&config.rules, &config.drive),
            staleness: StalenessTracker::new(config.staleness.base_factor),
            loop_closure: LoopClosureDetector::new(config.loop_closure.position_threshold),
            sectors: SectorReading::uniform(0.0),
            yaw: 0.0,
        }
    }

    /// Ingest one laser scan, replacing the sector snapshot.
    pub fn on_scan(&mut self, scan: &LaserScan) -> Result<()> {
        self.sectors = self.reducer.reduce(scan)?;
        self.staleness.note_scan();
        log::trace!(
            "Scan reduced, front distance {:.2} m",
            self.sectors.get(Sector::Front)
        );
        Ok(())
    }

    /// Ingest one odometry sample.
    pub fn on_odometry(&mut self, sample: &OdometrySample) {
        self.yaw = sample.orientation.yaw();
        self.loop_closure.update(sample.position());
        log::trace!(
            "Position ({:.2}, {:.2}), yaw {:.2}",
            sample.x,
            sample.y,
            self.yaw
        );
    }

    /// Run one periodic update.
    ///
    /// Returns `None` until the first scan has arrived; afterwards always
    /// returns the scaled command selected by the rule table.
    pub fn on_tick(&mut self) -> Option<TickCommand> {
        if !self.staleness.has_received_scan() {
            return None;
        }

        self.staleness.tick();
        let scale = self.staleness.scale();
        let rule = self.rules.evaluate(&self.sectors, self.loop_closure.near_start());

        Some(TickCommand {
            velocity: rule.command().scaled(scale),
            rule: rule.name(),
            scale,
        })
    }

    /// Latest heading from odometry, in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Whether a loop closure has been observed.
    #[inline]
    pub fn near_start(&self) -> bool {
        self.loop_closure.near_start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Quaternion;
    use approx::assert_relative_eq;

    fn follower() -> WallFollower {
        WallFollower::new(&FollowerConfig::default())
    }

    fn open_scan() -> LaserScan {
        LaserScan::open(3.5)
    }

    #[test]
    fn test_no_command_before_first_scan() {
        let mut follower = follower();
        assert!(follower.on_tick().is_none());
        // Odometry alone does not enable the controller.
        follower.on_odometry(&OdometrySample::new(0.0, 0.0, Quaternion::identity()));
        assert!(follower.on_tick().is_none());
    }

    #[test]
    fn test_first_scan_enables_commands() {
        let mut follower = follower();
        follower.on_scan(&open_scan()).unwrap();
        let cmd = follower.on_tick().expect("command after first scan");
        assert_relative_eq!(cmd.scale, 1.0);
        // Fully open space fires the seek-wall rule at full scale.
        assert_eq!(cmd.rule, "left-open-seek-wall");
        assert_relative_eq!(cmd.velocity.linear, 0.2);
        assert_relative_eq!(cmd.velocity.angular, 1.5);
    }

    #[test]
    fn test_stale_ticks_decay_command() {
        let mut follower = follower();
        follower.on_scan(&open_scan()).unwrap();
        let first = follower.on_tick().unwrap();
        assert_relative_eq!(first.scale, 1.0);

        let mut previous = first.velocity.linear;
        for _ in 0..5 {
            let cmd = follower.on_tick().unwrap();
            assert_eq!(cmd.rule, first.rule); // same rule, shrinking command
            assert!(cmd.velocity.linear < previous);
            previous = cmd.velocity.linear;
        }

        let cmd = follower.on_tick().unwrap();
        assert_relative_eq!(cmd.scale, 0.8f32.powi(6), epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_scan_keeps_previous_snapshot() {
        let mut follower = follower();
        follower.on_scan(&open_scan()).unwrap();
        follower.on_tick().unwrap();

        let bad = LaserScan::new(vec![1.0; 90], 3.5);
        assert!(follower.on_scan(&bad).is_err());
        // Controller still runs on the last good snapshot; the bad scan
        // did not count as fresh, so the scale decays.
        let cmd = follower.on_tick().unwrap();
        assert!(cmd.scale < 1.0);
    }

    #[test]
    fn test_loop_closure_stops_robot() {
        let mut follower = follower();
        follower.on_scan(&open_scan()).unwrap();

        let q = Quaternion::identity();
        follower.on_odometry(&OdometrySample::new(0.0, 0.0, q));
        follower.on_odometry(&OdometrySample::new(1.0, 1.0, q));
        follower.on_odometry(&OdometrySample::new(0.05, 0.05, q));
        assert!(follower.near_start());

        let cmd = follower.on_tick().unwrap();
        assert_eq!(cmd.rule, "loop-closed-stop");
        assert_eq!(cmd.velocity, Twist2D::zero());
    }

    #[test]
    fn test_yaw_tracked_from_odometry() {
        let mut follower = follower();
        follower.on_odometry(&OdometrySample::new(0.0, 0.0, Quaternion::from_yaw(1.2)));
        assert_relative_eq!(follower.yaw(), 1.2, epsilon = 1e-6);
    }
}
