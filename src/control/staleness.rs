//! Scan staleness tracking with exponential velocity decay.

/// Tracks how many update cycles have passed without a fresh scan and
/// derives the velocity scale factor for the current cycle.
///
/// The scale is `base_factor ^ cycles_since_fresh`: 1.0 immediately after
/// fresh data, decaying toward (but never reaching) zero the longer the
/// scan feed stays quiet. The robot winds down instead of driving on old
/// perception or stopping abruptly.
#[derive(Debug, Clone)]
pub struct StalenessTracker {
    base_factor: f32,
    cycles_since_fresh: u32,
    scan_pending: bool,
    has_received_scan: bool,
}

impl StalenessTracker {
    /// Create a tracker with the given per-cycle decay factor.
    pub fn new(base_factor: f32) -> Self {
        Self {
            base_factor,
            cycles_since_fresh: 0,
            scan_pending: false,
            has_received_scan: false,
        }
    }

    /// Record that a fresh scan arrived since the last tick.
    pub fn note_scan(&mut self) {
        self.scan_pending = true;
        self.has_received_scan = true;
    }

    /// Resolve fresh vs. stale for the current tick.
    ///
    /// Must be called exactly once per periodic update, before the rule
    /// table is evaluated.
    pub fn tick(&mut self) {
        if self.scan_pending {
            self.scan_pending = false;
            self.cycles_since_fresh = 0;
        } else {
            self.cycles_since_fresh += 1;
        }
    }

    /// Velocity scale factor for the current cycle.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.base_factor.powi(self.cycles_since_fresh as i32)
    }

    /// Whether at least one scan has ever arrived.
    #[inline]
    pub fn has_received_scan(&self) -> bool {
        self.has_received_scan
    }

    /// Cycles since the last fresh scan.
    #[inline]
    pub fn cycles_since_fresh(&self) -> u32 {
        self.cycles_since_fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_scan_gives_unit_scale() {
        let mut tracker = StalenessTracker::new(0.8);
        tracker.note_scan();
        tracker.tick();
        assert_relative_eq!(tracker.scale(), 1.0);
        assert_eq!(tracker.cycles_since_fresh(), 0);
    }

    #[test]
    fn test_scale_decays_each_stale_tick() {
        let mut tracker = StalenessTracker::new(0.8);
        tracker.note_scan();
        tracker.tick();

        let mut previous = tracker.scale();
        for _ in 0..5 {
            tracker.tick();
            let scale = tracker.scale();
            assert!(scale < previous);
            assert!(scale > 0.0);
            previous = scale;
        }
        // 0.8^5 after five stale ticks
        assert_relative_eq!(tracker.scale(), 0.8f32.powi(5), epsilon = 1e-6);
    }

    #[test]
    fn test_fresh_scan_resets_decay() {
        let mut tracker = StalenessTracker::new(0.8);
        tracker.note_scan();
        tracker.tick();
        tracker.tick();
        tracker.tick();
        assert!(tracker.scale() < 1.0);

        tracker.note_scan();
        tracker.tick();
        assert_relative_eq!(tracker.scale(), 1.0);
    }

    #[test]
    fn test_no_scan_received_flag() {
        let mut tracker = StalenessTracker::new(0.8);
        assert!(!tracker.has_received_scan());
        tracker.note_scan();
        assert!(tracker.has_received_scan());
    }
}
