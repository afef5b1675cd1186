//! Odometry-based loop-closure detection.

use crate::core::types::Point2D;

/// Loop-closure detection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// No pose received yet; the next sample captures the start position.
    #[default]
    Uninitialized,
    /// Within the threshold box around the start position.
    AtStart,
    /// Has moved more than the threshold away from the start.
    Departed,
}

/// Detects that the robot has returned near its starting position after
/// having moved away from it.
///
/// The departure and return tests use the absolute difference on each axis
/// independently (a threshold box, not a Euclidean radius). On a detected
/// closure the `near_start` flag is raised and the detector re-arms: the
/// next pose sample captures a new start position and a further loop can
/// be detected. The flag itself is sticky — once raised it stays raised,
/// which the rule table treats as a standing stop condition.
#[derive(Debug, Clone)]
pub struct LoopClosureDetector {
    threshold: f32,
    phase: LoopPhase,
    start: Point2D,
    near_start: bool,
}

impl LoopClosureDetector {
    /// Create a detector with the given per-axis position threshold (meters).
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            phase: LoopPhase::Uninitialized,
            start: Point2D::default(),
            near_start: false,
        }
    }

    /// Feed one position sample.
    pub fn update(&mut self, position: Point2D) {
        let dx = (position.x - self.start.x).abs();
        let dy = (position.y - self.start.y).abs();

        match self.phase {
            LoopPhase::Uninitialized => {
                self.start = position;
                self.phase = LoopPhase::AtStart;
                log::debug!("Loop detector armed at ({:.2}, {:.2})", position.x, position.y);
            }
            LoopPhase::AtStart => {
                if dx > self.threshold || dy > self.threshold {
                    self.phase = LoopPhase::Departed;
                    log::debug!("Departed start position (dx={:.2}, dy={:.2})", dx, dy);
                }
            }
            LoopPhase::Departed => {
                if dx < self.threshold && dy < self.threshold {
                    log::info!(
                        "Near start: loop closed at ({:.2}, {:.2})",
                        position.x,
                        position.y
                    );
                    self.near_start = true;
                    // Re-arm so the next sample captures a new start.
                    self.phase = LoopPhase::Uninitialized;
                }
            }
        }
    }

    /// Whether a loop closure has been observed.
    #[inline]
    pub fn near_start(&self) -> bool {
        self.near_start
    }

    /// Current detection phase.
    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> LoopClosureDetector {
        LoopClosureDetector::new(0.2)
    }

    #[test]
    fn test_first_sample_captures_start() {
        let mut det = detector();
        det.update(Point2D::new(1.0, 2.0));
        assert_eq!(det.phase(), LoopPhase::AtStart);
        assert!(!det.near_start());
    }

    #[test]
    fn test_departure_on_either_axis() {
        let mut det = detector();
        det.update(Point2D::new(0.0, 0.0));
        // Within the box on both axes: still at start.
        det.update(Point2D::new(0.1, 0.1));
        assert_eq!(det.phase(), LoopPhase::AtStart);
        // Over the threshold on y alone is enough.
        det.update(Point2D::new(0.1, 0.3));
        assert_eq!(det.phase(), LoopPhase::Departed);
    }

    #[test]
    fn test_loop_closure_sets_near_start() {
        let mut det = detector();
        det.update(Point2D::new(0.0, 0.0));
        det.update(Point2D::new(1.0, 1.0));
        assert_eq!(det.phase(), LoopPhase::Departed);
        assert!(!det.near_start());

        det.update(Point2D::new(0.05, 0.05));
        assert!(det.near_start());
    }

    #[test]
    fn test_return_requires_both_axes() {
        let mut det = detector();
        det.update(Point2D::new(0.0, 0.0));
        det.update(Point2D::new(1.0, 1.0));
        // Back on x only: not a closure.
        det.update(Point2D::new(0.05, 1.0));
        assert!(!det.near_start());
        assert_eq!(det.phase(), LoopPhase::Departed);
    }

    #[test]
    fn test_rearms_after_closure() {
        let mut det = detector();
        det.update(Point2D::new(0.0, 0.0));
        det.update(Point2D::new(1.0, 1.0));
        det.update(Point2D::new(0.0, 0.0));
        assert!(det.near_start());
        assert_eq!(det.phase(), LoopPhase::Uninitialized);

        // A new start is captured and a second loop is detected.
        det.update(Point2D::new(2.0, 2.0));
        assert_eq!(det.phase(), LoopPhase::AtStart);
        det.update(Point2D::new(3.0, 3.0));
        assert_eq!(det.phase(), LoopPhase::Departed);
        det.update(Point2D::new(2.0, 2.0));
        assert_eq!(det.phase(), LoopPhase::Uninitialized);
    }

    #[test]
    fn test_near_start_is_sticky() {
        let mut det = detector();
        det.update(Point2D::new(0.0, 0.0));
        det.update(Point2D::new(1.0, 1.0));
        det.update(Point2D::new(0.0, 0.0));
        assert!(det.near_start());
        // Moving away again does not clear the flag.
        det.update(Point2D::new(5.0, 5.0));
        det.update(Point2D::new(6.0, 6.0));
        assert!(det.near_start());
    }
}
