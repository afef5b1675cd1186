//! Ordered rule table for wall-following decisions.
//!
//! The original reactive controller was a fixed if/else chain. Here each
//! branch is an explicit (condition, command) entry so the precedence is
//! auditable and each rule can be tested on its own. Evaluation is pure:
//! first matching rule wins, the fallback always applies.

use crate::config::{DriveConfig, RuleConfig};
use crate::core::types::Twist2D;
use crate::perception::{Sector, SectorReading};

/// Condition under which a rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Loop closure observed.
    NearStart,
    /// Sector distance strictly greater than the threshold (meters).
    SectorAbove(Sector, f32),
    /// Sector distance strictly less than the threshold (meters).
    SectorBelow(Sector, f32),
    /// Unconditional (the fallback rule).
    Always,
}

impl Condition {
    /// Evaluate against the current sector snapshot and near-start flag.
    fn matches(&self, sectors: &SectorReading, near_start: bool) -> bool {
        match *self {
            Condition::NearStart => near_start,
            Condition::SectorAbove(sector, threshold) => sectors.get(sector) > threshold,
            Condition::SectorBelow(sector, threshold) => sectors.get(sector) < threshold,
            Condition::Always => true,
        }
    }
}

/// One prioritized wall-following rule.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    condition: Condition,
    command: Twist2D,
}

impl Rule {
    /// Rule name for logging.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Condition under which this rule fires.
    #[inline]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Unscaled command this rule selects.
    #[inline]
    pub fn command(&self) -> Twist2D {
        self.command
    }
}

/// Ordered wall-following rule table.
///
/// Built once from configuration; evaluated fresh every cycle with no
/// hidden state beyond its inputs.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: Rule,
}

impl RuleTable {
    /// Build the table from rule thresholds and drive speeds.
    ///
    /// Precedence, first match wins:
    /// 1. loop closed → stop
    /// 2. left-front open → steer toward the wall
    /// 3. front blocked → rotate away in place
    /// 4. front-left near → turn away from the wall
    /// 5. front-right near → turn toward the wall
    /// 6. left-front receding → curve toward the wall
    /// 7. otherwise → straight ahead
    pub fn new(rules: &RuleConfig, drive: &DriveConfig) -> Self {
        let turn = drive.angular_vel;
        let forward = drive.linear_vel;

        Self {
            rules: vec![
                Rule {
                    name: "loop-closed-stop",
                    condition: Condition::NearStart,
                    command: Twist2D::zero(),
                },
                Rule {
                    name: "left-open-seek-wall",
                    condition: Condition::SectorAbove(Sector::LeftFront, rules.left_front_open),
                    command: Twist2D::new(drive.seek_linear_vel, turn),
                },
                Rule {
                    name: "front-blocked-rotate",
                    condition: Condition::SectorBelow(Sector::Front, rules.front_blocked),
                    command: Twist2D::new(0.0, -turn),
                },
                Rule {
                    name: "front-left-avoid",
                    condition: Condition::SectorBelow(Sector::FrontLeft, rules.side_near),
                    command: Twist2D::new(forward, -turn),
                },
                Rule {
                    name: "front-right-avoid",
                    condition: Condition::SectorBelow(Sector::FrontRight, rules.side_near),
                    command: Twist2D::new(forward, turn),
                },
                Rule {
                    name: "wall-receding-curve",
                    condition: Condition::SectorAbove(Sector::LeftFront, rules.left_front_follow),
                    command: Twist2D::new(forward, turn),
                },
            ],
            fallback: Rule {
                name: "follow-straight",
                condition: Condition::Always,
                command: Twist2D::new(forward, 0.0),
            },
        }
    }

    /// Select the first rule whose condition holds.
    pub fn evaluate(&self, sectors: &SectorReading, near_start: bool) -> &Rule {
        self.rules
            .iter()
            .find(|rule| rule.condition.matches(sectors, near_start))
            .unwrap_or(&self.fallback)
    }

    /// All rules in precedence order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }
}
