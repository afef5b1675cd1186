//! Control: staleness tracking, loop-closure detection, rule evaluation
//! and the wall follower that ties them together.

mod follower;
mod loop_closure;
mod rules;
mod staleness;

pub use follower::{TickCommand, WallFollower};
pub use loop_closure::{LoopClosureDetector, LoopPhase};
pub use rules::{Condition, Rule, RuleTable};
pub use staleness::StalenessTracker;
