//! BhittiNav - Reactive wall-following controller for differential-drive
//! robots.
//!
//! # Architecture
//!
//! The crate is organized into layers, leaf to root:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                   threads/                          │  ← Decision loop
//! │              (control thread, ticker)               │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                 io/ and sim/                        │  ← Boundary
//! │       (sensor feed, command sink, simulator)        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   control/                          │  ← Decisions
//! │   (rule table, staleness, loop closure, follower)   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  perception/                        │  ← Reduction
//! │               (sector windowing)                    │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Decision loop
//!
//! Telemetry (scans, odometry) updates controller state as it arrives.
//! Commands are only produced by the fixed-period tick: staleness is
//! resolved first, then the ordered rule table picks a command from the
//! current sector snapshot and the loop-closure flag, and the command is
//! scaled by the staleness factor before it reaches the sink. No command
//! is emitted before the first scan.

// Layer 1: Core foundation (no internal deps)
pub mod core;

// Layer 2: Perception (depends on core)
pub mod perception;

// Layer 3: Control (depends on core, perception)
pub mod control;

// Layer 4: Boundary (depends on core)
pub mod io;
pub mod sim;

// Layer 5: Thread infrastructure (depends on all layers)
pub mod threads;

pub mod config;
pub mod error;

// Convenience re-exports (flat namespace for common use)
pub use crate::config::FollowerConfig;
pub use crate::control::{
    LoopClosureDetector, LoopPhase, Rule, RuleTable, StalenessTracker, TickCommand, WallFollower,
};
pub use crate::core::types::{
    LaserScan, OdometrySample, Point2D, Pose2D, Quaternion, Twist2D, SCAN_BEAMS,
};
pub use crate::error::{FollowerError, Result};
pub use crate::io::{CommandSink, SensorEvent};
pub use crate::perception::{Sector, SectorReading, SectorReducer};
pub use crate::threads::ControlThread;
