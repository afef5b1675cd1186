//! Controller configuration.
//!
//! All thresholds and speeds used by the rule table live here rather than
//! as inline constants, so tests can parameterize them and deployments can
//! tune them from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Top-level wall-follower configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FollowerConfig {
    pub tick: TickConfig,
    pub drive: DriveConfig,
    pub rules: RuleConfig,
    pub staleness: StalenessConfig,
    pub loop_closure: LoopClosureConfig,
    pub perception: PerceptionConfig,
}

impl FollowerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = basic_toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Periodic update settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    /// Update period in milliseconds
    pub period_ms: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self { period_ms: 100 }
    }
}

/// Base drive speeds used by the rule table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// Base linear velocity (m/s)
    pub linear_vel: f32,
    /// Base angular velocity (rad/s)
    pub angular_vel: f32,
    /// Reduced linear velocity while steering toward a distant wall (m/s)
    pub seek_linear_vel: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            linear_vel: 0.3,
            angular_vel: 1.5,
            seek_linear_vel: 0.2,
        }
    }
}

/// Distance thresholds for the wall-following rules (meters).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Left-front distance above which the wall is considered lost
    pub left_front_open: f32,
    /// Front distance below which the path ahead is blocked
    pub front_blocked: f32,
    /// Near-obstacle distance for the diagonal front sectors
    pub side_near: f32,
    /// Left-front distance above which the wall is receding
    pub left_front_follow: f32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            left_front_open: 0.9,
            front_blocked: 0.7,
            side_near: 0.6,
            left_front_follow: 0.6,
        }
    }
}

/// Staleness decay settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StalenessConfig {
    /// Per-cycle velocity decay factor applied while no fresh scan arrives
    pub base_factor: f32,
}

impl Default for StalenessConfig {
    fn default() -> Self {
        Self { base_factor: 0.8 }
    }
}

/// Loop-closure detection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoopClosureConfig {
    /// Per-axis distance from the start position that counts as "near" (meters)
    pub position_threshold: f32,
}

impl Default for LoopClosureConfig {
    fn default() -> Self {
        Self {
            position_threshold: 0.2,
        }
    }
}

/// Scan reduction settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerceptionConfig {
    /// Half-width of the aggregation window around each sector center (degrees)
    pub beam_half_width_deg: u32,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            beam_half_width_deg: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = FollowerConfig::default();
        assert_eq!(config.tick.period_ms, 100);
        assert_eq!(config.drive.linear_vel, 0.3);
        assert_eq!(config.drive.angular_vel, 1.5);
        assert_eq!(config.staleness.base_factor, 0.8);
        assert_eq!(config.loop_closure.position_threshold, 0.2);
        assert_eq!(config.perception.beam_half_width_deg, 10);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[staleness]\nbase_factor = 0.9").unwrap();

        let config = FollowerConfig::load(file.path()).unwrap();
        assert_eq!(config.staleness.base_factor, 0.9);
        assert_eq!(config.tick.period_ms, 100);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(FollowerConfig::load(Path::new("/nonexistent/bhitti.toml")).is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
            [rules]
            front_blocked = 0.5

            [tick]
            period_ms = 50
        "#;
        let config: FollowerConfig = basic_toml::from_str(toml).unwrap();
        assert_eq!(config.rules.front_blocked, 0.5);
        assert_eq!(config.tick.period_ms, 50);
        // Untouched sections keep their defaults
        assert_eq!(config.rules.left_front_open, 0.9);
        assert_eq!(config.drive.linear_vel, 0.3);
    }
}
