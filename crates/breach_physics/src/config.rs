//! Dynamic collider filtering configuration

use serde::{Deserialize, Serialize};

/// Rules applied to world objects before they become blocking colliders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderFilter {
    /// Objects shorter than this are floor clutter, not walls
    pub min_height: f32,

    /// Objects whose bottom is at or above this height are ceiling geometry
    pub head_height: f32,

    /// Bottom of the vertical band every stored collider is clamped to
    pub floor_y: f32,

    /// Top of the vertical band every stored collider is clamped to
    pub ceiling_y: f32,

    /// Per-coordinate tolerance when comparing bounds for deduplication
    pub dedup_tolerance: f32,
}

impl Default for ColliderFilter {
    fn default() -> Self {
        Self {
            min_height: 0.5,
            head_height: 2.2,
            floor_y: 0.0,
            ceiling_y: 3.0,
            dedup_tolerance: 0.01,
        }
    }
}

impl ColliderFilter {
    /// Accept everything, only clamping to the band (useful for tests)
    pub fn permissive() -> Self {
        Self {
            min_height: 0.0,
            head_height: f32::MAX,
            ..Default::default()
        }
    }

    /// Set the vertical band
    pub fn with_band(mut self, floor_y: f32, ceiling_y: f32) -> Self {
        self.floor_y = floor_y;
        self.ceiling_y = ceiling_y;
        self
    }
}
