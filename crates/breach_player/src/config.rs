//! Player tuning

use serde::{Deserialize, Serialize};

/// Locomotion tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walk speed in m/s
    pub walk_speed: f32,

    /// Sprint speed in m/s
    pub sprint_speed: f32,

    /// Interpolation rate toward a non-zero target (1/s)
    pub acceleration: f32,

    /// Interpolation rate toward zero (1/s)
    pub deceleration: f32,

    /// Below this speed a stopping player snaps to rest
    pub stop_epsilon: f32,

    /// Facing turn rate in rad/s
    pub turn_rate: f32,

    /// Minimum speed before facing follows velocity
    pub facing_threshold: f32,

    /// Horizontal collision radius in meters
    pub collision_radius: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 4.0,
            sprint_speed: 7.0,
            acceleration: 12.0,
            deceleration: 10.0,
            stop_epsilon: 0.05,
            turn_rate: 10.0,
            facing_threshold: 0.1,
            collision_radius: 0.35,
        }
    }
}

/// Dodge tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeConfig {
    /// Dodge length in seconds
    pub duration: f32,

    /// Dodge speed in m/s
    pub speed: f32,

    /// Time after a dodge ends before another may start
    pub cooldown: f32,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            duration: 0.25,
            speed: 14.0,
            cooldown: 0.8,
        }
    }
}

/// Over-the-shoulder camera tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Radians per pointer pixel
    pub sensitivity: f32,

    /// Lowest pitch (looking down)
    pub min_pitch: f32,

    /// Highest pitch (looking up)
    pub max_pitch: f32,

    /// Sideways offset of the pivot (positive = right shoulder)
    pub shoulder_offset: f32,

    /// Pivot height above the player reference point
    pub height: f32,

    /// Distance behind the pivot when nothing is in the way
    pub distance: f32,

    /// Closest the camera may be pulled in
    pub min_distance: f32,

    /// Gap kept between the camera and an occluding wall
    pub occlusion_padding: f32,

    /// Position smoothing rate (1/s)
    pub position_smoothing: f32,

    /// Rotation smoothing rate (1/s)
    pub rotation_smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.0025,
            min_pitch: -1.2,
            max_pitch: 1.0,
            shoulder_offset: 0.6,
            height: 0.7,
            distance: 3.5,
            min_distance: 0.4,
            occlusion_padding: 0.2,
            position_smoothing: 12.0,
            rotation_smoothing: 20.0,
        }
    }
}
