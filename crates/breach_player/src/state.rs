//! Player state owned by the controller

use crate::dodge::{Dodge, DodgeState};
use glam::Vec3;

/// Everything the controller mutates each frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Reference point in world space
    pub position: Vec3,
    /// Current velocity (horizontal only, y stays 0)
    pub velocity: Vec3,
    /// Body facing, radians, 0 looks toward -Z
    pub facing_yaw: f32,
    /// Camera horizontal angle
    pub camera_yaw: f32,
    /// Camera vertical angle (clamped)
    pub camera_pitch: f32,
    /// Dodge sub-state and cooldown
    pub dodge: Dodge,
    /// Always true: the core has no jumping or falling
    pub grounded: bool,
}

impl PlayerState {
    /// State at rest at `position`
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            facing_yaw: 0.0,
            camera_yaw: 0.0,
            camera_pitch: 0.0,
            dodge: Dodge::default(),
            grounded: true,
        }
    }

    /// Face (and look) along `yaw`
    pub fn facing(mut self, yaw: f32) -> Self {
        self.facing_yaw = yaw;
        self.camera_yaw = yaw;
        self
    }

    /// Horizontal speed
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Whether a dodge is in progress
    pub fn is_dodging(&self) -> bool {
        matches!(self.dodge.state, DodgeState::Dodging { .. })
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
