//! Over-the-shoulder camera rig
//!
//! The rig trails the player at a fixed shoulder offset. When a collider sits
//! between the pivot and the desired camera spot, the camera is pulled in to
//! just in front of it. Position and rotation ease toward their targets with
//! independent exponential smoothing.

use crate::config::CameraConfig;
use crate::movement::{forward_from_yaw, right_from_yaw, wrap_angle};
use crate::state::PlayerState;
use breach_physics::aabb::Aabb;
use breach_physics::query::line_of_sight;
use glam::Vec3;

/// Smoothed camera pose
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    config: CameraConfig,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    /// Distance actually used last frame after occlusion
    effective_distance: f32,
    /// First update snaps instead of easing in from the origin
    initialized: bool,
}

impl CameraRig {
    /// Create a rig
    pub fn new(config: CameraConfig) -> Self {
        Self {
            effective_distance: config.distance,
            config,
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            initialized: false,
        }
    }

    /// Tuning in use
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Smoothed camera position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Smoothed yaw
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Smoothed pitch
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Distance after occlusion avoidance
    pub fn effective_distance(&self) -> f32 {
        self.effective_distance
    }

    /// Unit view direction from the smoothed yaw/pitch
    pub fn look_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Accumulate pointer movement into the state's camera angles.
    /// Nothing happens without pointer capture.
    pub fn apply_look(&self, state: &mut PlayerState, delta: glam::Vec2, captured: bool) {
        if !captured {
            return;
        }
        state.camera_yaw = wrap_angle(state.camera_yaw + delta.x * self.config.sensitivity);
        state.camera_pitch = (state.camera_pitch - delta.y * self.config.sensitivity)
            .clamp(self.config.min_pitch, self.config.max_pitch);
    }

    /// Pivot the camera orbits: above the player, shifted onto the shoulder
    pub fn pivot(&self, state: &PlayerState) -> Vec3 {
        state.position
            + Vec3::Y * self.config.height
            + right_from_yaw(state.camera_yaw) * self.config.shoulder_offset
    }

    /// Target position for this frame, pulled in if a collider blocks the view
    pub fn target_position(&mut self, state: &PlayerState, colliders: &[Aabb]) -> Vec3 {
        let pivot = self.pivot(state);
        let back = -forward_from_yaw(state.camera_yaw);
        let desired = pivot + back * self.config.distance;

        self.effective_distance = match line_of_sight(pivot, desired, colliders.iter().copied()) {
            Some(hit) => (hit.distance - self.config.occlusion_padding)
                .clamp(self.config.min_distance, self.config.distance),
            None => self.config.distance,
        };
        pivot + back * self.effective_distance
    }

    /// Ease toward the target pose
    pub fn follow(&mut self, state: &PlayerState, colliders: &[Aabb], dt: f32) {
        let target = self.target_position(state, colliders);

        if !self.initialized {
            self.position = target;
            self.yaw = state.camera_yaw;
            self.pitch = state.camera_pitch;
            self.initialized = true;
            return;
        }

        let position_t = 1.0 - (-self.config.position_smoothing * dt).exp();
        let rotation_t = 1.0 - (-self.config.rotation_smoothing * dt).exp();

        self.position = self.position.lerp(target, position_t);
        self.yaw = wrap_angle(self.yaw + wrap_angle(state.camera_yaw - self.yaw) * rotation_t);
        self.pitch += (state.camera_pitch - self.pitch) * rotation_t;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn state() -> PlayerState {
        PlayerState::at(Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_unobstructed_distance() {
        let mut rig = CameraRig::default();
        rig.follow(&state(), &[], 1.0 / 60.0);

        assert_relative_eq!(rig.effective_distance(), 3.5);
        // Yaw 0 looks toward -Z, so the camera sits behind at +Z
        assert!(rig.position().z > 3.0);
        assert_relative_eq!(rig.position().x, 0.6, epsilon = 1e-5);
    }

    #[test]
    fn test_wall_behind_pulls_camera_in() {
        let mut rig = CameraRig::default();
        let wall = Aabb::new(Vec3::new(-5.0, 0.0, 2.0), Vec3::new(5.0, 3.0, 2.5));
        rig.follow(&state(), &[wall], 1.0 / 60.0);

        assert_relative_eq!(rig.effective_distance(), 1.8, epsilon = 1e-4);
        assert!(rig.position().z < 2.0);
    }

    #[test]
    fn test_pull_in_respects_min_distance() {
        let mut rig = CameraRig::default();
        let wall = Aabb::new(Vec3::new(-5.0, 0.0, 0.1), Vec3::new(5.0, 3.0, 0.5));
        rig.follow(&state(), &[wall], 1.0 / 60.0);

        assert_relative_eq!(rig.effective_distance(), 0.4);
    }

    #[test]
    fn test_look_requires_capture_and_clamps_pitch() {
        let rig = CameraRig::default();
        let mut s = state();

        rig.apply_look(&mut s, Vec2::new(100.0, 0.0), false);
        assert_eq!(s.camera_yaw, 0.0);

        rig.apply_look(&mut s, Vec2::new(100.0, -10_000.0), true);
        assert_relative_eq!(s.camera_yaw, 0.25, epsilon = 1e-6);
        assert_relative_eq!(s.camera_pitch, 1.0);
    }

    #[test]
    fn test_smoothing_approaches_target() {
        let mut rig = CameraRig::default();
        let mut s = state();
        rig.follow(&s, &[], 1.0 / 60.0);

        s.position.x += 4.0;
        rig.follow(&s, &[], 1.0 / 60.0);
        let first = rig.position().x;
        assert!(first > 0.6 && first < 4.6);

        for _ in 0..300 {
            rig.follow(&s, &[], 1.0 / 60.0);
        }
        assert_relative_eq!(rig.position().x, 4.6, epsilon = 1e-3);
    }
}
