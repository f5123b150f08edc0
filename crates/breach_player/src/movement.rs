//! Player controller
//!
//! Yaw convention: 0 faces -Z, positive yaw turns toward +X.

use crate::camera::CameraRig;
use crate::config::{CameraConfig, DodgeConfig, MovementConfig};
use crate::input::PlayerInput;
use crate::state::PlayerState;
use breach_core::context::PlayerPosition;
use breach_physics::aabb::Aabb;
use breach_physics::resolve::{resolve_movement, Resolution};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Horizontal forward vector for a yaw
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Horizontal right vector for a yaw
#[inline]
pub fn right_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Yaw that faces along a horizontal direction
#[inline]
pub fn yaw_from_direction(direction: Vec3) -> f32 {
    direction.x.atan2(-direction.z)
}

/// Wrap an angle into [-PI, PI]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped < -PI {
        wrapped += TAU;
    }
    wrapped
}

/// Integrates input into the player state once per frame
#[derive(Debug, Clone)]
pub struct PlayerController {
    state: PlayerState,
    movement: MovementConfig,
    dodge: DodgeConfig,
    camera: CameraRig,
    published: PlayerPosition,
}

impl PlayerController {
    /// Create a controller at `spawn` that publishes into `published`
    pub fn new(published: PlayerPosition, spawn: Vec3) -> Self {
        Self {
            state: PlayerState::at(spawn),
            movement: MovementConfig::default(),
            dodge: DodgeConfig::default(),
            camera: CameraRig::default(),
            published,
        }
    }

    /// Set movement tuning
    pub fn with_movement(mut self, movement: MovementConfig) -> Self {
        self.movement = movement;
        self
    }

    /// Set dodge tuning
    pub fn with_dodge(mut self, dodge: DodgeConfig) -> Self {
        self.dodge = dodge;
        self
    }

    /// Set camera tuning
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = CameraRig::new(camera);
        self
    }

    /// Start facing (and looking) along `yaw`
    pub fn with_facing(mut self, yaw: f32) -> Self {
        self.state = self.state.facing(yaw);
        self
    }

    /// Current state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Camera rig
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Movement tuning
    pub fn movement_config(&self) -> &MovementConfig {
        &self.movement
    }

    /// Move the player without integrating (respawn, scripted placement)
    pub fn teleport(&mut self, position: Vec3) {
        self.state.position = position;
        self.state.velocity = Vec3::ZERO;
        self.published.publish(position);
    }

    /// Publish the current position without stepping
    pub fn publish(&self) {
        self.published.publish(self.state.position);
    }

    /// Speed cap for the current modifiers (dodge excluded)
    pub fn active_cap(&self, input: &PlayerInput) -> f32 {
        if input.sprint {
            self.movement.sprint_speed
        } else {
            self.movement.walk_speed
        }
    }

    /// Advance one frame.
    ///
    /// With `frozen` set (hacking overlay open) input is ignored entirely:
    /// position, velocity and camera angles hold. The position is still
    /// published so readers see a value every frame.
    pub fn update(
        &mut self,
        input: &PlayerInput,
        dt: f32,
        colliders: &[Aabb],
        frozen: bool,
    ) -> Resolution {
        if frozen || dt <= 0.0 {
            self.camera.follow(&self.state, colliders, dt.max(0.0));
            self.publish();
            return Resolution {
                position: self.state.position,
                blocked: [false; 3],
            };
        }

        self.camera
            .apply_look(&mut self.state, input.look_delta, input.pointer_captured);

        let wish = self.wish_direction(input);
        self.update_dodge(input, wish, dt);
        self.update_velocity(input, wish, dt);

        let candidate = self.state.position + self.state.velocity * dt;
        let resolution = resolve_movement(
            self.state.position,
            candidate,
            colliders.iter().copied(),
            self.movement.collision_radius,
        );
        self.state.position = resolution.position;

        self.update_facing(dt);
        self.camera.follow(&self.state, colliders, dt);
        self.publish();
        resolution
    }

    /// Camera-relative world direction of the key axes (zero with no input)
    fn wish_direction(&self, input: &PlayerInput) -> Vec3 {
        let axis = input.axis();
        forward_from_yaw(self.state.camera_yaw) * axis.y
            + right_from_yaw(self.state.camera_yaw) * axis.x
    }

    fn update_dodge(&mut self, input: &PlayerInput, wish: Vec3, dt: f32) {
        self.state.dodge.tick_cooldown(dt);
        if !input.dodge {
            return;
        }

        let horizontal = Vec3::new(self.state.velocity.x, 0.0, self.state.velocity.z);
        let direction = if wish != Vec3::ZERO {
            wish
        } else if horizontal.length() > self.movement.facing_threshold {
            horizontal
        } else {
            forward_from_yaw(self.state.facing_yaw)
        };
        self.state.dodge.try_start(direction, &self.dodge);
    }

    fn update_velocity(&mut self, input: &PlayerInput, wish: Vec3, dt: f32) {
        if let Some(direction) = self.state.dodge.advance(dt, &self.dodge) {
            self.state.velocity = direction * self.dodge.speed;
            return;
        }

        let cap = self.active_cap(input);
        let target = if wish == Vec3::ZERO {
            Vec3::ZERO
        } else {
            wish * cap
        };
        let rate = if target == Vec3::ZERO {
            self.movement.deceleration
        } else {
            self.movement.acceleration
        };

        let t = (rate * dt).min(1.0);
        let velocity = self.state.velocity.lerp(target, t).clamp_length_max(cap);

        self.state.velocity = if target == Vec3::ZERO && velocity.length() < self.movement.stop_epsilon {
            Vec3::ZERO
        } else {
            velocity
        };
    }

    fn update_facing(&mut self, dt: f32) {
        let velocity = self.state.velocity;
        if Vec3::new(velocity.x, 0.0, velocity.z).length() <= self.movement.facing_threshold {
            return;
        }
        let target = yaw_from_direction(velocity);
        let diff = wrap_angle(target - self.state.facing_yaw);
        let max_turn = self.movement.turn_rate * dt;
        self.state.facing_yaw = wrap_angle(self.state.facing_yaw + diff.clamp(-max_turn, max_turn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn controller() -> PlayerController {
        PlayerController::new(PlayerPosition::new(), Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_yaw_helpers() {
        assert_relative_eq!(forward_from_yaw(0.0).z, -1.0);
        assert_relative_eq!(right_from_yaw(0.0).x, 1.0);
        assert_relative_eq!(yaw_from_direction(Vec3::X), PI / 2.0);
        assert_relative_eq!(wrap_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-5);
        assert_relative_eq!(wrap_angle(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_walk_speed_never_exceeded() {
        let mut c = controller();
        let input = PlayerInput::new().forward().right();
        for _ in 0..240 {
            c.update(&input, DT, &[], false);
            assert!(c.state().speed() <= c.movement_config().walk_speed + 1e-4);
        }
        assert_relative_eq!(c.state().speed(), 4.0, epsilon = 1e-3);
    }

    #[test]
    fn test_sprint_release_respects_walk_cap() {
        let mut c = controller();
        let sprint = PlayerInput::new().forward().sprinting();
        for _ in 0..120 {
            c.update(&sprint, DT, &[], false);
        }
        assert!(c.state().speed() > 6.9);

        let walk = PlayerInput::new().forward();
        c.update(&walk, DT, &[], false);
        assert!(c.state().speed() <= 4.0 + 1e-4);
    }

    #[test]
    fn test_decelerates_to_exact_rest() {
        let mut c = controller();
        for _ in 0..60 {
            c.update(&PlayerInput::new().forward(), DT, &[], false);
        }
        let mut last = c.state().speed();
        for _ in 0..600 {
            c.update(&PlayerInput::new(), DT, &[], false);
            assert!(c.state().speed() <= last);
            last = c.state().speed();
        }
        assert_eq!(c.state().velocity, Vec3::ZERO);
    }

    #[test]
    fn test_forward_is_camera_relative() {
        let mut c = controller().with_facing(PI / 2.0);
        for _ in 0..30 {
            c.update(&PlayerInput::new().forward(), DT, &[], false);
        }
        assert!(c.state().position.x > 1.0);
        assert_relative_eq!(c.state().position.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_frozen_holds_everything() {
        let mut c = controller();
        for _ in 0..10 {
            c.update(&PlayerInput::new().forward(), DT, &[], false);
        }
        let before = c.state().clone();

        let input = PlayerInput::new().back().dodging().with_look(glam::Vec2::new(50.0, 20.0));
        for _ in 0..30 {
            c.update(&input, DT, &[], true);
        }
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_publishes_after_collision() {
        let published = PlayerPosition::new();
        let mut c = PlayerController::new(published.clone(), Vec3::new(0.0, 1.0, 0.0));
        let wall = Aabb::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::new(5.0, 3.0, -0.5));

        for _ in 0..120 {
            c.update(&PlayerInput::new().forward(), DT, &[wall], false);
        }
        let position = published.get().unwrap();
        assert_eq!(position, c.state().position);
        // Stopped short of the wall face plus radius
        assert!(position.z >= -0.5 + 0.35 - 1e-4);
    }

    #[test]
    fn test_facing_turns_toward_velocity() {
        let mut c = controller();
        for _ in 0..120 {
            c.update(&PlayerInput::new().right(), DT, &[], false);
        }
        assert_relative_eq!(c.state().facing_yaw, PI / 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_dodge_from_idle_uses_facing() {
        let mut c = controller();
        c.update(&PlayerInput::new().dodging(), DT, &[], false);

        assert!(c.state().is_dodging());
        assert_relative_eq!(c.state().velocity.z, -14.0, epsilon = 1e-4);
    }
}
