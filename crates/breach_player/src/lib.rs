//! Breach Player - Locomotion and Camera
//!
//! Integrates raw input into velocity, position and facing once per frame,
//! and drives an over-the-shoulder camera that pulls in when a wall would
//! block its view.
//!
//! # Movement model
//!
//! - Camera-relative directional input, diagonals normalized
//! - Walk / sprint targets with separate acceleration and deceleration rates
//! - Fixed-duration, fixed-speed dodge followed by a cooldown
//! - Axis-separated collision against AABB colliders (sliding along walls)
//!
//! # Example
//!
//! ```ignore
//! use breach_player::prelude::*;
//!
//! let mut controller = PlayerController::new(context.player_position.clone(), spawn)
//!     .with_movement(config.movement.clone())
//!     .with_dodge(config.dodge.clone());
//!
//! // Each frame:
//! controller.update(&input, delta_time, &colliders, overlay_open);
//! let eye = controller.camera().position();
//! ```

pub mod camera;
pub mod config;
pub mod dodge;
pub mod input;
pub mod movement;
pub mod state;

pub mod prelude {
    pub use crate::camera::CameraRig;
    pub use crate::config::{CameraConfig, DodgeConfig, MovementConfig};
    pub use crate::dodge::{Dodge, DodgeState};
    pub use crate::input::PlayerInput;
    pub use crate::movement::{forward_from_yaw, right_from_yaw, wrap_angle, yaw_from_direction, PlayerController};
    pub use crate::state::PlayerState;
}

pub use prelude::*;
