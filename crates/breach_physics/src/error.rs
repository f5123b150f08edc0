//! Error types for the collision system

use glam::Vec3;
use thiserror::Error;

/// Collision system errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Box corners are inverted on at least one axis
    #[error("Invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds { min: Vec3, max: Vec3 },

    /// A coordinate is NaN or infinite
    #[error("Non-finite collider coordinate in {0}")]
    NonFinite(String),
}

/// Result type for collision operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
