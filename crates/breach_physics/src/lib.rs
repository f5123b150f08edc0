//! Breach Physics - AABB Collision
//!
//! Blocking geometry for the gameplay core. Everything is an axis-aligned box;
//! there is no rigid-body simulation and no swept collision.
//!
//! # Features
//!
//! - Static colliders supplied at startup
//! - Dynamic colliders derived from world objects, filtered and deduplicated
//! - Axis-separated movement resolution (slide along walls)
//! - Ray queries for camera line-of-sight
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             ColliderRegistry             │
//! │  ┌──────────────┐   ┌─────────────────┐  │
//! │  │ static list  │ + │  dynamic list   │  │
//! │  └──────────────┘   └─────────────────┘  │
//! └────────────────────┬─────────────────────┘
//!                      │ iter()
//!          ┌───────────┴───────────┐
//!          ▼                       ▼
//!   resolve_movement()       line_of_sight()
//!   (player controller)      (camera rig)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use breach_physics::prelude::*;
//!
//! let mut registry = ColliderRegistry::new(ColliderFilter::default());
//! registry.register_static(Vec3::new(-1.0, 0.0, -5.0), Vec3::new(1.0, 3.0, -4.0), Some("wall"))?;
//!
//! let crate_box = WorldObject::new("crate_03").with_bounds(Aabb::new(min, max));
//! registry.register_dynamic(&crate_box, None);
//!
//! let resolved = resolve_movement(position, candidate, registry.bounds(), 0.35);
//! ```

pub mod aabb;
pub mod collider;
pub mod config;
pub mod error;
pub mod query;
pub mod registry;
pub mod resolve;

pub mod prelude {
    //! Common imports for collision functionality
    pub use crate::aabb::Aabb;
    pub use crate::collider::{ColliderKind, ColliderRecord, ColliderSource, WorldObject};
    pub use crate::config::ColliderFilter;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::query::{line_of_sight, ray_aabb_intersect, RaycastHit};
    pub use crate::registry::{ColliderRegistry, RegisterOutcome};
    pub use crate::resolve::{resolve_movement, Resolution};
    pub use glam::Vec3;
}

pub use prelude::*;
