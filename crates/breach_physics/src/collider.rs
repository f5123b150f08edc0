//! Collider records and the world objects they are derived from

use crate::aabb::Aabb;
use glam::Vec3;

/// Where a collider came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Supplied at startup, never changes
    Static,
    /// Derived from a placed world object
    Dynamic,
}

/// One blocking volume
#[derive(Debug, Clone, PartialEq)]
pub struct ColliderRecord {
    /// Box bounds
    pub bounds: Aabb,
    /// Optional debug identifier (also the removal key)
    pub debug_id: Option<String>,
    /// Static or dynamic
    pub kind: ColliderKind,
}

impl ColliderRecord {
    /// Create a static record
    pub fn fixed(bounds: Aabb, debug_id: Option<&str>) -> Self {
        Self {
            bounds,
            debug_id: debug_id.map(str::to_owned),
            kind: ColliderKind::Static,
        }
    }

    /// Create a dynamic record
    pub fn dynamic(bounds: Aabb, debug_id: Option<&str>) -> Self {
        Self {
            bounds,
            debug_id: debug_id.map(str::to_owned),
            kind: ColliderKind::Dynamic,
        }
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.bounds.min
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.bounds.max
    }

    /// Label for logs
    pub fn label(&self) -> &str {
        self.debug_id.as_deref().unwrap_or("<anonymous>")
    }
}

/// Anything scene assembly can hand to the registry once its geometry is known
pub trait ColliderSource {
    /// World-space bounds, or `None` if geometry has not loaded yet
    fn world_bounds(&self) -> Option<Aabb>;

    /// Name used when the caller does not pass an explicit debug id
    fn source_name(&self) -> Option<&str> {
        None
    }
}

impl ColliderSource for Aabb {
    fn world_bounds(&self) -> Option<Aabb> {
        Some(*self)
    }
}

/// Placed world object (prop, wall segment, crate) as seen by collision
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    /// Object name from the level layout
    pub name: String,
    /// World-space bounds once known
    pub bounds: Option<Aabb>,
}

impl WorldObject {
    /// Create an object whose geometry is not yet known
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: None,
        }
    }

    /// Set bounds
    pub fn with_bounds(mut self, bounds: Aabb) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

impl ColliderSource for WorldObject {
    fn world_bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    fn source_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}
