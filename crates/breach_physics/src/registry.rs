//! Collider registry
//!
//! Holds every blocking box in the scene. There is no spatial index: scenes
//! carry tens of colliders and callers test against the full list.

use crate::aabb::Aabb;
use crate::collider::{ColliderKind, ColliderRecord, ColliderSource};
use crate::config::ColliderFilter;
use crate::error::Result;
use glam::Vec3;

/// Result of a dynamic registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new record was stored
    Registered,
    /// An equivalent record already exists
    Duplicate,
    /// Shorter than the minimum height (floor clutter)
    TooShort,
    /// Entirely above head height (ceiling geometry)
    AboveHead,
    /// The source has no geometry yet
    NoGeometry,
}

impl RegisterOutcome {
    /// Whether the registry now holds a record for the source
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Registered | Self::Duplicate)
    }
}

/// Static plus dynamic blocking colliders
#[derive(Debug, Clone, Default)]
pub struct ColliderRegistry {
    filter: ColliderFilter,
    static_colliders: Vec<ColliderRecord>,
    dynamic_colliders: Vec<ColliderRecord>,
}

impl ColliderRegistry {
    /// Create an empty registry
    pub fn new(filter: ColliderFilter) -> Self {
        Self {
            filter,
            static_colliders: Vec::new(),
            dynamic_colliders: Vec::new(),
        }
    }

    /// Create a registry seeded with static colliders
    pub fn with_static(filter: ColliderFilter, colliders: Vec<Aabb>) -> Self {
        let mut registry = Self::new(filter);
        registry.static_colliders = colliders
            .into_iter()
            .map(|bounds| ColliderRecord::fixed(bounds, None))
            .collect();
        registry
    }

    /// Filter in use
    pub fn filter(&self) -> &ColliderFilter {
        &self.filter
    }

    /// Register a static collider. Static geometry is stored as authored.
    pub fn register_static(&mut self, min: Vec3, max: Vec3, debug_id: Option<&str>) -> Result<()> {
        let bounds = Aabb::try_new(min, max)?;
        log::debug!(
            "Static collider '{}' {:?}..{:?}",
            debug_id.unwrap_or("<anonymous>"),
            bounds.min,
            bounds.max
        );
        self.static_colliders.push(ColliderRecord::fixed(bounds, debug_id));
        Ok(())
    }

    /// Register a dynamic collider derived from a world object.
    ///
    /// Registration is idempotent: an existing record with the same debug id
    /// and bounds (within tolerance) makes this a no-op.
    pub fn register_dynamic<S>(&mut self, source: &S, debug_id: Option<&str>) -> RegisterOutcome
    where
        S: ColliderSource + ?Sized,
    {
        let debug_id = debug_id.or_else(|| source.source_name());
        let label = debug_id.unwrap_or("<anonymous>");

        let Some(raw) = source.world_bounds() else {
            log::debug!("Collider '{}' has no geometry yet", label);
            return RegisterOutcome::NoGeometry;
        };

        if raw.height() < self.filter.min_height {
            log::trace!("Collider '{}' skipped: floor clutter ({:.2}m)", label, raw.height());
            return RegisterOutcome::TooShort;
        }
        if raw.min.y >= self.filter.head_height {
            log::trace!("Collider '{}' skipped: above head height", label);
            return RegisterOutcome::AboveHead;
        }

        let bounds = self.clamp_to_band(raw);
        let tolerance = self.filter.dedup_tolerance;
        let duplicate = self.dynamic_colliders.iter().any(|existing| {
            existing.debug_id.as_deref() == debug_id && existing.bounds.approx_eq(&bounds, tolerance)
        });
        if duplicate {
            log::trace!("Collider '{}' already registered", label);
            return RegisterOutcome::Duplicate;
        }

        log::debug!("Dynamic collider '{}' {:?}..{:?}", label, bounds.min, bounds.max);
        self.dynamic_colliders.push(ColliderRecord::dynamic(bounds, debug_id));
        RegisterOutcome::Registered
    }

    /// Remove every dynamic collider with this debug id. Returns the count removed.
    pub fn unregister(&mut self, debug_id: &str) -> usize {
        let before = self.dynamic_colliders.len();
        self.dynamic_colliders
            .retain(|record| record.debug_id.as_deref() != Some(debug_id));
        let removed = before - self.dynamic_colliders.len();
        if removed > 0 {
            log::debug!("Unregistered {} collider(s) '{}'", removed, debug_id);
        }
        removed
    }

    /// All colliders, static first then dynamic
    pub fn iter(&self) -> impl Iterator<Item = &ColliderRecord> + Clone + '_ {
        self.static_colliders
            .iter()
            .chain(self.dynamic_colliders.iter())
    }

    /// All collider bounds, static first then dynamic
    pub fn bounds(&self) -> impl Iterator<Item = Aabb> + Clone + '_ {
        self.iter().map(|record| record.bounds)
    }

    /// Snapshot of every record
    pub fn all(&self) -> Vec<ColliderRecord> {
        self.iter().cloned().collect()
    }

    /// Records of one kind
    pub fn of_kind(&self, kind: ColliderKind) -> &[ColliderRecord] {
        match kind {
            ColliderKind::Static => &self.static_colliders,
            ColliderKind::Dynamic => &self.dynamic_colliders,
        }
    }

    /// Total collider count
    pub fn len(&self) -> usize {
        self.static_colliders.len() + self.dynamic_colliders.len()
    }

    /// Whether the registry holds no colliders
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clamp_to_band(&self, bounds: Aabb) -> Aabb {
        let mut clamped = bounds;
        clamped.min.y = self.filter.floor_y;
        clamped.max.y = self.filter.ceiling_y;
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::WorldObject;

    fn wall(name: &str) -> WorldObject {
        WorldObject::new(name).with_bounds(Aabb::new(
            Vec3::new(-1.0, 0.2, -5.0),
            Vec3::new(1.0, 2.5, -4.0),
        ))
    }

    #[test]
    fn test_register_dynamic_clamps_to_band() {
        let mut registry = ColliderRegistry::new(ColliderFilter::default());
        assert_eq!(registry.register_dynamic(&wall("w"), None), RegisterOutcome::Registered);

        let record = &registry.of_kind(ColliderKind::Dynamic)[0];
        assert_eq!(record.min().y, 0.0);
        assert_eq!(record.max().y, 3.0);
        assert_eq!(record.debug_id.as_deref(), Some("w"));
    }

    #[test]
    fn test_register_twice_is_idempotent() {
        let mut registry = ColliderRegistry::new(ColliderFilter::default());
        let object = wall("crate_07");

        assert_eq!(registry.register_dynamic(&object, None), RegisterOutcome::Registered);
        assert_eq!(registry.register_dynamic(&object, None), RegisterOutcome::Duplicate);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_id_different_bounds_is_new_record() {
        let mut registry = ColliderRegistry::new(ColliderFilter::default());
        let a = wall("segment");
        let b = WorldObject::new("segment")
            .with_bounds(Aabb::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 2.0, 1.0)));

        registry.register_dynamic(&a, None);
        assert_eq!(registry.register_dynamic(&b, None), RegisterOutcome::Registered);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_filters_clutter_and_ceiling() {
        let mut registry = ColliderRegistry::new(ColliderFilter::default());

        let rug = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.1, 2.0));
        let beam = Aabb::new(Vec3::new(0.0, 2.4, 0.0), Vec3::new(8.0, 3.2, 0.5));
        let pending = WorldObject::new("loading");

        assert_eq!(registry.register_dynamic(&rug, Some("rug")), RegisterOutcome::TooShort);
        assert_eq!(registry.register_dynamic(&beam, Some("beam")), RegisterOutcome::AboveHead);
        assert_eq!(registry.register_dynamic(&pending, None), RegisterOutcome::NoGeometry);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_by_debug_id() {
        let mut registry = ColliderRegistry::new(ColliderFilter::default());
        registry
            .register_static(Vec3::ZERO, Vec3::ONE, Some("keep"))
            .unwrap();
        registry.register_dynamic(&wall("gone"), None);

        assert_eq!(registry.unregister("gone"), 1);
        assert_eq!(registry.unregister("gone"), 0);
        // Static colliders are never removed
        assert_eq!(registry.unregister("keep"), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_query_concatenates_static_then_dynamic() {
        let mut registry = ColliderRegistry::with_static(
            ColliderFilter::default(),
            vec![Aabb::new(Vec3::ZERO, Vec3::ONE)],
        );
        registry.register_dynamic(&wall("w"), None);

        let kinds: Vec<_> = registry.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ColliderKind::Static, ColliderKind::Dynamic]);
        assert_eq!(registry.all().len(), 2);
    }

    #[test]
    fn test_register_static_rejects_inverted() {
        let mut registry = ColliderRegistry::new(ColliderFilter::default());
        assert!(registry.register_static(Vec3::ONE, Vec3::ZERO, None).is_err());
    }
}
