//! Axis-aligned bounding boxes

use crate::error::{PhysicsError, Result};
use glam::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create from two corners, reordering components so that `min <= max`
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create from corners that must already be ordered and finite
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PhysicsError::NonFinite(format!("{:?}..{:?}", min, max)));
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(PhysicsError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Vertical extent
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive point containment
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Strict point containment (touching a face is outside)
    #[inline]
    pub fn contains_point_strict(&self, point: Vec3) -> bool {
        point.x > self.min.x
            && point.x < self.max.x
            && point.y > self.min.y
            && point.y < self.max.y
            && point.z > self.min.z
            && point.z < self.max.z
    }

    /// Check overlap with another box (touching counts)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Grow on X and Z only (player radius against walls)
    #[inline]
    pub fn inflate_horizontal(&self, amount: f32) -> Self {
        let pad = Vec3::new(amount, 0.0, amount);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Component-wise comparison within `tolerance`
    pub fn approx_eq(&self, other: &Aabb, tolerance: f32) -> bool {
        (self.min - other.min).abs().max_element() <= tolerance
            && (self.max - other.max).abs().max_element() <= tolerance
    }
}
