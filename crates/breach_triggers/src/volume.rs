//! Box trigger volume

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box described by center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerVolume {
    /// Box center
    pub center: [f32; 3],
    /// Half-extents (width/2, height/2, depth/2)
    pub half_extents: [f32; 3],
}

impl TriggerVolume {
    /// Create a volume. Negative half extents are treated as their magnitude.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center: center.to_array(),
            half_extents: half_extents.abs().to_array(),
        }
    }

    /// Create a volume from full width/height/depth
    pub fn box_shape(center: Vec3, width: f32, height: f32, depth: f32) -> Self {
        Self::new(center, Vec3::new(width, height, depth) * 0.5)
    }

    /// Center as a vector
    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    /// Half extents as a vector
    pub fn half_extents(&self) -> Vec3 {
        Vec3::from_array(self.half_extents)
    }

    /// Inclusive containment: every axis must satisfy `|p - c| <= h`
    pub fn contains_point(&self, point: Vec3) -> bool {
        let offset = (point - self.center()).abs();
        let half = self.half_extents();
        offset.x <= half.x && offset.y <= half.y && offset.z <= half.z
    }

    /// Minimum and maximum corners
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let center = self.center();
        let half = self.half_extents();
        (center - half, center + half)
    }
}
