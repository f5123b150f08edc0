//! Ray queries against collider boxes

use crate::aabb::Aabb;
use glam::Vec3;

/// Nearest hit along a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Distance from the ray origin
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Index of the box in the queried sequence
    pub index: usize,
}

/// Slab test. Returns the entry distance along `dir` (or the exit distance
/// when the origin is inside the box), `None` on a miss.
///
/// `dir` does not need to be normalized; the returned value is in units of `dir`.
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb: &Aabb) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

        if d.abs() < 1e-8 {
            // Parallel to this slab
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let t1 = (lo - o) * inv;
        let t2 = (hi - o) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
        if t_max < t_min {
            return None;
        }
    }

    if t_max < 0.0 {
        None
    } else if t_min >= 0.0 {
        Some(t_min)
    } else {
        Some(t_max)
    }
}

/// First box blocking the segment `from -> to`.
///
/// Boxes that already contain `from` are ignored so a query starting next to
/// (or inside) geometry does not collapse to zero length.
pub fn line_of_sight<I>(from: Vec3, to: Vec3, colliders: I) -> Option<RaycastHit>
where
    I: IntoIterator<Item = Aabb>,
{
    let delta = to - from;
    let length = delta.length();
    if length <= f32::EPSILON {
        return None;
    }
    let dir = delta / length;

    colliders
        .into_iter()
        .enumerate()
        .filter(|(_, aabb)| !aabb.contains_point(from))
        .filter_map(|(index, aabb)| {
            ray_aabb_intersect(from, dir, &aabb)
                .filter(|t| *t <= length)
                .map(|distance| RaycastHit {
                    distance,
                    point: from + dir * distance,
                    index,
                })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
