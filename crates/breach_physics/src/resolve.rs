//! Axis-separated movement resolution
//!
//! Each axis of the candidate move is applied on its own, in the order x, z, y.
//! An axis whose move would put the player's reference point strictly inside a
//! collider (inflated horizontally by the player radius) is dropped for this
//! frame while the other axes still apply, which gives sliding along walls.

use crate::aabb::Aabb;
use glam::Vec3;

const AXIS_ORDER: [usize; 3] = [0, 2, 1];

/// Outcome of one resolution step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Constrained position
    pub position: Vec3,
    /// Which axes (x, y, z) were blocked
    pub blocked: [bool; 3],
}

impl Resolution {
    /// Whether any axis was blocked
    pub fn any_blocked(&self) -> bool {
        self.blocked.iter().any(|b| *b)
    }
}

/// Constrain a move from `current` to `candidate` against `colliders`.
///
/// Colliders that already contain `current` are ignored, so a player who ends
/// up inside geometry (a door closing on them, a late registration) can walk out.
pub fn resolve_movement<I>(current: Vec3, candidate: Vec3, colliders: I, radius: f32) -> Resolution
where
    I: IntoIterator<Item = Aabb>,
{
    let solid: Vec<Aabb> = colliders
        .into_iter()
        .map(|aabb| aabb.inflate_horizontal(radius))
        .filter(|aabb| !aabb.contains_point_strict(current))
        .collect();

    let mut position = current;
    let mut blocked = [false; 3];

    for axis in AXIS_ORDER {
        if candidate[axis] == position[axis] {
            continue;
        }
        let mut trial = position;
        trial[axis] = candidate[axis];

        if solid.iter().any(|aabb| aabb.contains_point_strict(trial)) {
            blocked[axis] = true;
        } else {
            position = trial;
        }
    }

    Resolution { position, blocked }
}
