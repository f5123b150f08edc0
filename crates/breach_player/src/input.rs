//! Per-frame input snapshot

use glam::Vec2;

/// Raw input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Move forward held
    pub forward: bool,
    /// Move back held
    pub back: bool,
    /// Strafe left held
    pub left: bool,
    /// Strafe right held
    pub right: bool,
    /// Sprint modifier held
    pub sprint: bool,
    /// Dodge pressed this frame
    pub dodge: bool,
    /// Interact pressed this frame
    pub interact: bool,
    /// Pointer movement since last frame, in pixels
    pub look_delta: Vec2,
    /// Whether pointer capture is active
    pub pointer_captured: bool,
}

impl PlayerInput {
    /// Empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold forward
    pub fn forward(mut self) -> Self {
        self.forward = true;
        self
    }

    /// Hold back
    pub fn back(mut self) -> Self {
        self.back = true;
        self
    }

    /// Hold left
    pub fn left(mut self) -> Self {
        self.left = true;
        self
    }

    /// Hold right
    pub fn right(mut self) -> Self {
        self.right = true;
        self
    }

    /// Hold sprint
    pub fn sprinting(mut self) -> Self {
        self.sprint = true;
        self
    }

    /// Press dodge
    pub fn dodging(mut self) -> Self {
        self.dodge = true;
        self
    }

    /// Press interact
    pub fn interacting(mut self) -> Self {
        self.interact = true;
        self
    }

    /// Pointer delta with capture active
    pub fn with_look(mut self, delta: Vec2) -> Self {
        self.look_delta = delta;
        self.pointer_captured = true;
        self
    }

    /// Combined key axes: x = strafe (right positive), y = forward.
    /// Normalized when longer than 1 so diagonals are not faster.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.forward {
            axis.y += 1.0;
        }
        if self.back {
            axis.y -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if axis.length_squared() > 1.0 {
            axis.normalize()
        } else {
            axis
        }
    }

    /// Whether any directional key contributes movement
    pub fn has_movement(&self) -> bool {
        self.axis() != Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_diagonal_is_normalized() {
        let axis = PlayerInput::new().forward().right().axis();
        assert_relative_eq!(axis.length(), 1.0, epsilon = 1e-6);
        assert!(axis.x > 0.0 && axis.y > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = PlayerInput::new().forward().back();
        assert_eq!(input.axis(), Vec2::ZERO);
        assert!(!input.has_movement());
    }
}
