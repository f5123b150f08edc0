//! Dodge timing

use crate::config::DodgeConfig;
use glam::Vec3;

// Absorbs float drift so a 0.25s dodge lasts exactly 15 frames at 60 Hz
const TIMER_EPSILON: f32 = 1e-4;

/// Dodge sub-state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DodgeState {
    /// Not dodging
    #[default]
    Idle,
    /// Dodging along a captured direction
    Dodging {
        /// Unit horizontal direction captured at start
        direction: Vec3,
        /// Seconds left
        remaining: f32,
    },
}

/// Dodge state plus cooldown
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dodge {
    /// Current sub-state
    pub state: DodgeState,
    /// Seconds until another dodge is allowed (counts only while idle)
    pub cooldown: f32,
}

impl Dodge {
    /// Whether a dodge is in progress
    pub fn is_dodging(&self) -> bool {
        matches!(self.state, DodgeState::Dodging { .. })
    }

    /// Whether a new dodge may start
    pub fn is_ready(&self) -> bool {
        !self.is_dodging() && self.cooldown <= 0.0
    }

    /// Start a dodge along `direction`. Ignored while dodging or cooling down.
    pub fn try_start(&mut self, direction: Vec3, config: &DodgeConfig) -> bool {
        if !self.is_ready() {
            log::trace!("Dodge ignored ({}s cooldown left)", self.cooldown.max(0.0));
            return false;
        }
        let direction = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
        if direction == Vec3::ZERO {
            return false;
        }
        self.state = DodgeState::Dodging {
            direction,
            remaining: config.duration,
        };
        log::debug!("Dodge started toward {:?}", direction);
        true
    }

    /// Tick the cooldown. Call once per frame before [`Dodge::try_start`].
    pub fn tick_cooldown(&mut self, dt: f32) {
        if !self.is_dodging() && self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }
    }

    /// Consume `dt` of an active dodge and return the direction for this frame.
    /// When the dodge runs out the cooldown starts.
    pub fn advance(&mut self, dt: f32, config: &DodgeConfig) -> Option<Vec3> {
        let DodgeState::Dodging { direction, remaining } = self.state else {
            return None;
        };
        let remaining = remaining - dt;
        if remaining <= TIMER_EPSILON {
            self.state = DodgeState::Idle;
            self.cooldown = config.cooldown;
        } else {
            self.state = DodgeState::Dodging { direction, remaining };
        }
        Some(direction)
    }
}
