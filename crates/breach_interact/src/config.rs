//! Interaction tuning

use serde::{Deserialize, Serialize};

/// Ranges, animation rates and timings for interactables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Distance at which terminals and crates can be used
    pub interaction_radius: f32,

    /// Distance at which a locked door shows its prompt
    pub door_prompt_radius: f32,

    /// Key label shown on actionable prompts
    pub interact_key: String,

    /// Remaining-distance easing rate for door lifts (1/s)
    pub door_open_rate: f32,

    /// Keep a door blocking until it is mostly open
    pub block_until_mostly_open: bool,

    /// Fraction of the lift counted as "mostly open"
    pub mostly_open_fraction: f32,

    /// Seconds before the already-hacked overlay closes itself
    pub already_hacked_close_delay: f32,

    /// How far a crate lid rises when opened
    pub crate_lid_offset: f32,

    /// Remaining-distance easing rate for crate lids (1/s)
    pub crate_lid_rate: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            interaction_radius: 2.5,
            door_prompt_radius: 3.0,
            interact_key: "E".to_string(),
            door_open_rate: 3.0,
            block_until_mostly_open: false,
            mostly_open_fraction: 0.9,
            already_hacked_close_delay: 1.5,
            crate_lid_offset: 0.6,
            crate_lid_rate: 6.0,
        }
    }
}
