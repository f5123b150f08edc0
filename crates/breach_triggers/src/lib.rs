//! Breach Triggers - Trigger Volume System
//!
//! Invisible boxes that fire a callback when the player's containment state
//! changes. They never block movement.
//!
//! # Features
//!
//! - Inclusive box containment against the published player position
//! - Edge-triggered enter/exit (a sustained stay fires nothing)
//! - Fault-isolated callbacks: a failing handler is logged, the next trigger still runs
//!
//! # Example
//!
//! ```ignore
//! use breach_triggers::prelude::*;
//!
//! let mut system = TriggerSystem::new();
//! system.register(
//!     TriggerComponent::new(TriggerVolume::new(Vec3::new(0.0, 1.0, -10.0), Vec3::new(3.0, 2.0, 1.0)))
//!         .with_name("zone:lab")
//!         .on_enter(|event| {
//!             log::info!("entered {}", event.trigger);
//!             Ok(())
//!         }),
//! );
//!
//! system.update(&context.player_position);
//! ```

pub mod events;
pub mod system;
pub mod trigger;
pub mod volume;

pub mod prelude {
    pub use crate::events::{TriggerCallback, TriggerEvent, TriggerHandler, TriggerTransition};
    pub use crate::system::{TriggerHandle, TriggerSystem};
    pub use crate::trigger::TriggerComponent;
    pub use crate::volume::TriggerVolume;
    pub use glam::Vec3;
}

pub use prelude::*;
