//! Breach Runtime - Frame Orchestration
//!
//! Glues the gameplay crates into one [`GameWorld`] that is advanced once per
//! rendered frame, plus the TOML configuration and level layouts that feed it.
//!
//! # Example
//!
//! ```ignore
//! use breach_runtime::prelude::*;
//!
//! let config = GameConfig::load();
//! let layout = LevelLayout::load_from_file("levels/corridor.toml")?;
//! let mut world = GameWorld::from_layout(config, &layout, GameContext::new(Arc::new(LogSink)))?;
//!
//! loop {
//!     let report = world.tick(&input, dt);
//!     if let Some(InteractOutcome::HackStarted(terminal)) = report.interact {
//!         // run the mini-game, then:
//!         world.resolve_hack(&terminal, HackOutcome::Success);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod level;
pub mod script;
pub mod world;
pub mod zones;

pub mod prelude {
    pub use crate::config::GameConfig;
    pub use crate::error::{ConfigError, Result};
    pub use crate::level::{BoxDef, CrateDef, DoorDef, LevelLayout, TerminalDef, WorldObjectDef, ZoneDef};
    pub use crate::script::{DemoScript, ScriptPhase};
    pub use crate::world::{FrameReport, GameWorld};
    pub use crate::zones::ZoneBriefings;
    pub use breach_core::prelude::*;
    pub use breach_interact::prelude::{HackOutcome, InteractOutcome, OverlayMode};
    pub use breach_player::prelude::PlayerInput;
}

pub use prelude::*;
