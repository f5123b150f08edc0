//! Breach Core - Shared Gameplay Primitives
//!
//! Every other gameplay crate builds on the pieces defined here.
//!
//! # Features
//!
//! - String-backed identifiers for doors, terminals, crates and zones
//! - Named progression flags (`boss_defeated`, ...)
//! - The published player position (one writer per frame, many readers)
//! - Fire-and-forget external event sinks (sound, narration, pointer capture)
//! - Fault-isolating dispatch for scripted callbacks
//!
//! # Example
//!
//! ```ignore
//! use breach_core::prelude::*;
//!
//! let position = PlayerPosition::new();
//! let reader = position.clone();
//!
//! position.publish(Vec3::new(0.0, 0.0, 4.0));
//! assert!(reader.get().is_some());
//!
//! dispatch("zone:lab", || Err(HandlerError::failed("script broke")));
//! ```

pub mod context;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod id;
pub mod sink;

pub mod prelude {
    pub use crate::context::{GameContext, PlayerPosition};
    pub use crate::dispatch::{dispatch, dispatch_with};
    pub use crate::error::{HandlerError, HandlerResult};
    pub use crate::flags::WorldFlags;
    pub use crate::id::{CrateId, DoorId, TerminalId, ZoneId};
    pub use crate::sink::{EventSink, LogSink, NullSink};
    pub use glam::{Vec2, Vec3};
}

pub use prelude::*;
