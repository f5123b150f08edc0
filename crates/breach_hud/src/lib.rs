//! Breach HUD - Interaction Prompts
//!
//! The single on-screen "what can I do right now" slot. Several systems want
//! to write it every frame; precedence decides who wins.
//!
//! # Example
//!
//! ```ignore
//! use breach_hud::prelude::*;
//!
//! let mut prompts = PromptChannel::new();
//! prompts.show(InteractionPrompt::new("Locked, requires hack", PromptSource::door("d1")));
//! prompts.show(InteractionPrompt::new("Hack terminal", PromptSource::terminal("t1")).with_key("E"));
//!
//! assert_eq!(prompts.current().unwrap().source, PromptSource::terminal("t1"));
//! ```

pub mod prompt;

pub mod prelude {
    pub use crate::prompt::{InteractionPrompt, PromptChannel, PromptSource};
}

pub use prelude::*;
