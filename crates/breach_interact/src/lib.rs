//! Breach Interact - Progression Gates
//!
//! Doors, hackable terminals and supply crates, plus the modal hacking
//! overlay that suspends locomotion while a terminal is being hacked.
//!
//! # State machines
//!
//! ```text
//! Terminal:  Locked ──(overlay resolved: Success)──▶ Hacked
//!              │ gated while its flag is unset
//!              ▼
//!            no prompt, interact ignored
//!
//! Door:      Closed ──(controlling terminal hacked)──▶ Open
//!            blocks movement                         lifts away, no collider
//!
//! Overlay:   Closed ──interact──▶ Open(Normal) ──resolve──▶ Closed
//!                    └─────────▶ Open(AlreadyHacked) ──1.5s──▶ Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use breach_interact::prelude::*;
//!
//! let outcome = terminals.interact(&player, &flags, &mut overlay, &mut prompts, sink.as_ref());
//! if let InteractOutcome::HackStarted(id) = outcome {
//!     // mini-game runs elsewhere, then:
//!     if let Some(hacked) = terminals.resolve_hack(&id, HackOutcome::Success, &mut overlay, sink.as_ref()) {
//!         doors.on_terminal_hacked(&hacked, &mut prompts, sink.as_ref());
//!     }
//! }
//! ```

pub mod anim;
pub mod config;
pub mod door;
pub mod overlay;
pub mod supply_crate;
pub mod terminal;

pub mod prelude {
    pub use crate::anim::LiftAnimation;
    pub use crate::config::InteractionConfig;
    pub use crate::door::{Door, DoorState, DoorSystem};
    pub use crate::overlay::{HackOutcome, HackingOverlay, OpenOutcome, OverlayMode};
    pub use crate::supply_crate::{CrateOpened, CrateSystem, SupplyCrate};
    pub use crate::terminal::{InteractOutcome, Terminal, TerminalState, TerminalSystem};
}

pub use prelude::*;
