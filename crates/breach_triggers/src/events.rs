//! Trigger events

use breach_core::dispatch::dispatch;
use breach_core::error::HandlerResult;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Containment change reported by one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerTransition {
    /// No change since the previous evaluation
    None,
    /// The player moved from outside to inside
    Entered,
    /// The player moved from inside to outside
    Exited,
}

impl Default for TriggerTransition {
    fn default() -> Self {
        Self::None
    }
}

/// A trigger event
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerEvent {
    /// Trigger name (log label)
    pub trigger: String,
    /// What happened
    pub transition: TriggerTransition,
    /// Player position that caused the change
    pub player_position: Vec3,
}

impl TriggerEvent {
    /// Create an enter event
    pub fn enter(trigger: impl Into<String>, player_position: Vec3) -> Self {
        Self {
            trigger: trigger.into(),
            transition: TriggerTransition::Entered,
            player_position,
        }
    }

    /// Create an exit event
    pub fn exit(trigger: impl Into<String>, player_position: Vec3) -> Self {
        Self {
            trigger: trigger.into(),
            transition: TriggerTransition::Exited,
            player_position,
        }
    }

    /// Check if this is an enter event
    pub fn is_enter(&self) -> bool {
        self.transition == TriggerTransition::Entered
    }

    /// Check if this is an exit event
    pub fn is_exit(&self) -> bool {
        self.transition == TriggerTransition::Exited
    }
}

/// Callback type for trigger events
pub type TriggerCallback = Box<dyn Fn(&TriggerEvent) -> HandlerResult + Send + Sync>;

/// Builder for trigger event handlers
#[derive(Default)]
pub struct TriggerHandler {
    /// Callback for enter events
    pub on_enter: Option<TriggerCallback>,
    /// Callback for exit events
    pub on_exit: Option<TriggerCallback>,
}

impl TriggerHandler {
    /// Create a new empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Set enter callback
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&TriggerEvent) -> HandlerResult + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Set exit callback
    pub fn on_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&TriggerEvent) -> HandlerResult + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(f));
        self
    }

    /// Handle an event. Returns `false` if the callback failed or panicked.
    pub fn handle(&self, event: &TriggerEvent) -> bool {
        let callback = match event.transition {
            TriggerTransition::Entered => self.on_enter.as_ref(),
            TriggerTransition::Exited => self.on_exit.as_ref(),
            TriggerTransition::None => None,
        };
        match callback {
            Some(callback) => dispatch(&event.trigger, || callback(event)),
            None => true,
        }
    }
}

impl std::fmt::Debug for TriggerHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerHandler")
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
