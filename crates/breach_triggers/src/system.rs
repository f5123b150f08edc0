//! Trigger system for processing the player against every trigger

use crate::events::TriggerEvent;
use crate::trigger::TriggerComponent;
use breach_core::context::PlayerPosition;

/// Handle returned by [`TriggerSystem::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerHandle(usize);

/// The trigger system that processes all triggers
#[derive(Debug, Default)]
pub struct TriggerSystem {
    /// Registered triggers, evaluated in registration order
    triggers: Vec<TriggerComponent>,
    /// Collected events from last update
    last_events: Vec<TriggerEvent>,
}

impl TriggerSystem {
    /// Create a new trigger system
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger.
    ///
    /// A trigger without an enter callback is accepted but inert for enter
    /// events; this is logged so the level author notices.
    pub fn register(&mut self, trigger: TriggerComponent) -> TriggerHandle {
        if !trigger.has_enter_handler() {
            log::warn!(
                "Trigger '{}' registered without an on_enter handler",
                trigger.label()
            );
        }
        self.triggers.push(trigger);
        TriggerHandle(self.triggers.len() - 1)
    }

    /// Get a trigger
    pub fn get(&self, handle: TriggerHandle) -> Option<&TriggerComponent> {
        self.triggers.get(handle.0)
    }

    /// Get a mutable trigger
    pub fn get_mut(&mut self, handle: TriggerHandle) -> Option<&mut TriggerComponent> {
        self.triggers.get_mut(handle.0)
    }

    /// Find a trigger by name
    pub fn find(&self, name: &str) -> Option<TriggerHandle> {
        self.triggers
            .iter()
            .position(|t| t.name.as_deref() == Some(name))
            .map(TriggerHandle)
    }

    /// Number of registered triggers
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Whether no triggers are registered
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Evaluate every trigger against the published player position.
    ///
    /// With no published position the frame is skipped entirely and every
    /// latch keeps its previous state.
    pub fn update(&mut self, player: &PlayerPosition) -> &[TriggerEvent] {
        self.last_events.clear();

        let Some(position) = player.get() else {
            return &self.last_events;
        };

        for trigger in &mut self.triggers {
            if let Some(event) = trigger.process(position) {
                self.last_events.push(event);
            }
        }
        &self.last_events
    }

    /// Get events from the last update
    pub fn events(&self) -> &[TriggerEvent] {
        &self.last_events
    }
}
