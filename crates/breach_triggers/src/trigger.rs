//! Trigger component

use crate::events::{TriggerEvent, TriggerHandler, TriggerTransition};
use crate::volume::TriggerVolume;
use breach_core::error::HandlerResult;
use glam::Vec3;

/// A box volume with an "entered" latch and optional callbacks
#[derive(Debug)]
pub struct TriggerComponent {
    /// Trigger volume shape
    pub volume: TriggerVolume,
    /// Name used as the log source
    pub name: Option<String>,
    /// Whether the trigger is evaluated at all
    pub enabled: bool,
    /// Latch: the player was inside at the previous evaluation
    entered: bool,
    /// Event handler
    handler: TriggerHandler,
    /// Number of enter transitions so far
    pub activation_count: u32,
}

impl TriggerComponent {
    /// Create a new trigger
    pub fn new(volume: TriggerVolume) -> Self {
        Self {
            volume,
            name: None,
            enabled: true,
            entered: false,
            handler: TriggerHandler::new(),
            activation_count: 0,
        }
    }

    /// Set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set event handler
    pub fn with_handler(mut self, handler: TriggerHandler) -> Self {
        self.handler = handler;
        self
    }

    /// Set enter callback
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&TriggerEvent) -> HandlerResult + Send + Sync + 'static,
    {
        self.handler = std::mem::take(&mut self.handler).on_enter(f);
        self
    }

    /// Set exit callback
    pub fn on_exit<F>(mut self, f: F) -> Self
    where
        F: Fn(&TriggerEvent) -> HandlerResult + Send + Sync + 'static,
    {
        self.handler = std::mem::take(&mut self.handler).on_exit(f);
        self
    }

    /// Label for logs and dispatch
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("trigger")
    }

    /// Whether an enter callback is present
    pub fn has_enter_handler(&self) -> bool {
        self.handler.on_enter.is_some()
    }

    /// Whether the player was inside at the last evaluation
    pub fn is_inside(&self) -> bool {
        self.entered
    }

    /// Update the latch for `position` and report the edge, if any.
    ///
    /// Does not run callbacks; see [`TriggerComponent::process`].
    pub fn evaluate(&mut self, position: Vec3) -> TriggerTransition {
        if !self.enabled {
            return TriggerTransition::None;
        }

        let inside = self.volume.contains_point(position);
        match (self.entered, inside) {
            (false, true) => {
                self.entered = true;
                self.activation_count += 1;
                TriggerTransition::Entered
            }
            (true, false) => {
                self.entered = false;
                TriggerTransition::Exited
            }
            _ => TriggerTransition::None,
        }
    }

    /// Evaluate and run the matching callback. Returns the event that fired.
    pub fn process(&mut self, position: Vec3) -> Option<TriggerEvent> {
        let transition = self.evaluate(position);
        if transition == TriggerTransition::None {
            return None;
        }

        let event = TriggerEvent {
            trigger: self.label().to_owned(),
            transition,
            player_position: position,
        };
        log::debug!("Trigger '{}' {:?}", event.trigger, transition);
        self.handler.handle(&event);
        Some(event)
    }

    /// Enable the trigger
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the trigger. The latch is kept, so re-enabling while still
    /// inside does not fire a second enter.
    pub fn disable(&mut self) {
        self.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn unit_trigger() -> TriggerComponent {
        TriggerComponent::new(TriggerVolume::new(Vec3::ZERO, Vec3::ONE)).with_name("test")
    }

    #[test]
    fn test_evaluate_edges() {
        let mut trigger = unit_trigger();

        assert_eq!(trigger.evaluate(Vec3::new(5.0, 0.0, 0.0)), TriggerTransition::None);
        assert_eq!(trigger.evaluate(Vec3::ZERO), TriggerTransition::Entered);
        assert_eq!(trigger.evaluate(Vec3::new(0.5, 0.0, 0.0)), TriggerTransition::None);
        assert_eq!(trigger.evaluate(Vec3::new(5.0, 0.0, 0.0)), TriggerTransition::Exited);
        assert_eq!(trigger.evaluate(Vec3::new(6.0, 0.0, 0.0)), TriggerTransition::None);
        assert_eq!(trigger.evaluate(Vec3::ZERO), TriggerTransition::Entered);
        assert_eq!(trigger.activation_count, 2);
    }

    #[test]
    fn test_enter_fires_once_while_inside() {
        let count = Arc::new(AtomicU32::new(0));
        let count_clone = count.clone();

        let mut trigger = unit_trigger().on_enter(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        for _ in 0..120 {
            trigger.process(Vec3::new(0.2, 0.0, -0.3));
        }
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exit_fires_once() {
        let exits = Arc::new(AtomicU32::new(0));
        let exits_clone = exits.clone();

        let mut trigger = unit_trigger()
            .on_enter(|_| Ok(()))
            .on_exit(move |_| {
                exits_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        trigger.process(Vec3::ZERO);
        for _ in 0..10 {
            trigger.process(Vec3::new(9.0, 0.0, 0.0));
        }
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_trigger_holds_latch() {
        let mut trigger = unit_trigger();
        trigger.evaluate(Vec3::ZERO);
        trigger.disable();

        assert_eq!(trigger.evaluate(Vec3::new(9.0, 0.0, 0.0)), TriggerTransition::None);
        assert!(trigger.is_inside());

        trigger.enable();
        assert_eq!(trigger.evaluate(Vec3::ZERO), TriggerTransition::None);
    }
}
