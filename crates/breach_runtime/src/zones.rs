//! Zone briefings
//!
//! Each zone is a trigger volume. The first time the player enters a zone in a
//! session its narration plays; later entries are silent. The briefed set is
//! shared with the trigger callbacks, so it lives behind a lock.

use crate::level::ZoneDef;
use breach_core::id::ZoneId;
use breach_core::sink::EventSink;
use breach_triggers::trigger::TriggerComponent;
use breach_triggers::volume::TriggerVolume;
use glam::Vec3;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Session-wide record of which zones have been briefed
#[derive(Debug, Clone, Default)]
pub struct ZoneBriefings {
    briefed: Arc<Mutex<BTreeSet<ZoneId>>>,
}

impl ZoneBriefings {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a zone as briefed. Returns `true` only the first time.
    pub fn mark(&self, zone: &ZoneId) -> bool {
        self.briefed.lock().insert(zone.clone())
    }

    /// Whether a zone has been briefed
    pub fn is_briefed(&self, zone: &ZoneId) -> bool {
        self.briefed.lock().contains(zone)
    }

    /// Number of briefed zones
    pub fn count(&self) -> usize {
        self.briefed.lock().len()
    }

    /// Build the trigger for a zone definition
    pub fn trigger_for(&self, zone: &ZoneDef, sink: Arc<dyn EventSink>) -> TriggerComponent {
        let id = ZoneId::new(zone.id.clone());
        let volume = TriggerVolume::new(
            Vec3::from_array(zone.center),
            Vec3::from_array(zone.half_extents),
        );

        let briefings = self.clone();
        let enter_sink = sink.clone();
        let enter_id = id.clone();
        let narration = zone.narration.clone();

        let mut trigger = TriggerComponent::new(volume)
            .with_name(id.source_label())
            .on_enter(move |_| {
                if !briefings.mark(&enter_id) {
                    return Ok(());
                }
                log::info!("Entered zone {}", enter_id);
                enter_sink.play_narration(&narration, Some(enter_id.as_str()))
            });

        if let Some(exit_narration) = zone.exit_narration.clone() {
            trigger = trigger.on_exit(move |_| sink.play_narration(&exit_narration, Some(id.as_str())));
        }
        trigger
    }
}
