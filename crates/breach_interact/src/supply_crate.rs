//! Supply crates
//!
//! Lowest prompt precedence: a crate only gets the slot when no door or
//! terminal wants it.

use crate::anim::LiftAnimation;
use crate::config::InteractionConfig;
use breach_core::context::PlayerPosition;
use breach_core::dispatch::dispatch;
use breach_core::id::CrateId;
use breach_core::sink::EventSink;
use breach_hud::prompt::{InteractionPrompt, PromptChannel, PromptSource};
use glam::Vec3;

/// Prompt shown at an unopened crate
pub const OPEN_CRATE_MESSAGE: &str = "Open crate";

/// Reported once when a crate is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateOpened {
    /// Which crate
    pub id: CrateId,
    /// Loot label, if the crate holds anything
    pub loot: Option<String>,
}

/// A lootable crate with an animated lid
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyCrate {
    /// Identifier
    pub id: CrateId,
    /// World position
    pub position: Vec3,
    /// Loot label
    pub loot: Option<String>,
    opened: bool,
    lid: LiftAnimation,
}

impl SupplyCrate {
    /// Create a closed, empty crate
    pub fn new(id: impl Into<CrateId>, position: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            loot: None,
            opened: false,
            lid: LiftAnimation::new(),
        }
    }

    /// Set loot label
    pub fn with_loot(mut self, loot: impl Into<String>) -> Self {
        self.loot = Some(loot.into());
        self
    }

    /// Whether opened
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Current lid lift
    pub fn lid_height(&self) -> f32 {
        self.lid.current()
    }

    /// Prompt source for this crate
    pub fn prompt_source(&self) -> PromptSource {
        PromptSource::Crate(self.id.clone())
    }
}

/// All crates in the scene
#[derive(Debug, Clone, Default)]
pub struct CrateSystem {
    crates: Vec<SupplyCrate>,
}

impl CrateSystem {
    /// Create an empty system
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a crate
    pub fn add(&mut self, supply_crate: SupplyCrate) {
        self.crates.push(supply_crate);
    }

    /// Look up a crate
    pub fn get(&self, id: &CrateId) -> Option<&SupplyCrate> {
        self.crates.iter().find(|c| c.id == *id)
    }

    /// All crates
    pub fn iter(&self) -> impl Iterator<Item = &SupplyCrate> {
        self.crates.iter()
    }

    /// Number of crates
    pub fn len(&self) -> usize {
        self.crates.len()
    }

    /// Whether there are no crates
    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    /// Nearest unopened crate within interaction range of `position`
    fn target_index(&self, position: Vec3, config: &InteractionConfig) -> Option<usize> {
        self.crates
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.opened)
            .map(|(i, c)| (i, c.position.distance(position)))
            .filter(|(_, d)| *d <= config.interaction_radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Animate lids and settle prompts.
    ///
    /// Only the crate the interact key would open prompts. While the hacking
    /// overlay is open no crate prompts; lids keep animating.
    pub fn update(
        &mut self,
        player: &PlayerPosition,
        prompts: &mut PromptChannel,
        config: &InteractionConfig,
        overlay_open: bool,
        dt: f32,
    ) {
        for supply_crate in &mut self.crates {
            supply_crate.lid.step(dt, config.crate_lid_rate);
        }

        let Some(position) = player.get() else {
            return;
        };

        let target = if overlay_open {
            None
        } else {
            self.target_index(position, config)
        };

        for (index, supply_crate) in self.crates.iter().enumerate() {
            let source = supply_crate.prompt_source();
            if target == Some(index) {
                prompts.show(
                    InteractionPrompt::new(OPEN_CRATE_MESSAGE, source)
                        .with_key(config.interact_key.clone()),
                );
            } else {
                prompts.clear(&source);
            }
        }
    }

    /// Open the nearest unopened crate in range. Each crate reports at most once.
    pub fn interact(
        &mut self,
        player: &PlayerPosition,
        prompts: &mut PromptChannel,
        config: &InteractionConfig,
        sink: &dyn EventSink,
    ) -> Option<CrateOpened> {
        let position = player.get()?;
        let index = self.target_index(position, config)?;
        let supply_crate = &mut self.crates[index];

        supply_crate.opened = true;
        supply_crate.lid.set_target(config.crate_lid_offset);
        prompts.clear(&supply_crate.prompt_source());
        log::info!(
            "Crate {} opened ({})",
            supply_crate.id,
            supply_crate.loot.as_deref().unwrap_or("empty")
        );
        dispatch(&supply_crate.id.source_label(), || sink.play_sound("crate_open"));

        Some(CrateOpened {
            id: supply_crate.id.clone(),
            loot: supply_crate.loot.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use breach_core::sink::NullSink;

    fn setup() -> (CrateSystem, PlayerPosition, PromptChannel, InteractionConfig) {
        let mut crates = CrateSystem::new();
        crates.add(SupplyCrate::new("c1", Vec3::new(2.0, 0.5, 0.0)).with_loot("medkit"));
        let player = PlayerPosition::new();
        player.publish(Vec3::new(1.0, 1.0, 0.0));
        (crates, player, PromptChannel::new(), InteractionConfig::default())
    }

    #[test]
    fn test_prompt_then_open_once() {
        let (mut crates, player, mut prompts, config) = setup();

        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert_eq!(prompts.current().unwrap().display_text(), "[E] Open crate");

        let opened = crates.interact(&player, &mut prompts, &config, &NullSink).unwrap();
        assert_eq!(opened.loot.as_deref(), Some("medkit"));
        assert!(prompts.current().is_none());

        assert!(crates.interact(&player, &mut prompts, &config, &NullSink).is_none());
        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert!(prompts.current().is_none());
    }

    #[test]
    fn test_crate_prompt_yields_to_door() {
        let (mut crates, player, mut prompts, config) = setup();
        prompts.show(InteractionPrompt::new("Locked, requires hack", PromptSource::door("d1")));

        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert!(prompts.is_owned_by(&PromptSource::door("d1")));
    }

    #[test]
    fn test_no_prompt_while_overlay_open() {
        let (mut crates, player, mut prompts, config) = setup();
        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert!(prompts.is_owned_by(&PromptSource::supply_crate("c1")));

        crates.update(&player, &mut prompts, &config, true, 1.0 / 60.0);
        assert!(prompts.current().is_none());

        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert!(prompts.is_owned_by(&PromptSource::supply_crate("c1")));
    }

    #[test]
    fn test_prompt_names_nearest_crate() {
        let (mut crates, player, mut prompts, config) = setup();
        crates.add(SupplyCrate::new("c2", Vec3::new(2.0, 0.5, 1.5)));
        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert!(prompts.is_owned_by(&PromptSource::supply_crate("c1")));

        let opened = crates.interact(&player, &mut prompts, &config, &NullSink).unwrap();
        assert_eq!(opened.id, CrateId::new("c1"));

        crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        assert!(prompts.is_owned_by(&PromptSource::supply_crate("c2")));
    }

    #[test]
    fn test_lid_eases_open() {
        let (mut crates, player, mut prompts, config) = setup();
        crates.interact(&player, &mut prompts, &config, &NullSink);

        for _ in 0..300 {
            crates.update(&player, &mut prompts, &config, false, 1.0 / 60.0);
        }
        let lid = crates.get(&"c1".into()).unwrap().lid_height();
        assert_relative_eq!(lid, config.crate_lid_offset);
    }
}
