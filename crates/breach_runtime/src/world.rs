//! Game world
//!
//! Owns every gameplay system and advances them in a fixed order each frame:
//!
//! 1. input (passed in)
//! 2. player controller, frozen while the hacking overlay is open
//! 3. collision resolution against static, dynamic and door colliders
//! 4. trigger volumes
//! 5. terminals, doors, crates (prompts in precedence order)
//! 6. interact key, overlay timers

use crate::config::GameConfig;
use crate::error::Result;
use crate::level::LevelLayout;
use crate::zones::ZoneBriefings;
use breach_core::context::GameContext;
use breach_core::flags::WorldFlags;
use breach_core::id::{DoorId, TerminalId};
use breach_hud::prompt::{InteractionPrompt, PromptChannel};
use breach_interact::door::{Door, DoorSystem};
use breach_interact::overlay::{HackOutcome, HackingOverlay};
use breach_interact::supply_crate::{CrateOpened, CrateSystem, SupplyCrate};
use breach_interact::terminal::{InteractOutcome, Terminal, TerminalSystem};
use breach_physics::aabb::Aabb;
use breach_physics::collider::WorldObject;
use breach_physics::registry::{ColliderRegistry, RegisterOutcome};
use breach_physics::resolve::Resolution;
use breach_player::input::PlayerInput;
use breach_player::movement::PlayerController;
use breach_triggers::events::TriggerEvent;
use breach_triggers::system::{TriggerHandle, TriggerSystem};
use breach_triggers::trigger::TriggerComponent;
use glam::Vec3;

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Collision result for the player move
    pub resolution: Option<Resolution>,
    /// Trigger transitions this frame
    pub trigger_events: Vec<TriggerEvent>,
    /// Result of the interact key, if pressed
    pub interact: Option<InteractOutcome>,
    /// Crate opened by the interact key
    pub crate_opened: Option<CrateOpened>,
    /// The already-hacked overlay closed itself
    pub overlay_auto_closed: bool,
}

/// All gameplay systems for one scene
pub struct GameWorld {
    context: GameContext,
    config: GameConfig,
    flags: WorldFlags,
    registry: ColliderRegistry,
    triggers: TriggerSystem,
    briefings: ZoneBriefings,
    player: PlayerController,
    doors: DoorSystem,
    terminals: TerminalSystem,
    crates: CrateSystem,
    overlay: HackingOverlay,
    prompts: PromptChannel,
    frame: u64,
    elapsed: f32,
}

impl GameWorld {
    /// Create an empty world with the player at the origin
    pub fn new(config: GameConfig, context: GameContext) -> Self {
        let player = Self::build_player(&config, &context, Vec3::new(0.0, 1.0, 0.0), 0.0);
        Self {
            registry: ColliderRegistry::new(config.colliders.clone()),
            triggers: TriggerSystem::new(),
            briefings: ZoneBriefings::new(),
            doors: DoorSystem::new(),
            terminals: TerminalSystem::new(config.interaction.clone()),
            crates: CrateSystem::new(),
            overlay: HackingOverlay::new(config.interaction.already_hacked_close_delay),
            prompts: PromptChannel::new(),
            flags: WorldFlags::new(),
            player,
            context,
            config,
            frame: 0,
            elapsed: 0.0,
        }
    }

    /// Assemble a world from a level layout
    pub fn from_layout(config: GameConfig, layout: &LevelLayout, context: GameContext) -> Result<Self> {
        let mut world = Self::new(config, context);
        world.spawn_player(Vec3::from_array(layout.spawn), layout.spawn_yaw);

        for def in &layout.static_colliders {
            world.registry.register_static(
                Vec3::from_array(def.min),
                Vec3::from_array(def.max),
                def.id.as_deref(),
            )?;
        }

        for def in &layout.world_objects {
            let mut object = WorldObject::new(def.name.clone());
            if let (Some(min), Some(max)) = (def.min, def.max) {
                object = object.with_bounds(Aabb::try_new(Vec3::from_array(min), Vec3::from_array(max))?);
            }
            world.register_world_object(&object);
        }

        for def in &layout.zones {
            let trigger = world.briefings.trigger_for(def, world.context.sink.clone());
            world.triggers.register(trigger);
        }

        for def in &layout.doors {
            let mut door = Door::new(def.id.as_str(), Vec3::from_array(def.position));
            if let Some(half_extents) = def.half_extents {
                door = door.with_half_extents(Vec3::from_array(half_extents));
            }
            if let Some(offset) = def.open_offset {
                door = door.with_open_offset(offset);
            }
            if let Some(terminal) = &def.terminal {
                door = door.controlled_by(terminal.as_str());
            }
            world.add_door(door);
        }

        for def in &layout.terminals {
            let mut terminal = Terminal::new(def.id.as_str(), Vec3::from_array(def.position));
            if let Some(flag) = &def.gate_flag {
                terminal = terminal.gated_by(flag.clone());
            }
            world.add_terminal(terminal);
        }

        for def in &layout.crates {
            let mut supply_crate = SupplyCrate::new(def.id.as_str(), Vec3::from_array(def.position));
            if let Some(loot) = &def.loot {
                supply_crate = supply_crate.with_loot(loot.clone());
            }
            world.add_crate(supply_crate);
        }

        log::info!(
            "Level '{}' assembled: {} colliders, {} zones, {} doors, {} terminals, {} crates",
            layout.name,
            world.registry.len(),
            world.triggers.len(),
            world.doors.len(),
            world.terminals.len(),
            world.crates.len()
        );
        Ok(world)
    }

    fn build_player(config: &GameConfig, context: &GameContext, spawn: Vec3, yaw: f32) -> PlayerController {
        PlayerController::new(context.player_position.clone(), spawn)
            .with_movement(config.movement.clone())
            .with_dodge(config.dodge.clone())
            .with_camera(config.camera.clone())
            .with_facing(yaw)
    }

    /// Replace the player at `spawn`.
    ///
    /// The previous position is withdrawn; the new one is published on the
    /// next tick.
    pub fn spawn_player(&mut self, spawn: Vec3, yaw: f32) {
        self.player = Self::build_player(&self.config, &self.context, spawn, yaw);
        self.context.player_position.clear();
    }

    /// Register a static collider
    pub fn add_static_collider(&mut self, min: Vec3, max: Vec3, debug_id: Option<&str>) -> Result<()> {
        Ok(self.registry.register_static(min, max, debug_id)?)
    }

    /// Register a dynamic collider from a world object (idempotent)
    pub fn register_world_object(&mut self, object: &WorldObject) -> RegisterOutcome {
        self.registry.register_dynamic(object, None)
    }

    /// Remove dynamic colliders by debug id
    pub fn unregister_collider(&mut self, debug_id: &str) -> usize {
        self.registry.unregister(debug_id)
    }

    /// Add a trigger volume
    pub fn add_trigger(&mut self, trigger: TriggerComponent) -> TriggerHandle {
        self.triggers.register(trigger)
    }

    /// Add a door
    pub fn add_door(&mut self, door: Door) {
        self.doors.add(door);
    }

    /// Add a terminal
    pub fn add_terminal(&mut self, terminal: Terminal) {
        self.terminals.add(terminal);
    }

    /// Add a supply crate
    pub fn add_crate(&mut self, supply_crate: SupplyCrate) {
        self.crates.add(supply_crate);
    }

    /// Raise or lower a world flag (e.g. `boss_defeated`)
    pub fn set_flag(&mut self, flag: &str, value: bool) {
        self.flags.set(flag, value);
    }

    /// Every collider that blocks the player this frame
    pub fn colliders(&self) -> Vec<Aabb> {
        self.registry
            .bounds()
            .chain(self.doors.blocking_colliders(&self.config.interaction))
            .collect()
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &PlayerInput, dt: f32) -> FrameReport {
        let mut report = FrameReport::default();
        self.frame += 1;
        self.elapsed += dt;

        let colliders = self.colliders();
        report.resolution = Some(self.player.update(input, dt, &colliders, self.overlay.is_open()));

        let player_position = self.context.player_position.clone();
        report.trigger_events = self.triggers.update(&player_position).to_vec();

        self.terminals
            .update(&player_position, &self.flags, &self.overlay, &mut self.prompts);
        self.doors
            .update(&player_position, &mut self.prompts, &self.config.interaction, dt);
        self.crates.update(
            &player_position,
            &mut self.prompts,
            &self.config.interaction,
            self.overlay.is_open(),
            dt,
        );

        if input.interact {
            self.handle_interact(&mut report);
        }
        report.overlay_auto_closed = self.overlay.tick(dt);
        report
    }

    fn handle_interact(&mut self, report: &mut FrameReport) {
        let player_position = self.context.player_position.clone();
        let sink = self.context.sink.clone();

        let outcome = self.terminals.interact(
            &player_position,
            &self.flags,
            &mut self.overlay,
            &mut self.prompts,
            sink.as_ref(),
        );

        // Crates only answer when no terminal took the key and no overlay is up
        let crate_fallback = matches!(
            outcome,
            InteractOutcome::NoTerminalInRange | InteractOutcome::Gated(_)
        );
        if crate_fallback && !self.overlay.is_open() {
            report.crate_opened = self.crates.interact(
                &player_position,
                &mut self.prompts,
                &self.config.interaction,
                sink.as_ref(),
            );
        }
        report.interact = Some(outcome);
    }

    /// Apply the hacking mini-game result. Returns the doors that opened.
    pub fn resolve_hack(&mut self, terminal: &TerminalId, outcome: HackOutcome) -> Vec<DoorId> {
        let sink = self.context.sink.clone();
        match self
            .terminals
            .resolve_hack(terminal, outcome, &mut self.overlay, sink.as_ref())
        {
            Some(hacked) => self
                .doors
                .on_terminal_hacked(&hacked, &mut self.prompts, sink.as_ref()),
            None => Vec::new(),
        }
    }

    /// Cancel an open hacking overlay (escape key). Counts as a failed hack.
    pub fn cancel_hack(&mut self) -> bool {
        let Some(terminal) = self.overlay.terminal().cloned() else {
            return false;
        };
        self.resolve_hack(&terminal, HackOutcome::Failure);
        !self.overlay.is_open()
    }

    /// Shared context
    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Player controller
    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    /// Collider registry
    pub fn registry(&self) -> &ColliderRegistry {
        &self.registry
    }

    /// Triggers
    pub fn triggers(&self) -> &TriggerSystem {
        &self.triggers
    }

    /// Zone briefings
    pub fn briefings(&self) -> &ZoneBriefings {
        &self.briefings
    }

    /// Doors
    pub fn doors(&self) -> &DoorSystem {
        &self.doors
    }

    /// Terminals
    pub fn terminals(&self) -> &TerminalSystem {
        &self.terminals
    }

    /// Crates
    pub fn crates(&self) -> &CrateSystem {
        &self.crates
    }

    /// Hacking overlay
    pub fn overlay(&self) -> &HackingOverlay {
        &self.overlay
    }

    /// Visible prompt
    pub fn prompt(&self) -> Option<&InteractionPrompt> {
        self.prompts.current()
    }

    /// World flags
    pub fn flags(&self) -> &WorldFlags {
        &self.flags
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// One-line state summary
    pub fn debug_info(&self) -> String {
        let state = self.player.state();
        let p = state.position;
        let overlay = match (self.overlay.terminal(), self.overlay.mode()) {
            (Some(terminal), Some(mode)) => format!("{:?}@{}", mode, terminal),
            _ => "closed".to_string(),
        };
        let prompt = self
            .prompts
            .current()
            .map(|p| p.display_text())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "frame {} t={:.2}s | pos ({:.2}, {:.2}, {:.2}) speed {:.2}{} | overlay {} | prompt '{}' | terminals {}/{} hacked | doors {}/{} open | zones briefed {}",
            self.frame,
            self.elapsed,
            p.x,
            p.y,
            p.z,
            state.speed(),
            if state.is_dodging() { " dodging" } else { "" },
            overlay,
            prompt,
            self.terminals.iter().filter(|t| t.is_hacked()).count(),
            self.terminals.len(),
            self.doors.iter().filter(|d| d.is_open()).count(),
            self.doors.len(),
            self.briefings.count(),
        )
    }
}
