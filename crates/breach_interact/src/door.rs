//! Doors gated by terminals

use crate::anim::LiftAnimation;
use crate::config::InteractionConfig;
use breach_core::context::PlayerPosition;
use breach_core::dispatch::dispatch;
use breach_core::id::{DoorId, TerminalId};
use breach_core::sink::EventSink;
use breach_hud::prompt::{InteractionPrompt, PromptChannel, PromptSource};
use breach_physics::aabb::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Prompt shown at a closed door
pub const LOCKED_DOOR_MESSAGE: &str = "Locked, requires hack";

/// Door state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoorState {
    /// Initial, blocks movement
    #[default]
    Closed,
    /// Terminal for the session
    Open,
}

/// A door slab that lifts out of the way once its terminal is hacked
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    /// Identifier
    pub id: DoorId,
    /// Center of the slab when closed
    pub base: Vec3,
    /// Half extents of the slab
    pub half_extents: Vec3,
    /// Lift applied when open (one door height by default)
    pub open_offset: f32,
    /// Terminal whose hack opens this door
    pub controlling_terminal: Option<TerminalId>,
    state: DoorState,
    lift: LiftAnimation,
}

impl Door {
    /// Create a closed door with a 2 x 3 x 0.4 m slab
    pub fn new(id: impl Into<DoorId>, base: Vec3) -> Self {
        let half_extents = Vec3::new(1.0, 1.5, 0.2);
        Self {
            id: id.into(),
            base,
            half_extents,
            open_offset: half_extents.y * 2.0,
            controlling_terminal: None,
            state: DoorState::Closed,
            lift: LiftAnimation::new(),
        }
    }

    /// Set slab half extents. The open offset follows the new height.
    pub fn with_half_extents(mut self, half_extents: Vec3) -> Self {
        self.half_extents = half_extents.abs();
        self.open_offset = self.half_extents.y * 2.0;
        self
    }

    /// Override the open lift
    pub fn with_open_offset(mut self, offset: f32) -> Self {
        self.open_offset = offset;
        self
    }

    /// Bind to the terminal that opens it
    pub fn controlled_by(mut self, terminal: impl Into<TerminalId>) -> Self {
        self.controlling_terminal = Some(terminal.into());
        self
    }

    /// Current state
    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Whether the door is open
    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    /// Current slab center (base plus animated lift)
    pub fn position(&self) -> Vec3 {
        self.base + Vec3::Y * self.lift.current()
    }

    /// How far the lift has progressed, 0..=1
    pub fn open_fraction(&self) -> f32 {
        self.lift.fraction(self.open_offset)
    }

    /// Prompt source for this door
    pub fn prompt_source(&self) -> PromptSource {
        PromptSource::Door(self.id.clone())
    }

    /// Closed -> Open. Returns `false` if already open.
    pub fn open(&mut self) -> bool {
        if self.state == DoorState::Open {
            return false;
        }
        self.state = DoorState::Open;
        self.lift.set_target(self.open_offset);
        log::info!("Door {} opening", self.id);
        true
    }

    /// Advance the lift animation
    pub fn animate(&mut self, dt: f32, rate: f32) {
        self.lift.step(dt, rate);
    }

    /// Blocking box, if this door currently blocks movement
    pub fn blocking_collider(&self, config: &InteractionConfig) -> Option<Aabb> {
        let blocks = match self.state {
            DoorState::Closed => true,
            DoorState::Open => {
                config.block_until_mostly_open && self.open_fraction() < config.mostly_open_fraction
            }
        };
        blocks.then(|| Aabb::from_center_half_extents(self.position(), self.half_extents))
    }
}

/// All doors in the scene
#[derive(Debug, Clone, Default)]
pub struct DoorSystem {
    doors: Vec<Door>,
}

impl DoorSystem {
    /// Create an empty system
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a door. A door without a controlling terminal can only be opened
    /// through [`DoorSystem::open`].
    pub fn add(&mut self, door: Door) {
        if door.controlling_terminal.is_none() {
            log::debug!("Door {} has no controlling terminal", door.id);
        }
        self.doors.push(door);
    }

    /// Look up a door
    pub fn get(&self, id: &DoorId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == *id)
    }

    /// All doors
    pub fn iter(&self) -> impl Iterator<Item = &Door> {
        self.doors.iter()
    }

    /// Number of doors
    pub fn len(&self) -> usize {
        self.doors.len()
    }

    /// Whether there are no doors
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    /// Open one door directly (external unlock event)
    pub fn open(&mut self, id: &DoorId, prompts: &mut PromptChannel, sink: &dyn EventSink) -> bool {
        let Some(door) = self.doors.iter_mut().find(|d| d.id == *id) else {
            log::warn!("Unlock for unknown door {}", id);
            return false;
        };
        Self::open_door(door, prompts, sink)
    }

    /// Open every door controlled by `terminal`. Returns the doors that opened.
    pub fn on_terminal_hacked(
        &mut self,
        terminal: &TerminalId,
        prompts: &mut PromptChannel,
        sink: &dyn EventSink,
    ) -> Vec<DoorId> {
        let mut opened = Vec::new();
        for door in self
            .doors
            .iter_mut()
            .filter(|d| d.controlling_terminal.as_ref() == Some(terminal))
        {
            if Self::open_door(door, prompts, sink) {
                opened.push(door.id.clone());
            }
        }
        if opened.is_empty() {
            log::debug!("Terminal {} controls no closed door", terminal);
        }
        opened
    }

    fn open_door(door: &mut Door, prompts: &mut PromptChannel, sink: &dyn EventSink) -> bool {
        if !door.open() {
            return false;
        }
        prompts.clear(&door.prompt_source());
        dispatch(&door.id.source_label(), || sink.play_sound("door_open"));
        true
    }

    /// Animate doors and settle their prompts.
    ///
    /// With no published player position only the animation runs.
    pub fn update(
        &mut self,
        player: &PlayerPosition,
        prompts: &mut PromptChannel,
        config: &InteractionConfig,
        dt: f32,
    ) {
        for door in &mut self.doors {
            door.animate(dt, config.door_open_rate);
        }

        let Some(position) = player.get() else {
            return;
        };

        for door in &self.doors {
            let source = door.prompt_source();
            let in_range = position.distance(door.base) <= config.door_prompt_radius;
            if in_range && !door.is_open() {
                prompts.show(InteractionPrompt::new(LOCKED_DOOR_MESSAGE, source));
            } else {
                prompts.clear(&source);
            }
        }
    }

    /// Boxes of every door that currently blocks movement
    pub fn blocking_colliders<'a>(
        &'a self,
        config: &'a InteractionConfig,
    ) -> impl Iterator<Item = Aabb> + 'a {
        self.doors.iter().filter_map(move |d| d.blocking_collider(config))
    }
}
