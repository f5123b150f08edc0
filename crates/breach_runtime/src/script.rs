//! Scripted demo run
//!
//! Stands in for a human at the keyboard: walks to the first usable terminal,
//! hacks it, then walks through the door it controls.

use crate::world::{FrameReport, GameWorld};
use breach_core::id::TerminalId;
use breach_interact::overlay::HackOutcome;
use breach_interact::terminal::InteractOutcome;
use breach_player::input::PlayerInput;
use breach_player::movement::{wrap_angle, yaw_from_direction};
use glam::{Vec2, Vec3};

/// Frames the simulated mini-game takes
const HACK_FRAMES: u32 = 45;

/// Distance walked past the door before the script ends
const WALK_PAST_DOOR: f32 = 4.0;

/// Where the script is
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptPhase {
    /// Walking toward the terminal
    ApproachTerminal(TerminalId),
    /// Overlay open, mini-game in progress
    Hacking {
        /// Terminal being hacked
        terminal: TerminalId,
        /// Frames until the mini-game resolves
        remaining: u32,
    },
    /// Walking through the opened door
    WalkThrough(Vec3),
    /// Finished
    Done,
}

/// Drives a [`GameWorld`] through the terminal/door sequence
#[derive(Debug, Clone)]
pub struct DemoScript {
    phase: ScriptPhase,
}

impl DemoScript {
    /// Plan against the first ungated, locked terminal. `None` if there is none.
    pub fn plan(world: &GameWorld) -> Option<Self> {
        let terminal = world
            .terminals()
            .iter()
            .find(|t| !t.is_hacked() && !t.is_gated(world.flags()))?;
        log::info!("Demo script targets terminal {}", terminal.id);
        Some(Self {
            phase: ScriptPhase::ApproachTerminal(terminal.id.clone()),
        })
    }

    /// Current phase
    pub fn phase(&self) -> &ScriptPhase {
        &self.phase
    }

    /// Whether the script has finished
    pub fn is_done(&self) -> bool {
        self.phase == ScriptPhase::Done
    }

    /// Input for the next frame
    pub fn next_input(&self, world: &GameWorld) -> PlayerInput {
        match &self.phase {
            ScriptPhase::ApproachTerminal(id) => {
                let Some(terminal) = world.terminals().get(id) else {
                    return PlayerInput::new();
                };
                let distance = world.player().state().position.distance(terminal.position);
                if distance <= world.config().interaction.interaction_radius * 0.8 {
                    PlayerInput::new().interacting()
                } else {
                    steer_toward(world, terminal.position).forward()
                }
            }
            ScriptPhase::WalkThrough(target) => steer_toward(world, *target).forward(),
            ScriptPhase::Hacking { .. } | ScriptPhase::Done => PlayerInput::new(),
        }
    }

    /// Advance the script after a tick
    pub fn after_tick(&mut self, world: &mut GameWorld, report: &FrameReport) {
        let next = match &self.phase {
            ScriptPhase::ApproachTerminal(id) => match &report.interact {
                Some(InteractOutcome::HackStarted(started)) if started == id => {
                    Some(ScriptPhase::Hacking {
                        terminal: id.clone(),
                        remaining: HACK_FRAMES,
                    })
                }
                _ => None,
            },
            ScriptPhase::Hacking { terminal, remaining } => {
                if *remaining > 0 {
                    Some(ScriptPhase::Hacking {
                        terminal: terminal.clone(),
                        remaining: remaining - 1,
                    })
                } else {
                    let opened = world.resolve_hack(terminal, HackOutcome::Success);
                    let target = opened
                        .first()
                        .and_then(|id| world.doors().get(id))
                        .map(|door| {
                            let from = world.player().state().position;
                            let through = Vec3::new(door.base.x, from.y, door.base.z);
                            let direction = (through - from).normalize_or_zero();
                            through + direction * WALK_PAST_DOOR
                        });
                    Some(match target {
                        Some(target) => ScriptPhase::WalkThrough(target),
                        None => ScriptPhase::Done,
                    })
                }
            }
            ScriptPhase::WalkThrough(target) => {
                let position = world.player().state().position;
                let flat = Vec2::new(position.x - target.x, position.z - target.z);
                (flat.length() < 0.5).then_some(ScriptPhase::Done)
            }
            ScriptPhase::Done => None,
        };

        if let Some(next) = next {
            log::debug!("Demo script: {:?}", next);
            self.phase = next;
        }
    }
}

/// Look input that turns the camera to face `target` this frame
fn steer_toward(world: &GameWorld, target: Vec3) -> PlayerInput {
    let state = world.player().state();
    let to_target = target - state.position;
    if Vec2::new(to_target.x, to_target.z).length() < 1e-3 {
        return PlayerInput::new();
    }
    let turn = wrap_angle(yaw_from_direction(to_target) - state.camera_yaw);
    let sensitivity = world.config().camera.sensitivity.max(f32::EPSILON);
    PlayerInput::new().with_look(Vec2::new(turn / sensitivity, 0.0))
}
