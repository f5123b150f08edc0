//! End-to-end gameplay properties, driven through `GameWorld::tick`

use approx::assert_relative_eq;
use breach_interact::prelude::{Door, SupplyCrate, Terminal, TerminalState};
use breach_hud::prelude::PromptSource;
use breach_physics::prelude::{Aabb, RegisterOutcome, WorldObject};
use breach_runtime::prelude::*;
use breach_triggers::prelude::{TriggerComponent, TriggerVolume};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

const DT: f32 = 1.0 / 60.0;

/// Sink that records every call as a string
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl EventSink for RecordingSink {
    fn play_sound(&self, name: &str) -> HandlerResult {
        self.events.lock().push(format!("sound:{}", name));
        Ok(())
    }

    fn play_narration(&self, key: &str, zone: Option<&str>) -> HandlerResult {
        let line = match zone {
            Some(zone) => format!("narration:{}@{}", key, zone),
            None => format!("narration:{}", key),
        };
        self.events.lock().push(line);
        Ok(())
    }

    fn exit_pointer_capture(&self) -> HandlerResult {
        self.events.lock().push("pointer:exit".to_string());
        Ok(())
    }
}

fn world() -> GameWorld {
    GameWorld::new(GameConfig::default(), GameContext::headless())
}

fn recorded_world() -> (GameWorld, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let world = GameWorld::new(GameConfig::default(), GameContext::new(sink.clone()));
    (world, sink)
}

fn idle(world: &mut GameWorld, frames: usize) {
    for _ in 0..frames {
        world.tick(&PlayerInput::new(), DT);
    }
}

#[test]
fn test_speed_never_exceeds_active_cap() {
    let mut world = world();
    let walk = world.config().movement.walk_speed;
    let sprint = world.config().movement.sprint_speed;

    let patterns = [
        PlayerInput::new().forward(),
        PlayerInput::new().forward().right().sprinting(),
        PlayerInput::new().back().left(),
        PlayerInput::new(),
        PlayerInput::new().right().sprinting(),
        PlayerInput::new().left().forward(),
        PlayerInput::new().sprinting(),
    ];

    for frame in 0..840 {
        let input = patterns[(frame / 40) % patterns.len()];
        world.tick(&input, DT);
        let cap = if input.sprint { sprint } else { walk };
        assert!(
            world.player().state().speed() <= cap + 1e-4,
            "frame {}: speed {} over cap {}",
            frame,
            world.player().state().speed(),
            cap
        );
    }
}

#[test]
fn test_dodge_direction_is_locked_for_duration() {
    let mut world = world();
    for _ in 0..30 {
        world.tick(&PlayerInput::new().forward(), DT);
    }

    world.tick(&PlayerInput::new().forward().dodging(), DT);
    let captured = world.player().state().velocity.normalize();
    assert_relative_eq!(captured.z, -1.0, epsilon = 1e-5);
    assert_relative_eq!(world.player().state().speed(), 14.0, epsilon = 1e-4);

    // Remaining 14 frames of the 0.25 s dodge, with keys changing underneath
    let distractions = [
        PlayerInput::new().right(),
        PlayerInput::new().back().sprinting(),
        PlayerInput::new().left(),
    ];
    for frame in 0..14 {
        world.tick(&distractions[frame % distractions.len()], DT);
        let velocity = world.player().state().velocity;
        assert_relative_eq!(velocity.x, captured.x * 14.0, epsilon = 1e-4);
        assert_relative_eq!(velocity.z, captured.z * 14.0, epsilon = 1e-4);
    }

    world.tick(&PlayerInput::new().right(), DT);
    assert!(!world.player().state().is_dodging());
    assert!(world.player().state().speed() <= world.config().movement.walk_speed + 1e-4);
}

#[test]
fn test_dodge_request_during_cooldown_has_no_effect() {
    let mut pressed = world();
    let mut control = world();

    for world in [&mut pressed, &mut control] {
        world.tick(&PlayerInput::new().forward().dodging(), DT);
        for _ in 0..20 {
            world.tick(&PlayerInput::new().forward(), DT);
        }
    }

    for _ in 0..10 {
        pressed.tick(&PlayerInput::new().forward().dodging(), DT);
        control.tick(&PlayerInput::new().forward(), DT);

        assert_eq!(pressed.player().state().position, control.player().state().position);
        assert_eq!(pressed.player().state().velocity, control.player().state().velocity);
        assert!(!pressed.player().state().is_dodging());
    }
}

#[test]
fn test_collision_blocks_axis_and_slides() {
    let mut world = world();
    world
        .add_static_collider(Vec3::new(-5.0, 0.0, -3.0), Vec3::new(5.0, 3.0, -2.0), Some("wall"))
        .unwrap();

    let mut blocked_z = false;
    for _ in 0..90 {
        let report = world.tick(&PlayerInput::new().forward().right(), DT);
        let resolution = report.resolution.unwrap();
        blocked_z |= resolution.blocked[2];
        assert!(!resolution.blocked[0]);

        // Never inside the wall inflated by the player radius
        assert!(world.player().state().position.z >= -2.0 + 0.35 - 1e-5);
    }

    assert!(blocked_z);
    assert!(world.player().state().position.x > 1.0);
}

#[test]
fn test_trigger_fires_once_per_entry() {
    let mut world = world();
    let count = Arc::new(AtomicU32::new(0));
    let count_clone = count.clone();
    world.add_trigger(
        TriggerComponent::new(TriggerVolume::new(Vec3::new(0.0, 1.0, -10.0), Vec3::splat(1.0)))
            .with_name("scripted")
            .on_enter(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
    );

    world.spawn_player(Vec3::new(0.0, 1.0, -10.0), 0.0);
    idle(&mut world, 60);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    world.spawn_player(Vec3::new(0.0, 1.0, 0.0), 0.0);
    idle(&mut world, 5);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    world.spawn_player(Vec3::new(0.5, 1.0, -10.5), 0.0);
    idle(&mut world, 5);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_failing_trigger_does_not_stop_the_frame() {
    let mut world = world();
    let count = Arc::new(AtomicU32::new(0));
    let count_clone = count.clone();

    world.add_trigger(
        TriggerComponent::new(TriggerVolume::new(Vec3::new(0.0, 1.0, 0.0), Vec3::splat(1.0)))
            .with_name("broken")
            .on_enter(|_| panic!("zone script crashed")),
    );
    world.add_trigger(
        TriggerComponent::new(TriggerVolume::new(Vec3::new(0.0, 1.0, 0.0), Vec3::splat(1.0)))
            .with_name("healthy")
            .on_enter(move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
    );
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -1.0)));

    let report = world.tick(&PlayerInput::new(), DT);
    assert_eq!(report.trigger_events.len(), 2);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(world.prompt().unwrap().source, PromptSource::terminal("t1"));
}

#[test]
fn test_terminal_hack_opens_door_end_to_end() {
    let (mut world, sink) = recorded_world();
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -2.0)));
    world.add_door(Door::new("d1", Vec3::new(0.0, 1.5, -6.0)).controlled_by("t1"));

    idle(&mut world, 1);
    assert_eq!(world.terminals().get(&"t1".into()).unwrap().state(), TerminalState::Locked);
    assert!(!world.doors().get(&"d1".into()).unwrap().is_open());
    assert_eq!(world.colliders().len(), 1);

    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::HackStarted("t1".into())));
    assert!(world.overlay().is_open_for(&"t1".into(), OverlayMode::Normal));
    assert!(world.prompt().is_none());

    let opened = world.resolve_hack(&"t1".into(), HackOutcome::Success);
    assert_eq!(opened, vec![DoorId::new("d1")]);
    assert!(world.terminals().get(&"t1".into()).unwrap().is_hacked());
    assert!(world.doors().get(&"d1".into()).unwrap().is_open());
    assert!(!world.overlay().is_open());
    assert!(world.colliders().is_empty());

    assert_eq!(
        sink.events(),
        vec![
            "sound:hack_start",
            "narration:hacking_started",
            "pointer:exit",
            "sound:hack_success",
            "narration:terminal_hacked",
            "sound:door_open",
        ]
    );
}

#[test]
fn test_overlay_freezes_locomotion_until_cancelled() {
    let mut world = world();
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -2.0)));
    idle(&mut world, 1);
    world.tick(&PlayerInput::new().interacting(), DT);
    assert!(world.overlay().is_open());

    let before = world.player().state().position;
    for _ in 0..30 {
        world.tick(&PlayerInput::new().forward().sprinting().dodging(), DT);
    }
    assert_eq!(world.player().state().position, before);

    assert!(world.cancel_hack());
    assert!(!world.terminals().get(&"t1".into()).unwrap().is_hacked());

    world.tick(&PlayerInput::new().back(), DT);
    assert!(world.player().state().position.z > before.z);
    // Failure leaves the terminal locked and prompting again
    assert_eq!(world.prompt().unwrap().source, PromptSource::terminal("t1"));
}

#[test]
fn test_already_hacked_overlay_closes_itself() {
    let mut world = world();
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -2.0)));
    idle(&mut world, 1);
    world.tick(&PlayerInput::new().interacting(), DT);
    world.resolve_hack(&"t1".into(), HackOutcome::Success);

    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::AlreadyHacked("t1".into())));
    assert_eq!(world.overlay().mode(), Some(OverlayMode::AlreadyHacked));

    let mut closes = 0;
    for _ in 0..120 {
        if world.tick(&PlayerInput::new(), DT).overlay_auto_closed {
            closes += 1;
        }
    }
    assert_eq!(closes, 1);
    assert!(!world.overlay().is_open());
}

#[test]
fn test_terminal_prompt_outranks_door_prompt() {
    let mut world = world();
    world.add_door(Door::new("d1", Vec3::new(0.0, 1.5, -2.5)).controlled_by("t1"));
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -2.0)));

    for _ in 0..10 {
        world.tick(&PlayerInput::new(), DT);
        assert_eq!(world.prompt().unwrap().source, PromptSource::terminal("t1"));
    }
}

#[test]
fn test_gated_terminal_ignores_interaction_until_flag() {
    let mut world = world();
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -2.0)).gated_by("boss_defeated"));

    idle(&mut world, 1);
    assert!(world.prompt().is_none());

    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::Gated("t1".into())));
    assert!(!world.overlay().is_open());
    assert!(!world.terminals().get(&"t1".into()).unwrap().is_hacked());
    assert!(world.prompt().is_none());

    world.set_flag("boss_defeated", true);
    idle(&mut world, 1);
    let prompt = world.prompt().unwrap();
    assert_eq!(prompt.source, PromptSource::terminal("t1"));
    assert_eq!(prompt.message, "Hack terminal");
}

#[test]
fn test_interact_skips_nearer_gated_terminal() {
    let mut world = world();
    world.add_terminal(Terminal::new("t_gate", Vec3::new(0.0, 1.0, -1.0)).gated_by("boss_defeated"));
    world.add_terminal(Terminal::new("t_open", Vec3::new(0.0, 1.0, -2.0)));

    idle(&mut world, 1);
    assert_eq!(world.prompt().unwrap().source, PromptSource::terminal("t_open"));

    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::HackStarted("t_open".into())));
    assert!(world.overlay().is_open_for(&"t_open".into(), OverlayMode::Normal));
}

#[test]
fn test_prompted_terminal_is_the_one_hacked() {
    let mut world = world();
    world.add_terminal(Terminal::new("t_near", Vec3::new(1.0, 1.0, 0.0)));
    world.add_terminal(Terminal::new("t_far", Vec3::new(0.0, 1.0, -2.0)));

    idle(&mut world, 1);
    let prompted = world.prompt().unwrap().source.clone();
    assert_eq!(prompted, PromptSource::terminal("t_near"));

    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::HackStarted("t_near".into())));
    assert_eq!(world.overlay().terminal(), Some(&TerminalId::new("t_near")));
}

#[test]
fn test_crate_stays_quiet_while_overlay_open() {
    let mut world = world();
    world.add_terminal(Terminal::new("t1", Vec3::new(1.0, 1.0, -2.0)).gated_by("power_on"));
    world.add_crate(SupplyCrate::new("c1", Vec3::new(-1.0, 0.5, -1.0)));
    world.set_flag("power_on", true);

    idle(&mut world, 1);
    assert_eq!(world.prompt().unwrap().source, PromptSource::terminal("t1"));

    world.tick(&PlayerInput::new().interacting(), DT);
    idle(&mut world, 2);
    assert!(world.overlay().is_open());
    assert!(world.prompt().is_none());

    // Gate drops mid-hack: the key must not fall through to the crate
    world.set_flag("power_on", false);
    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::Gated("t1".into())));
    assert!(report.crate_opened.is_none());
    assert!(!world.crates().get(&"c1".into()).unwrap().is_opened());

    assert!(world.cancel_hack());
    idle(&mut world, 1);
    assert_eq!(world.prompt().unwrap().display_text(), "[E] Open crate");
}

#[test]
fn test_world_object_registered_once() {
    let mut world = world();
    let object = WorldObject::new("crate_stack")
        .with_bounds(Aabb::new(Vec3::new(3.0, 0.0, -1.0), Vec3::new(4.0, 1.5, 1.0)));

    assert_eq!(world.register_world_object(&object), RegisterOutcome::Registered);
    assert_eq!(world.register_world_object(&object), RegisterOutcome::Duplicate);
    assert_eq!(world.registry().len(), 1);

    assert_eq!(world.unregister_collider("crate_stack"), 1);
    assert!(world.registry().is_empty());
}

#[test]
fn test_crate_opens_when_no_terminal_in_range() {
    let (mut world, sink) = recorded_world();
    world.add_crate(SupplyCrate::new("c1", Vec3::new(1.0, 0.5, -1.0)).with_loot("ammo"));

    idle(&mut world, 1);
    assert_eq!(world.prompt().unwrap().display_text(), "[E] Open crate");

    let report = world.tick(&PlayerInput::new().interacting(), DT);
    assert_eq!(report.interact, Some(InteractOutcome::NoTerminalInRange));
    assert_eq!(report.crate_opened.unwrap().loot.as_deref(), Some("ammo"));
    assert!(world.prompt().is_none());
    assert_eq!(sink.events(), vec!["sound:crate_open"]);
}

#[test]
fn test_zone_briefing_plays_once() {
    let layout = LevelLayout::from_toml_str(
        r#"
        name = "briefing"

        [[zones]]
        id = "lab"
        center = [0.0, 1.0, -3.0]
        half_extents = [1.0, 1.0, 1.0]
        "#,
    )
    .unwrap();
    let sink = Arc::new(RecordingSink::default());
    let mut world =
        GameWorld::from_layout(GameConfig::default(), &layout, GameContext::new(sink.clone())).unwrap();

    for _ in 0..3 {
        world.spawn_player(Vec3::new(0.0, 1.0, -3.0), 0.0);
        idle(&mut world, 3);
        world.spawn_player(Vec3::new(0.0, 1.0, 3.0), 0.0);
        idle(&mut world, 3);
    }

    assert_eq!(sink.events(), vec!["narration:zone_enter@lab"]);
}

#[test]
fn test_no_position_before_first_frame() {
    let mut world = world();
    world.add_terminal(Terminal::new("t1", Vec3::new(0.0, 1.0, -1.0)));
    assert!(world.context().player_position.get().is_none());
    assert!(world.prompt().is_none());

    idle(&mut world, 1);
    assert!(world.prompt().is_some());
}
