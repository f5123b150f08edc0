//! Breach - headless gameplay runner
//!
//! Loads configuration and a level layout, then plays the scripted demo at a
//! fixed step, logging every transition. Usage: `breach [level.toml]`.

use breach_runtime::prelude::*;
use std::sync::Arc;

/// Hard stop for the scripted run (30 s of game time at 60 Hz)
const MAX_FRAMES: u32 = 60 * 30;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = GameConfig::load();
    config.print_summary();

    let layout = match std::env::args().nth(1) {
        Some(path) => LevelLayout::load_from_file(&path),
        None => {
            log::info!("No level given, using the built-in demo corridor");
            LevelLayout::demo()
        }
    };
    let layout = match layout {
        Ok(layout) => layout,
        Err(e) => {
            log::error!("Failed to load level: {}", e);
            std::process::exit(1);
        }
    };

    let context = GameContext::new(Arc::new(LogSink));
    let mut world = match GameWorld::from_layout(config, &layout, context) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Failed to assemble level: {}", e);
            std::process::exit(1);
        }
    };

    let Some(mut script) = DemoScript::plan(&world) else {
        log::warn!("Level has no usable terminal; nothing to demo");
        return;
    };

    let dt = world.config().frame_time();
    let status_every = u64::from(world.config().frame_rate.max(1));

    for _ in 0..MAX_FRAMES {
        let input = script.next_input(&world);
        let report = world.tick(&input, dt);
        script.after_tick(&mut world, &report);

        if world.frame() % status_every == 0 {
            log::info!("{}", world.debug_info());
        }
        if script.is_done() {
            break;
        }
    }

    if script.is_done() {
        log::info!("Demo complete: {}", world.debug_info());
    } else {
        log::warn!("Demo stopped at {:?}: {}", script.phase(), world.debug_info());
    }
}
