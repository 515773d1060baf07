use anyhow::{Context, Result};
use glam::Vec2;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::str::FromStr;

use bloksel_sandbox::{
    config::{load_or_create_config, EngineConfig},
    engine::Engine,
    player::InputState,
};

const FRAME_DT: f32 = 1.0 / 60.0;

fn load_config() -> Result<EngineConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EngineConfig::load_or_create(&path),
        None => load_or_create_config(),
    }
}

fn run_frames(engine: &mut Engine, input: &mut InputState, frames: u32) {
    for _ in 0..frames {
        engine.tick(FRAME_DT, input);
        input.reset();
    }
}

fn main() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;

    let level = LevelFilter::from_str(&config.rendering.log_level).ok();
    SimpleLogger::new()
        .with_level(level.unwrap_or(LevelFilter::Info))
        .init()?;
    if level.is_none() {
        warn!(
            "Unknown log level {:?}, using info",
            config.rendering.log_level
        );
    }
    info!("Initializing sandbox...");

    let mut engine = Engine::new(config)?;
    let mut input = InputState::default();

    // Settle on the ground, then sprint forward while turning and jumping.
    run_frames(&mut engine, &mut input, 60);
    input.forward = true;
    input.sprint = true;
    for step in 0..4 {
        input.handle_mouse_move(Vec2::new(150.0, 0.0));
        input.jump = step % 2 == 0;
        run_frames(&mut engine, &mut input, 45);
    }
    input = InputState::default();

    // Dig into the ground below and put a block back.
    engine.player_mut().rotation = Vec2::new(0.0, -90.0);
    match engine.break_block() {
        Some((position, kind)) => info!("Broke {} at {}", kind, position),
        None => info!("Nothing breakable in reach"),
    }
    engine.select_slot(3);
    if let Some(position) = engine.place_block() {
        info!("Placed {} at {}", engine.inventory().selected(), position);
    }
    run_frames(&mut engine, &mut input, 10);

    for line in engine.debug_lines() {
        info!("{}", line);
    }
    let world = engine.world();
    let (allocated, released) = world.sink().totals();
    info!(
        "{} ticks: {} blocks in {} sectors, {} shown, {} live quads ({} bytes), {} allocated / {} released",
        engine.ticks(),
        world.block_count(),
        world.sectors().sector_count(),
        world.shown_count(),
        world.sink().len(),
        world.sink().vertex_bytes().len(),
        allocated,
        released
    );

    Ok(())
}
