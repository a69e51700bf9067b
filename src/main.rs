//! Brickfield headless demo
//!
//! Drives the simulation for a fixed number of frames with a scripted input
//! pattern and reports what a real window host would have drawn. Usage:
//!
//! ```text
//! brickfield [seed] [layout.json]
//! ```

use anyhow::{Context, Result};

use brickfield::render::{VertexBatch, draw_state};
use brickfield::sim::{GameState, TickInput, WallLayout, tick};

const DEMO_FRAMES: u32 = 600;

fn main() {
    // The summary lands on info; keep it visible without RUST_LOG set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("startup failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("invalid seed {raw:?}"))?,
        None => 0xB121C4F1E1D,
    };

    let mut state = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading layout {path:?}"))?;
            let layout = WallLayout::from_json(&json)
                .with_context(|| format!("parsing layout {path:?}"))?;
            log::info!("loaded layout with {} bricks from {path}", layout.bricks.len());
            GameState::from_layout(seed, &layout)
        }
        None => GameState::new(seed),
    };

    log::info!(
        "seed {seed:#x}: {} bricks, running {DEMO_FRAMES} frames",
        state.bricks.len()
    );

    for frame in 0..DEMO_FRAMES {
        let input = TickInput {
            // Serve a fresh ball every couple of seconds
            spawn_ball: frame % 120 == 0,
            // Sweep the paddle back and forth
            move_left: (frame / 60) % 2 == 0,
            move_right: (frame / 60) % 2 == 1,
            ..Default::default()
        };
        tick(&mut state, &input);
    }

    let mut batch = VertexBatch::new();
    draw_state(&state, &mut batch);

    let active = state.bricks.iter().filter(|b| b.active).count();
    log::info!(
        "after {} ticks: {} balls, {}/{} bricks active, final frame is {} vertices",
        state.time_ticks,
        state.balls.len(),
        active,
        state.bricks.len(),
        batch.vertices().len()
    );

    Ok(())
}
