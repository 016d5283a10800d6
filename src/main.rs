//! Bounce Box headless driver
//!
//! Seeds a world, steps it for a fixed number of frames and logs population
//! stats along the way. Stands in for a rendering host during development:
//! `bounce-box [tunables.json]`.

use log::{info, warn};

use bounce_box::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use bounce_box::sim::Result;
use bounce_box::{Tunables, World, step};

/// Frames to run: ten seconds at 60 FPS
const FRAMES: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let tunables = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading tunables from {path}");
            Tunables::load(&path)?
        }
        None => Tunables::default(),
    };

    let mut world = World::new(WORLD_WIDTH, WORLD_HEIGHT, 0xB0B0);
    world.regenerate(tunables.generation_count, tunables.generation_radius_range)?;
    info!(
        "world {}x{} seeded with {} particles",
        WORLD_WIDTH,
        WORLD_HEIGHT,
        world.len()
    );

    for frame in 1..=FRAMES {
        step(&mut world, &tunables);

        if frame % 60 == 0 {
            let n = world.len().max(1) as f64;
            let mean_speed: f64 =
                world.particles().iter().map(|p| p.vel.length()).sum::<f64>() / n;
            info!(
                "frame {frame:4} | particles {:3} | mean speed {mean_speed:.3}",
                world.len()
            );
        }
    }

    if world.is_empty() {
        warn!("simulation finished with an empty world");
    }
    info!("done after {FRAMES} frames");
    Ok(())
}
