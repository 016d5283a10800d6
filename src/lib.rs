//! Bounce Box - an interactive 2D particle sandbox
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particles, collisions, world stepping)
//! - `config`: Tunable parameters the simulation reads every frame
//!
//! Rendering, input handling and window plumbing live in host applications:
//! they draw from the read-only particle view and mutate the tunables between
//! frames. The bundled binary is a headless driver used for smoke runs.

pub mod config;
pub mod sim;

pub use config::Tunables;
pub use sim::{Particle, World, step};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Default world width in simulation units (pixels)
    pub const WORLD_WIDTH: f64 = 960.0;
    /// Default world height in simulation units (pixels)
    pub const WORLD_HEIGHT: f64 = 1010.0;

    /// Per-frame gravity acceleration while damping is enabled
    pub const DEFAULT_GRAVITY: f64 = 0.025;
    /// Multiplicative per-frame velocity attenuation
    pub const DEFAULT_DAMPING: f64 = 0.999;
    /// Velocity scale on wall contact (stored positive, applied negated)
    pub const DEFAULT_WALL_DAMPING: f64 = 0.9;
    /// Velocity scale applied to both bodies after a collision
    pub const DEFAULT_COLLISION_DAMPING: f64 = 0.999;
    /// Position advance scale per frame
    pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

    /// Particle count for a fresh generation
    pub const DEFAULT_GENERATION_COUNT: f64 = 20.0;
    /// Radius range for generated particles
    pub const DEFAULT_RADIUS_RANGE: (f64, f64) = (10.0, 40.0);

    /// Placement attempts per particle before a generation is declared infeasible
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
}

/// Unit direction vector for an angle (radians, clockwise from 3 o'clock in
/// screen coordinates where +y points down)
#[inline]
pub fn angle_to_dir(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}
