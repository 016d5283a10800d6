//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Frame-stepped only, one full step at a time
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particle;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{overlaps, resolve_positions, resolve_velocities};
pub use particle::{PALETTE, Particle, Rgb};
pub use spawn::spawn_generation;
pub use state::World;
pub use tick::step;

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Physics operations themselves never fail on finite input; errors only
/// arise from infeasible generation requests and from config I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejection sampling ran out of attempts while placing a generation.
    /// The world's current population is left untouched.
    #[error(
        "could not place particle {placed} of {requested} without overlap; request fewer particles or smaller radii"
    )]
    GenerationInfeasible { placed: usize, requested: usize },

    /// Config file failed to parse or validate.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Propagated I/O errors (config load/save).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
