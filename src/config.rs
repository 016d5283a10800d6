//! Simulation tunables
//!
//! Owned by the host (input/UI layer); the engine reads them every frame and
//! never mutates them. Persisted as JSON so a host can save and restore a
//! tuning session.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;
use crate::sim::{Error, Result};

/// Per-frame knobs for the simulation.
///
/// `damping_enabled` gates the whole dissipative family: with it off, gravity
/// is zero and every damping factor acts as identity, leaving a perfectly
/// elastic, frictionless world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tunables {
    /// Downward acceleration per frame (applied only while damping is on)
    pub gravity_accel: f64,
    /// Master switch for gravity and all damping factors
    pub damping_enabled: bool,
    /// Per-frame multiplicative velocity attenuation
    pub damping_factor: f64,
    /// Velocity scale on wall contact. Stored as a positive magnitude; the
    /// engine negates it so a wall bounce always reverses direction.
    pub wall_damping_factor: f64,
    /// Velocity scale applied to both bodies after a collision
    pub collision_damping_factor: f64,
    /// Scale on per-frame position advance
    pub speed_multiplier: f64,
    /// Particle count for the next generation; fractional because it is
    /// adjusted continuously while a key is held
    pub generation_count: f64,
    /// Radius range for the next generation
    pub generation_radius_range: (f64, f64),
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            gravity_accel: DEFAULT_GRAVITY,
            damping_enabled: true,
            damping_factor: DEFAULT_DAMPING,
            wall_damping_factor: DEFAULT_WALL_DAMPING,
            collision_damping_factor: DEFAULT_COLLISION_DAMPING,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            generation_count: DEFAULT_GENERATION_COUNT,
            generation_radius_range: DEFAULT_RADIUS_RANGE,
        }
    }
}

impl Tunables {
    /// Per-frame damping factor after the master switch (identity when off)
    pub fn effective_damping(&self) -> f64 {
        if self.damping_enabled {
            self.damping_factor
        } else {
            1.0
        }
    }

    /// Gravity after the master switch (zero when off)
    pub fn effective_gravity(&self) -> f64 {
        if self.damping_enabled {
            self.gravity_accel
        } else {
            0.0
        }
    }

    /// Signed wall multiplier handed to the particles: negated magnitude
    /// while damping is on, a pure reversal (−1.0) while off
    pub fn effective_wall_factor(&self) -> f64 {
        if self.damping_enabled {
            -self.wall_damping_factor
        } else {
            -1.0
        }
    }

    /// Collision damping after the master switch (identity when off)
    pub fn effective_collision_damping(&self) -> f64 {
        if self.damping_enabled {
            self.collision_damping_factor
        } else {
            1.0
        }
    }

    /// Load tunables from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Save tunables to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
