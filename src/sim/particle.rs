//! Particle state and per-entity physics
//!
//! A particle is a rigid circle: position, per-frame velocity, radius and a
//! cosmetic color. Radius doubles as the mass proxy (`mass = radius²`). All
//! operations mutate the particle in place and touch nothing else.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Smallest radius a particle may carry; smaller requests are clamped up
pub const MIN_RADIUS: f64 = 1e-3;

/// An RGB color, cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Fixed palette for newly created particles
pub const PALETTE: [Rgb; 20] = [
    rgb(85, 239, 196),
    rgb(129, 236, 236),
    rgb(116, 185, 255),
    rgb(162, 155, 254),
    rgb(223, 230, 233),
    rgb(0, 184, 148),
    rgb(0, 206, 201),
    rgb(9, 132, 227),
    rgb(108, 92, 231),
    rgb(178, 190, 195),
    rgb(255, 234, 167),
    rgb(250, 177, 160),
    rgb(255, 118, 117),
    rgb(253, 121, 168),
    rgb(99, 110, 114),
    rgb(253, 203, 110),
    rgb(225, 112, 85),
    rgb(214, 48, 49),
    rgb(232, 67, 147),
    rgb(45, 52, 54),
];

/// A rigid circular particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Center position in simulation units (pixels)
    pub pos: DVec2,
    /// Per-frame displacement vector, before speed scaling
    pub vel: DVec2,
    /// Circle radius; strictly positive
    pub radius: f64,
    /// Assigned at creation, never changes
    pub color: Rgb,
}

impl Particle {
    /// Create a particle. Non-positive radii are clamped to [`MIN_RADIUS`]
    /// rather than rejected; the toy is tuned live and tolerates sloppy input.
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            radius: radius.max(MIN_RADIUS),
            color,
        }
    }

    /// Mass proxy used by the collision response: `radius²`
    #[inline]
    pub fn mass(&self) -> f64 {
        self.radius * self.radius
    }

    /// Multiplicative velocity attenuation
    pub fn apply_damping(&mut self, factor: f64) {
        self.vel *= factor;
    }

    /// Constant downward acceleration (+y is down in screen coordinates)
    pub fn apply_gravity(&mut self, accel: f64) {
        self.vel.y += accel;
    }

    /// Bounce off the enclosing `[0, bounds]` rectangle.
    ///
    /// Each axis is checked independently so diagonal (corner) contact flips
    /// both components in one call. `wall_factor` is the signed velocity
    /// multiplier: a negative value reverses direction while scaling
    /// magnitude. The position on a hit axis is clamped back into
    /// `[radius, bound - radius]`.
    pub fn resolve_wall_collision(&mut self, bounds: DVec2, wall_factor: f64) {
        if self.pos.x - self.radius < 0.0 || self.pos.x + self.radius > bounds.x {
            self.vel.x *= wall_factor;
            self.pos.x = clamp_axis(self.pos.x, self.radius, bounds.x - self.radius);
        }
        if self.pos.y - self.radius < 0.0 || self.pos.y + self.radius > bounds.y {
            self.vel.y *= wall_factor;
            self.pos.y = clamp_axis(self.pos.y, self.radius, bounds.y - self.radius);
        }
    }

    /// Advance position by one frame's worth of velocity
    pub fn integrate(&mut self, speed_multiplier: f64) {
        self.pos += self.vel * speed_multiplier;
    }

    /// Weak attraction impulse toward a point. Interactive hosts use this for
    /// pointer attraction.
    pub fn nudge_toward(&mut self, target: DVec2, strength: f64) {
        self.vel += (target - self.pos) * 1e-5 * strength;
    }
}

/// Clamp that tolerates an inverted range (radius wider than the world): the
/// low bound wins, matching the original clamp-to-low behavior.
#[inline]
fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
