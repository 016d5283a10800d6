//! Pairwise collision detection and elastic response
//!
//! Overlap tests compare squared distances so the hot O(n²) pass never takes
//! a square root. Velocity resolution is the standard two-body elastic
//! exchange with unequal masses (`mass = radius²`); position resolution
//! separates the pair along the center line independently of velocities.

use glam::DVec2;

use super::particle::Particle;

/// Squared center distance below which a contact normal is degenerate
const DEGENERATE_DIST_SQ: f64 = 1e-12;

/// True iff the two circles overlap (squared comparison, no square root)
#[inline]
pub fn overlaps(p1: &Particle, p2: &Particle) -> bool {
    let r_sum = p1.radius + p2.radius;
    p1.pos.distance_squared(p2.pos) < r_sum * r_sum
}

/// Elastic two-body velocity exchange.
///
/// Both outgoing velocities are scaled by `collision_damping` (1.0 keeps the
/// exchange lossless and momentum-conserving). Coincident centers have no
/// usable contact normal; the exchange is skipped and the position pass
/// separates the pair instead.
pub fn resolve_velocities(p1: &mut Particle, p2: &mut Particle, collision_damping: f64) {
    let delta = p1.pos - p2.pos;
    let dist_sq = delta.length_squared();
    if dist_sq <= DEGENERATE_DIST_SQ {
        return;
    }

    let m1 = p1.mass();
    let m2 = p2.mass();
    let rel = p1.vel - p2.vel;
    // Shared scalar of the two-body formula: 2·dot(v1−v2, Δr) / ((m1+m2)·|Δr|²)
    let impulse = 2.0 * rel.dot(delta) / ((m1 + m2) * dist_sq);

    p1.vel = (p1.vel - delta * (impulse * m2)) * collision_damping;
    p2.vel = (p2.vel + delta * (impulse * m1)) * collision_damping;
}

/// Push the pair apart along the line joining their centers so they sit
/// exactly `r1 + r2` apart, centered on the shared midpoint.
///
/// Always applied when overlap is detected, regardless of the damping toggle.
/// Coincident centers separate along +x.
pub fn resolve_positions(p1: &mut Particle, p2: &mut Particle) {
    let midpoint = (p1.pos + p2.pos) * 0.5;
    let dir = (p2.pos - p1.pos).try_normalize().unwrap_or(DVec2::X);
    let half_gap = (p1.radius + p2.radius) * 0.5;
    p1.pos = midpoint - dir * half_gap;
    p2.pos = midpoint + dir * half_gap;
}
