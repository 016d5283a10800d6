//! Batch particle generation
//!
//! A generation is a mutually non-overlapping batch of particles placed by
//! rejection sampling. Placement attempts are capped per particle so an
//! infeasible density request reports [`Error::GenerationInfeasible`] instead
//! of spinning forever.

use glam::DVec2;
use rand::Rng;

use super::particle::{MIN_RADIUS, PALETTE, Particle};
use super::{Error, Result};
use crate::angle_to_dir;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;

/// Generate `count` particles with radii uniform in `radius_range`, positions
/// uniform within the bounds inset by each radius, unit-speed velocities in
/// uniformly random directions, and random palette colors.
///
/// `count` may be fractional (it arrives from a continuously-tuned knob) and
/// is rounded to the nearest non-negative integer. An inverted radius range
/// is swapped rather than rejected.
pub fn spawn_generation<R: Rng>(
    rng: &mut R,
    count: f64,
    radius_range: (f64, f64),
    bounds: DVec2,
) -> Result<Vec<Particle>> {
    let requested = count.round().max(0.0) as usize;
    let (mut lo, mut hi) = radius_range;
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    lo = lo.max(MIN_RADIUS);
    hi = hi.max(lo);

    let mut batch: Vec<Particle> = Vec::with_capacity(requested);
    for placed in 0..requested {
        let radius = rng.random_range(lo..=hi);
        // A circle wider than the world can never be placed
        if 2.0 * radius > bounds.x.min(bounds.y) {
            return Err(Error::GenerationInfeasible { placed, requested });
        }

        let mut attempts = 0u32;
        let pos = loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                return Err(Error::GenerationInfeasible { placed, requested });
            }
            attempts += 1;
            let candidate = DVec2::new(
                rng.random_range(radius..=bounds.x - radius),
                rng.random_range(radius..=bounds.y - radius),
            );
            if !overlaps_batch(&batch, candidate, radius) {
                break candidate;
            }
        };

        let angle = rng.random_range(0.0..std::f64::consts::TAU);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        batch.push(Particle::new(pos, angle_to_dir(angle), radius, color));
    }

    Ok(batch)
}

/// Overlap test against every already-accepted member of the batch
fn overlaps_batch(batch: &[Particle], pos: DVec2, radius: f64) -> bool {
    batch.iter().any(|p| {
        let r_sum = radius + p.radius;
        pos.distance_squared(p.pos) < r_sum * r_sum
    })
}
