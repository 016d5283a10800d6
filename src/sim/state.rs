//! World state
//!
//! The [`World`] owns the particle collection, the world bounds and the RNG.
//! Bounds are fixed at construction for the process lifetime; everything else
//! a host wants to vary per frame travels through [`crate::Tunables`].

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Result;
use super::particle::{PALETTE, Particle};
use super::spawn::spawn_generation;
use crate::angle_to_dir;

/// The simulation world: bounds plus an exclusively-owned particle collection.
///
/// Particles live in a flat `Vec` iterated in index order, which keeps the
/// pairwise pass cache-friendly and deterministic within a frame.
#[derive(Debug)]
pub struct World {
    pub(crate) bounds: DVec2,
    pub(crate) particles: Vec<Particle>,
    rng: Pcg32,
}

impl World {
    /// Create an empty world. `seed` makes runs reproducible; hosts that want
    /// variety pass a clock-derived seed.
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        Self {
            bounds: DVec2::new(width.max(1.0), height.max(1.0)),
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// World rectangle extents: particles live in `[0, x] × [0, y]`
    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    /// Read-only particle view for rendering
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Append one particle at an explicit position with velocity
    /// `(cos angle, sin angle) · velocity_multiplier`.
    ///
    /// Interactive placement is allowed to overlap existing particles, so no
    /// rejection sampling happens here; the next frame's resolution pass
    /// separates any penetration.
    pub fn add_particle(&mut self, pos: DVec2, radius: f64, angle: f64, velocity_multiplier: f64) {
        let color = PALETTE[self.rng.random_range(0..PALETTE.len())];
        let vel = angle_to_dir(angle) * velocity_multiplier;
        self.particles.push(Particle::new(pos, vel, radius, color));
    }

    /// Replace the entire population with a freshly generated batch.
    ///
    /// The swap is atomic: on [`super::Error::GenerationInfeasible`] the
    /// current population is kept untouched.
    pub fn regenerate(&mut self, count: f64, radius_range: (f64, f64)) -> Result<()> {
        let batch = spawn_generation(&mut self.rng, count, radius_range, self.bounds)?;
        log::info!("new generation: {} particles", batch.len());
        self.particles = batch;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_particle_uses_angle_and_multiplier() {
        let mut world = World::new(100.0, 100.0, 1);
        world.add_particle(DVec2::new(50.0, 50.0), 10.0, 0.0, 2.0);
        assert_eq!(world.len(), 1);
        let p = &world.particles()[0];
        assert!((p.vel.x - 2.0).abs() < 1e-12);
        assert!(p.vel.y.abs() < 1e-12);
    }

    #[test]
    fn add_particle_allows_overlap() {
        let mut world = World::new(100.0, 100.0, 1);
        world.add_particle(DVec2::new(50.0, 50.0), 20.0, 0.0, 0.0);
        world.add_particle(DVec2::new(50.0, 50.0), 20.0, 0.0, 0.0);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn regenerate_replaces_population() -> Result<()> {
        let mut world = World::new(960.0, 1010.0, 99);
        world.add_particle(DVec2::new(10.0, 10.0), 5.0, 0.0, 0.0);
        world.regenerate(12.0, (10.0, 20.0))?;
        assert_eq!(world.len(), 12);
        Ok(())
    }

    #[test]
    fn failed_regenerate_leaves_world_unchanged() {
        let mut world = World::new(100.0, 100.0, 5);
        world.add_particle(DVec2::new(50.0, 50.0), 10.0, 1.0, 3.0);
        let before: Vec<_> = world.particles().to_vec();

        assert!(world.regenerate(50.0, (30.0, 30.0)).is_err());

        assert_eq!(world.len(), 1);
        assert_eq!(world.particles()[0].pos, before[0].pos);
        assert_eq!(world.particles()[0].vel, before[0].vel);
    }

    #[test]
    fn same_seed_generates_identical_worlds() -> Result<()> {
        let mut a = World::new(960.0, 1010.0, 1234);
        let mut b = World::new(960.0, 1010.0, 1234);
        a.regenerate(15.0, (10.0, 30.0))?;
        b.regenerate(15.0, (10.0, 30.0))?;
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
            assert_eq!(pa.radius, pb.radius);
            assert_eq!(pa.color, pb.color);
        }
        Ok(())
    }
}
