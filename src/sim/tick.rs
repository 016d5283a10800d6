//! Per-frame world stepping
//!
//! One [`step`] call is one frame: per-particle forces and wall handling,
//! integration, then a single pairwise resolution pass. There is no
//! sub-stepping and no convergence loop; a triple overlap the single pass
//! leaves imperfect settles over the following frames.

use super::collision::{overlaps, resolve_positions, resolve_velocities};
use super::state::World;
use crate::config::Tunables;

/// Advance the world by one frame using the current tunables.
pub fn step(world: &mut World, tunables: &Tunables) {
    let bounds = world.bounds;
    let damping = tunables.effective_damping();
    let gravity = tunables.effective_gravity();
    let wall_factor = tunables.effective_wall_factor();
    let collision_damping = tunables.effective_collision_damping();

    for particle in &mut world.particles {
        particle.apply_damping(damping);
        particle.apply_gravity(gravity);
        particle.resolve_wall_collision(bounds, wall_factor);
        particle.integrate(tunables.speed_multiplier);
    }

    // All C(n,2) unordered pairs against post-integration positions, in
    // collection order. Pairs are independent within the frame: resolving
    // (i, j) never re-tests earlier pairs.
    let n = world.particles.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = world.particles.split_at_mut(j);
            let p1 = &mut head[i];
            let p2 = &mut tail[0];
            if overlaps(p1, p2) {
                resolve_velocities(p1, p2, collision_damping);
                resolve_positions(p1, p2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn frictionless() -> Tunables {
        Tunables {
            damping_enabled: false,
            ..Tunables::default()
        }
    }

    #[test]
    fn gravity_accelerates_resting_particle() {
        let mut world = World::new(960.0, 1010.0, 1);
        world.add_particle(DVec2::new(480.0, 500.0), 10.0, 0.0, 0.0);

        let tunables = Tunables {
            damping_enabled: true,
            gravity_accel: 0.025,
            damping_factor: 1.0,
            ..Tunables::default()
        };
        step(&mut world, &tunables);
        assert!((world.particles()[0].vel.y - 0.025).abs() < 1e-15);
    }

    #[test]
    fn disabled_damping_means_no_gravity_and_no_loss() {
        let mut world = World::new(960.0, 1010.0, 1);
        world.add_particle(DVec2::new(480.0, 500.0), 10.0, 0.0, 3.0);

        step(&mut world, &frictionless());
        let p = &world.particles()[0];
        assert!((p.vel.x - 3.0).abs() < 1e-12);
        assert_eq!(p.vel.y, 0.0);
        assert!((p.pos.x - 483.0).abs() < 1e-12);
    }

    #[test]
    fn wall_bounce_reverses_direction() {
        let mut world = World::new(100.0, 100.0, 1);
        // Heading into the right wall, already penetrating
        world.add_particle(DVec2::new(95.0, 50.0), 10.0, 0.0, 2.0);

        step(&mut world, &frictionless());
        let p = &world.particles()[0];
        assert!(p.vel.x < 0.0, "velocity should reverse, got {}", p.vel.x);
        assert!(p.pos.x <= 100.0 - p.radius + 1e-9);
    }

    #[test]
    fn overlapping_pair_exchanges_and_separates() {
        let mut world = World::new(100.0, 100.0, 1);
        world.add_particle(DVec2::new(40.0, 50.0), 10.0, 0.0, 1.0);
        world.add_particle(DVec2::new(55.0, 50.0), 10.0, std::f64::consts::PI, 1.0);

        // Zero speed isolates the resolution pass from integration
        let tunables = Tunables {
            speed_multiplier: 0.0,
            ..frictionless()
        };
        step(&mut world, &tunables);

        let a = &world.particles()[0];
        let b = &world.particles()[1];
        assert!((a.vel.x - -1.0).abs() < 1e-12);
        assert!((b.vel.x - 1.0).abs() < 1e-12);
        assert!((a.pos.distance(b.pos) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn step_is_deterministic() {
        let build = || {
            let mut world = World::new(960.0, 1010.0, 777);
            world
                .regenerate(20.0, (10.0, 30.0))
                .expect("feasible generation");
            world
        };
        let mut a = build();
        let mut b = build();

        let tunables = Tunables::default();
        for _ in 0..120 {
            step(&mut a, &tunables);
            step(&mut b, &tunables);
        }
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }

    #[test]
    fn coincident_particles_survive_a_step() {
        let mut world = World::new(100.0, 100.0, 1);
        world.add_particle(DVec2::new(50.0, 50.0), 5.0, 0.0, 0.0);
        world.add_particle(DVec2::new(50.0, 50.0), 5.0, 0.0, 0.0);

        step(&mut world, &frictionless());
        for p in world.particles() {
            assert!(p.pos.is_finite());
            assert!(p.vel.is_finite());
        }
        let dist = world.particles()[0].pos.distance(world.particles()[1].pos);
        assert!((dist - 10.0).abs() < 1e-9);
    }
}
