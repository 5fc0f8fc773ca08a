//! Brick-break particle bursts
//!
//! Particles never collide and feel no gravity. They fly in a straight line
//! until their box leaves the playfield, then drop out of the live set on
//! that same frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entity::{Entity, Shape};
use crate::consts::*;

/// A single spark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: PARTICLE_RADIUS,
        }
    }
}

impl Entity for Particle {
    fn shape(&self) -> Shape {
        Shape::Circle {
            center: self.pos,
            radius: self.radius,
        }
    }

    /// Straight-line flight, no gravity or drag
    fn update(&mut self) {
        self.pos += self.vel;
    }
}

/// Random speed component in `±[PARTICLE_MIN_SPEED, max_speed]`
fn random_component<R: Rng + ?Sized>(rng: &mut R, max_speed: f32) -> f32 {
    let magnitude = rng.random_range(PARTICLE_MIN_SPEED..=max_speed.max(PARTICLE_MIN_SPEED));
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Spawn `count` particles at `center`, each with an independent velocity
pub fn spawn_burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    center: Vec2,
    count: usize,
    max_speed: f32,
) {
    particles.reserve(count);
    for _ in 0..count {
        let vel = Vec2::new(
            random_component(rng, max_speed),
            random_component(rng, max_speed),
        );
        particles.push(Particle::new(center, vel));
    }
}

/// Move every particle, then compact out the ones that left `bounds`
pub fn update_particles(particles: &mut Vec<Particle>, bounds: &Aabb) {
    particles.retain_mut(|particle| {
        particle.update();
        !particle.aabb().is_outside(bounds)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Aabb {
        Aabb::from_rect(Vec2::ZERO, Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT))
    }

    #[test]
    fn test_burst_velocities_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, &mut rng, Vec2::new(100.0, 50.0), 50, 3.0);

        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(100.0, 50.0));
            assert!(p.vel.x.abs() >= PARTICLE_MIN_SPEED && p.vel.x.abs() <= 3.0);
            assert!(p.vel.y.abs() >= PARTICLE_MIN_SPEED && p.vel.y.abs() <= 3.0);
        }
        // Random signs: both directions show up in a burst this size
        assert!(particles.iter().any(|p| p.vel.x < 0.0));
        assert!(particles.iter().any(|p| p.vel.x > 0.0));
    }

    #[test]
    fn test_particle_removed_after_leaving() {
        // Center of a 480-wide field, moving right at 3 px/frame with radius 2:
        // fully outside once x - 2 > 480, i.e. after ceil(242 / 3) = 81 frames.
        let mut particles = vec![Particle::new(Vec2::new(240.0, 160.0), Vec2::new(3.0, 0.0))];
        let bounds = field();

        for _ in 0..80 {
            update_particles(&mut particles, &bounds);
        }
        assert_eq!(particles.len(), 1);

        update_particles(&mut particles, &bounds);
        assert!(particles.is_empty());
    }

    #[test]
    fn test_compaction_keeps_order() {
        let bounds = field();
        let mut particles = vec![
            Particle::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0)),
            Particle::new(Vec2::new(1.0, 10.0), Vec2::new(-5.0, 0.0)),
            Particle::new(Vec2::new(20.0, 10.0), Vec2::new(0.0, 1.0)),
        ];
        update_particles(&mut particles, &bounds);

        assert_eq!(particles.len(), 2);
        assert_eq!(particles[0].pos, Vec2::new(11.0, 10.0));
        assert_eq!(particles[1].pos, Vec2::new(20.0, 11.0));
    }
}
