//! Cosmetic particle trail behind the player
//!
//! Seeded so a run replays identically, but never read by gameplay code.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Maximum live trail particles
pub const MAX_TRAIL_PARTICLES: usize = 64;

/// A single trail square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length; the particle dies when this reaches zero
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Trail {
    pub particles: Vec<TrailParticle>,
    rng: Pcg32,
}

impl Trail {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(MAX_TRAIL_PARTICLES),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn one particle just behind `origin`
    pub fn emit(&mut self, origin: Vec2) {
        if self.particles.len() >= MAX_TRAIL_PARTICLES {
            self.particles.remove(0);
        }
        let vx = self.rng.random_range(0..=25) as f32 / 10.0 - 1.0;
        let size = self.rng.random_range(5..=8) as f32;
        self.particles.push(TrailParticle {
            pos: origin + Vec2::new(-5.0, -8.0),
            vel: Vec2::new(vx, 0.0),
            size,
        });
    }

    /// Move, shrink and drift every particle, dropping dead ones
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.pos += particle.vel;
            particle.size -= 0.5;
            particle.vel.x -= 0.4;
        }
        self.particles.retain(|p| p.size > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_expire() {
        let mut trail = Trail::new(7);
        trail.emit(Vec2::new(100.0, 100.0));
        assert_eq!(trail.particles.len(), 1);
        let p = trail.particles[0];
        assert!((5.0..=8.0).contains(&p.size));
        assert!((-1.0..=1.5).contains(&p.vel.x));

        for _ in 0..16 {
            trail.update();
        }
        assert!(trail.particles.is_empty());
    }

    #[test]
    fn test_same_seed_same_trail() {
        let mut a = Trail::new(42);
        let mut b = Trail::new(42);
        for i in 0..10 {
            let origin = Vec2::new(i as f32, 0.0);
            a.emit(origin);
            b.emit(origin);
            a.update();
            b.update();
        }
        assert_eq!(a.particles, b.particles);
    }

    #[test]
    fn test_capacity_is_bounded() {
        let mut trail = Trail::new(1);
        for _ in 0..(MAX_TRAIL_PARTICLES * 2) {
            trail.emit(Vec2::ZERO);
        }
        assert_eq!(trail.particles.len(), MAX_TRAIL_PARTICLES);
    }
}
