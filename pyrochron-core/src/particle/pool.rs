//! Fixed-capacity particle pool
//!
//! All particles are respawned together at the start of a burst and then
//! die individually as their lifespans run out.

use super::lifecycle::Particle;
use crate::geometry::{Point, Size};
use crate::traits::RandomSource;

/// Number of particles in a burst
pub const PARTICLE_COUNT: usize = 150;

/// Pool of particles sharing one spawn center
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticlePool {
    particles: [Particle; PARTICLE_COUNT],
    spawn_center: Point,
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticlePool {
    /// Create a pool with every particle inactive
    pub const fn new() -> Self {
        Self {
            particles: [Particle::dead(); PARTICLE_COUNT],
            spawn_center: Point::ZERO,
        }
    }

    /// Pick a random spawn center inside the current drawable area
    pub fn random_center<R: RandomSource + ?Sized>(rng: &mut R, bounds: Size) -> Point {
        Point::new(
            rng.next_in_range(0, bounds.max_x()),
            rng.next_in_range(0, bounds.max_y()),
        )
    }

    /// Respawn every particle around `center`
    ///
    /// Prior particle state is overwritten unconditionally.
    pub fn spawn_all<R: RandomSource + ?Sized>(&mut self, rng: &mut R, center: Point) {
        self.spawn_center = center;
        for particle in self.particles.iter_mut() {
            *particle = Particle::spawn(rng, center);
        }
    }

    /// Advance every live particle by one step
    pub fn integrate(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.step();
        }
    }

    /// Center used for the most recent spawn
    pub fn spawn_center(&self) -> Point {
        self.spawn_center
    }

    /// All particles, live or dead
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles still taking part in the animation
    pub fn live(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(|p| p.is_alive())
    }

    /// Number of live particles
    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// True once every particle has died
    pub fn is_settled(&self) -> bool {
        self.particles.iter().all(|p| !p.is_alive())
    }
}
