//! Single particle state and its spawn / integrate / die lifecycle

use super::trail::Trail;
use crate::geometry::Point;
use crate::traits::RandomSource;

/// Spawn jitter window: positions land in `center + [0, SPAWN_JITTER]`
pub const SPAWN_JITTER: i16 = 19;

/// Horizontal launch speed range is `[-MAX_DRIFT, MAX_DRIFT]`
pub const MAX_DRIFT: i16 = 2;

/// Vertical launch speed range is `[-MAX_LAUNCH, 0]` (upwards)
pub const MAX_LAUNCH: i16 = 19;

/// Lifespans are drawn from `[0, MAX_LIFESPAN]`
pub const MAX_LIFESPAN: u16 = 99;

/// Downward acceleration added to `velocity.y` every step
pub const GRAVITY: i16 = 1;

/// A single firework spark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Particle {
    position: Point,
    velocity: Point,
    trail: Trail,
    age: u16,
    lifespan: u16,
    alive: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self::dead()
    }
}

impl Particle {
    /// An inactive particle, skipped until respawned
    pub const fn dead() -> Self {
        Self {
            position: Point::ZERO,
            velocity: Point::ZERO,
            trail: Trail::new(),
            age: 0,
            lifespan: 0,
            alive: false,
        }
    }

    /// A freshly spawned particle with explicit launch parameters
    ///
    /// `lifespan` is capped at [`MAX_LIFESPAN`].
    pub fn new(position: Point, velocity: Point, lifespan: u16) -> Self {
        Self {
            position,
            velocity,
            trail: Trail::new(),
            age: 0,
            lifespan: lifespan.min(MAX_LIFESPAN),
            alive: true,
        }
    }

    /// Spawn a particle with random jitter around `center`
    pub fn spawn<R: RandomSource + ?Sized>(rng: &mut R, center: Point) -> Self {
        let position = center
            + Point::new(
                rng.next_in_range(0, SPAWN_JITTER),
                rng.next_in_range(0, SPAWN_JITTER),
            );
        let velocity = Point::new(
            rng.next_in_range(-MAX_DRIFT, MAX_DRIFT),
            rng.next_in_range(-MAX_LAUNCH, 0),
        );
        let lifespan = rng.next_in_range(0, MAX_LIFESPAN as i16) as u16;
        Self::new(position, velocity, lifespan)
    }

    /// Advance one simulation step
    ///
    /// Dead particles are left untouched. There is no edge reflection:
    /// a particle that leaves the screen is only reclaimed by its lifespan.
    pub fn step(&mut self) {
        if !self.alive {
            return;
        }

        self.velocity.y = self.velocity.y.saturating_add(GRAVITY);
        self.position += self.velocity;
        self.trail.push_front(self.position);

        self.age = self.age.saturating_add(1);
        if self.age > self.lifespan {
            // Trail is kept as-is; renderers skip dead particles
            self.alive = false;
        }
    }

    /// Current position
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current per-step velocity
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Recent positions, newest first
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Frames survived since spawn, or `None` once dead
    pub fn age(&self) -> Option<u16> {
        if self.alive {
            Some(self.age)
        } else {
            None
        }
    }

    /// Age after which the particle dies
    pub fn lifespan(&self) -> u16 {
        self.lifespan
    }

    /// Check if the particle still takes part in integration and rendering
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
