//! Particle simulation
//!
//! Integer particles with gravity, a bounded trail history and a
//! randomly drawn lifespan.

pub mod lifecycle;
pub mod pool;
pub mod trail;

pub use lifecycle::{Particle, GRAVITY, MAX_LIFESPAN, SPAWN_JITTER};
pub use pool::{ParticlePool, PARTICLE_COUNT};
pub use trail::{Trail, TRAIL_LEN};
