//! Board-agnostic core logic for the firework watchface
//!
//! This crate contains all animation logic that does not depend on a
//! specific display, timer service or input source:
//!
//! - Geometry primitives (points, sizes)
//! - Particle pool with bounded trail history
//! - Animation state machine and frame controller
//! - Trigger policy for clock, tap and connectivity events
//! - Host service traits (random source, bounds, redraw, frame scheduling)
//! - Preference and animation configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod animation;
pub mod config;
pub mod geometry;
pub mod particle;
pub mod trigger;
pub mod traits;

pub use animation::{AnimationEngine, AnimationState, BurstOutcome, FrameOutcome, FrameToken};
pub use config::{AnimationConfig, PreferenceKey, Preferences};
pub use geometry::{Point, Size};
pub use particle::{Particle, ParticlePool, Trail, PARTICLE_COUNT, TRAIL_LEN};
pub use trigger::Trigger;
