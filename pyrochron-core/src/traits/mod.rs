//! Host service traits
//!
//! These traits define the interface between the animation logic and the
//! platform that hosts it: randomness, display geometry, redraw requests
//! and one-shot frame timers.

pub mod display;
pub mod random;
pub mod scheduler;

pub use display::{DisplayBounds, RedrawRequest};
pub use random::{RandomSource, SeededRandom};
pub use scheduler::{FrameScheduler, FrameToken};

/// Everything the animation engine needs from its host
///
/// Implemented automatically for any type providing all four services.
pub trait AnimationHost: RandomSource + DisplayBounds + RedrawRequest + FrameScheduler {}

impl<T: RandomSource + DisplayBounds + RedrawRequest + FrameScheduler> AnimationHost for T {}
