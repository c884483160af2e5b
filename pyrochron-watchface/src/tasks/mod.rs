//! Async tasks
//!
//! The watchface runs a single task; event sources talk to it through
//! [`crate::channels`].

pub mod animation;

pub use animation::{animation_task, boot, run_event, FrameClock};
